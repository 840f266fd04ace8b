mod common;

use common::{game, net, player, round};
use golf_rounds::controller::games::{
    bbb_feat_points, bingo_bango_bongo_points, four_ball_points, game_points, stroke_play_points,
    wolf_for_hole, wolf_points,
};
use golf_rounds::model::{BbbFeats, BbbScoring, GameType, PlayerId};

fn ids(players: &[&str]) -> Vec<PlayerId> {
    players.iter().map(|p| (*p).to_string()).collect()
}

fn four_players() -> Vec<golf_rounds::model::Player> {
    vec![
        player("a", "Ann", 10.0, "tee2"),
        player("b", "Ben", 10.0, "tee2"),
        player("c", "Cat", 10.0, "tee2"),
        player("d", "Dan", 10.0, "tee2"),
    ]
}

#[test]
fn test02_bingo_bango_bongo_shares_lowest_net() {
    let scores = vec![net("a", 1, 4), net("b", 1, 4), net("c", 1, 5)];
    assert_eq!(bingo_bango_bongo_points(&scores, "a"), 1.0);
    assert_eq!(bingo_bango_bongo_points(&scores, "b"), 1.0);
    assert_eq!(bingo_bango_bongo_points(&scores, "c"), 0.0);
    assert_eq!(bingo_bango_bongo_points(&scores, "zed"), 0.0);
    assert_eq!(bingo_bango_bongo_points(&[], "a"), 0.0);

    let total: f64 = ["a", "b", "c"]
        .iter()
        .map(|p| bingo_bango_bongo_points(&scores, p))
        .sum();
    assert!(total <= 3.0);
}

#[test]
fn test02_feats_award_one_point_each() {
    let feats = BbbFeats {
        bingo: Some("a".to_string()),
        bango: Some("b".to_string()),
        bongo: Some("a".to_string()),
    };
    assert!(feats.is_complete());
    assert_eq!(bbb_feat_points(&feats, "a"), 2.0);
    assert_eq!(bbb_feat_points(&feats, "b"), 1.0);
    assert_eq!(bbb_feat_points(&feats, "c"), 0.0);
    assert_eq!(bbb_feat_points(&BbbFeats::default(), "a"), 0.0);
}

#[test]
fn test02_wolf_rotates_by_hole() {
    let order = ids(&["a", "b", "c", "d"]);
    assert_eq!(wolf_for_hole(&order, 1).map(String::as_str), Some("a"));
    assert_eq!(wolf_for_hole(&order, 4).map(String::as_str), Some("d"));
    assert_eq!(wolf_for_hole(&order, 5).map(String::as_str), Some("a"));
    assert_eq!(wolf_for_hole(&order, 6).map(String::as_str), Some("b"));
    assert_eq!(wolf_for_hole(&order, 0), None);
    assert_eq!(wolf_for_hole(&[], 3), None);
}

#[test]
fn test02_wolf_doubles_for_the_wolf() {
    let order = ids(&["a", "b", "c", "d"]);
    let scores = vec![net("a", 1, 3), net("b", 1, 3), net("c", 1, 4), net("d", 1, 5)];

    assert_eq!(wolf_points(&scores, &order, 1, "a"), 2.0);
    assert_eq!(wolf_points(&scores, &order, 1, "b"), 1.0);
    assert_eq!(wolf_points(&scores, &order, 1, "c"), 0.0);

    assert_eq!(wolf_points(&scores, &order, 6, "a"), 1.0);
    assert_eq!(wolf_points(&scores, &order, 6, "b"), 2.0);
    // wolf not tied for low scores nothing extra
    assert_eq!(wolf_points(&scores, &order, 3, "c"), 0.0);
}

#[test]
fn test02_four_ball_best_ball_wins() {
    let teams = vec![ids(&["a", "c"]), ids(&["b", "d"])];
    let scores = vec![net("a", 1, 5), net("b", 1, 4), net("c", 1, 3), net("d", 1, 6)];

    let points: Vec<f64> = ["a", "b", "c", "d"]
        .iter()
        .map(|p| four_ball_points(&scores, &teams, p))
        .collect();
    assert_eq!(points, vec![1.0, 0.0, 1.0, 0.0]);
    assert_eq!(points.iter().sum::<f64>(), 2.0);
}

#[test]
fn test02_four_ball_halved_hole() {
    let teams = vec![ids(&["a", "b"]), ids(&["c", "d"])];
    let scores = vec![net("a", 1, 4), net("b", 1, 5), net("c", 1, 6), net("d", 1, 4)];

    let points: Vec<f64> = ["a", "b", "c", "d"]
        .iter()
        .map(|p| four_ball_points(&scores, &teams, p))
        .collect();
    assert_eq!(points, vec![0.5, 0.5, 0.5, 0.5]);
    assert_eq!(points[0] + points[1], 1.0);
    assert_eq!(points[2] + points[3], 1.0);
}

#[test]
fn test02_four_ball_handles_more_than_two_teams() {
    let teams = vec![ids(&["a", "b"]), ids(&["c", "d"]), ids(&["e", "f"])];
    let scores = vec![
        net("a", 1, 5),
        net("b", 1, 4),
        net("c", 1, 4),
        net("d", 1, 6),
        net("e", 1, 5),
        net("f", 1, 5),
    ];
    assert_eq!(four_ball_points(&scores, &teams, "a"), 0.5);
    assert_eq!(four_ball_points(&scores, &teams, "d"), 0.5);
    assert_eq!(four_ball_points(&scores, &teams, "e"), 0.0);
    // not on any team
    assert_eq!(four_ball_points(&scores, &teams, "g"), 0.0);
    // only one team has a score
    assert_eq!(four_ball_points(&scores[..2], &teams, "a"), 0.0);
}

#[test]
fn test02_stroke_play_is_par_minus_net() {
    assert_eq!(stroke_play_points(3, 4), 1.0);
    assert_eq!(stroke_play_points(6, 4), -2.0);
}

#[test]
fn test02_game_points_dispatches_on_game_type() {
    let players = four_players();
    let stroke = game("g-stroke", GameType::Stroke, &["a", "b", "c", "d"]);
    let bbb = game("g-bbb", GameType::BingoBangoBongo, &["a", "b", "c", "d"]);
    let wolf = game("g-wolf", GameType::Wolf, &["a", "b", "c", "d"]);
    let four_ball = game("g-4b", GameType::FourBall, &["a", "b", "c", "d"]);
    let mut bbb_feats = game("g-bbb2", GameType::BingoBangoBongo, &["a", "b", "c", "d"]);
    bbb_feats.bbb_scoring = BbbScoring::Feats;
    let ctx = round(
        "course1",
        players,
        vec![
            stroke.clone(),
            bbb.clone(),
            wolf.clone(),
            four_ball.clone(),
            bbb_feats.clone(),
        ],
    );

    let scores = vec![net("a", 2, 3), net("b", 2, 5), net("c", 2, 4), net("d", 2, 5)];

    assert_eq!(game_points(&stroke, &scores, &ctx, "a", 2, 4), 1.0);
    assert_eq!(game_points(&stroke, &scores, &ctx, "zed", 2, 4), 0.0);
    assert_eq!(game_points(&bbb, &scores, &ctx, "a", 2, 4), 1.0);
    assert_eq!(game_points(&bbb, &scores, &ctx, "c", 2, 4), 0.0);
    assert_eq!(game_points(&bbb_feats, &scores, &ctx, "a", 2, 4), 0.0);
    // hole 2 wolf is b
    assert_eq!(game_points(&wolf, &scores, &ctx, "a", 2, 4), 1.0);
    // no explicit teams: a+b against c+d
    assert_eq!(game_points(&four_ball, &scores, &ctx, "a", 2, 4), 1.0);
    assert_eq!(game_points(&four_ball, &scores, &ctx, "b", 2, 4), 1.0);
    assert_eq!(game_points(&four_ball, &scores, &ctx, "c", 2, 4), 0.0);
}

#[test]
fn test02_explicit_teams_override_positional_pairing() {
    let mut four_ball = game("g-4b", GameType::FourBall, &["a", "b", "c", "d"]);
    four_ball.teams = vec![
        ["a".to_string(), "d".to_string()],
        ["b".to_string(), "c".to_string()],
    ];
    let ctx = round("course1", four_players(), vec![four_ball.clone()]);
    let scores = vec![net("a", 1, 5), net("b", 1, 5), net("c", 1, 4), net("d", 1, 6)];

    assert_eq!(game_points(&four_ball, &scores, &ctx, "a", 1, 4), 0.0);
    assert_eq!(game_points(&four_ball, &scores, &ctx, "b", 1, 4), 1.0);
    assert_eq!(game_points(&four_ball, &scores, &ctx, "c", 1, 4), 1.0);
}
