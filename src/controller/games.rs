use crate::model::{BbbFeats, BbbScoring, Game, GameType, HoleScore, PlayerId, RoundSetup};

fn lowest_net(scores: &[HoleScore]) -> Option<i32> {
    scores.iter().map(|s| s.net_score).min()
}

fn net_for(scores: &[HoleScore], player_id: &str) -> Option<i32> {
    scores
        .iter()
        .find(|s| s.player_id == player_id)
        .map(|s| s.net_score)
}

fn ties_lowest(scores: &[HoleScore], player_id: &str) -> bool {
    match (net_for(scores, player_id), lowest_net(scores)) {
        (Some(net), Some(lowest)) => net == lowest,
        _ => false,
    }
}

/// One point to every player tied for the lowest net score on the hole.
#[must_use]
pub fn bingo_bango_bongo_points(scores: &[HoleScore], player_id: &str) -> f64 {
    if ties_lowest(scores, player_id) { 1.0 } else { 0.0 }
}

/// One point per feat the player won on the hole.
#[must_use]
pub fn bbb_feat_points(feats: &BbbFeats, player_id: &str) -> f64 {
    [&feats.bingo, &feats.bango, &feats.bongo]
        .into_iter()
        .filter(|winner| winner.as_deref() == Some(player_id))
        .count() as f64
}

/// The wolf rotates through the round's players in order, starting on hole 1.
#[must_use]
pub fn wolf_for_hole(players: &[PlayerId], hole: u32) -> Option<&PlayerId> {
    if players.is_empty() {
        return None;
    }
    let idx = hole.checked_sub(1)? as usize % players.len();
    players.get(idx)
}

/// Players tied for the lowest net score take 1 point, the wolf takes 2.
#[must_use]
pub fn wolf_points(scores: &[HoleScore], players: &[PlayerId], hole: u32, player_id: &str) -> f64 {
    if !ties_lowest(scores, player_id) {
        return 0.0;
    }
    match wolf_for_hole(players, hole) {
        Some(wolf) if wolf == player_id => 2.0,
        _ => 1.0,
    }
}

fn team_best(scores: &[HoleScore], team: &[PlayerId]) -> Option<i32> {
    scores
        .iter()
        .filter(|s| team.contains(&s.player_id))
        .map(|s| s.net_score)
        .min()
}

/// Best-ball team comparison: 1 for the outright best team, 0.5 when tied for
/// best, 0 otherwise.
#[must_use]
pub fn four_ball_points(scores: &[HoleScore], teams: &[Vec<PlayerId>], player_id: &str) -> f64 {
    let Some(own_team) = teams
        .iter()
        .find(|team| team.iter().any(|p| p == player_id))
    else {
        return 0.0;
    };
    let Some(own_best) = team_best(scores, own_team) else {
        return 0.0;
    };
    let Some(other_best) = teams
        .iter()
        .filter(|team| !team.iter().any(|p| p == player_id))
        .filter_map(|team| team_best(scores, team))
        .min()
    else {
        return 0.0;
    };

    match own_best.cmp(&other_best) {
        std::cmp::Ordering::Less => 1.0,
        std::cmp::Ordering::Equal => 0.5,
        std::cmp::Ordering::Greater => 0.0,
    }
}

/// Strokes under par. Informational only, never used for ranking.
#[must_use]
pub fn stroke_play_points(net_score: i32, par: i32) -> f64 {
    f64::from(par - net_score)
}

/// Points `player_id` earns on `hole` in `game`, given the participants' scores
/// for that hole.
///
/// Bingo Bango Bongo games scored by feats return 0 here; their points come
/// from [`bbb_feat_points`].
#[must_use]
pub fn game_points(
    game: &Game,
    hole_scores: &[HoleScore],
    round: &RoundSetup,
    player_id: &str,
    hole: u32,
    par: i32,
) -> f64 {
    match game.game_type {
        GameType::BingoBangoBongo => match game.bbb_scoring {
            BbbScoring::LowestNet => bingo_bango_bongo_points(hole_scores, player_id),
            BbbScoring::Feats => 0.0,
        },
        GameType::Wolf => wolf_points(hole_scores, &round.player_ids(), hole, player_id),
        GameType::FourBall => {
            four_ball_points(hole_scores, &game.four_ball_teams(&round.players), player_id)
        }
        GameType::Stroke => net_for(hole_scores, player_id)
            .map_or(0.0, |net| stroke_play_points(net, par)),
    }
}
