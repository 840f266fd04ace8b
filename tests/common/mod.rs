#![allow(dead_code)]

use chrono::NaiveDate;

use golf_rounds::model::{Game, GameType, HoleScore, Player, RoundSetup};

pub fn player(id: &str, name: &str, handicap_index: f64, tee: &str) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        handicap_index,
        tee: tee.to_string(),
    }
}

pub fn game(id: &str, game_type: GameType, players: &[&str]) -> Game {
    Game::new(
        id,
        game_type,
        players.iter().map(|p| (*p).to_string()).collect(),
    )
}

pub fn round(course_id: &str, players: Vec<Player>, games: Vec<Game>) -> RoundSetup {
    RoundSetup {
        id: "round-123".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 4, 12).unwrap_or_default(),
        course_id: course_id.to_string(),
        players,
        games,
        current_hole: 1,
        total_holes: 18,
    }
}

pub fn net(player_id: &str, hole: u32, net_score: i32) -> HoleScore {
    HoleScore::new(player_id, hole, net_score, net_score)
}

/// Ann (10.0) and Ben (0.0) off the Regular tee at Pine Valley: course handicaps 13 and 0.
pub fn ann_and_ben() -> Vec<Player> {
    vec![
        player("p1", "Ann", 10.0, "tee2"),
        player("p2", "Ben", 0.0, "tee2"),
    ]
}
