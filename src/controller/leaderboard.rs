use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::model::{GameId, GameScore, GameType, PlayerId, RoundData, RoundSetup};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPoints {
    pub player_id: PlayerId,
    pub name: String,
    pub total_points: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameStanding {
    pub game_id: GameId,
    pub game_type: GameType,
    pub players: Vec<PlayerPoints>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStrokes {
    pub player_id: PlayerId,
    pub name: String,
    pub gross_score: i32,
    pub net_score: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StrokeStanding {
    pub game_id: GameId,
    pub players: Vec<PlayerStrokes>,
}

/// Per-game point totals for every participant, with a per-hole breakdown.
#[must_use]
pub fn game_scores(round: &RoundSetup, data: &RoundData) -> Vec<GameScore> {
    let holes = round.total_holes as usize;
    let mut out = Vec::new();
    for game in &round.games {
        for player in round.players.iter().filter(|p| game.includes(&p.id)) {
            let mut points_by_hole = vec![0.0; holes];
            let mut total_points = 0.0;
            for score in data.scores.iter().filter(|s| s.player_id == player.id) {
                let Some(points) = score.points.get(&game.id) else {
                    continue;
                };
                total_points += points;
                if let Some(slot) = (score.hole as usize)
                    .checked_sub(1)
                    .and_then(|i| points_by_hole.get_mut(i))
                {
                    *slot += points;
                }
            }
            out.push(GameScore {
                game_id: game.id.clone(),
                player_id: player.id.clone(),
                total_points,
                points_by_hole,
            });
        }
    }
    out
}

/// Points standings for every non-stroke game, highest total first.
#[must_use]
pub fn game_standings(round: &RoundSetup, data: &RoundData) -> Vec<GameStanding> {
    let mut totals: HashMap<(GameId, PlayerId), f64, RandomState> = HashMap::default();
    for score in &data.scores {
        for (game_id, points) in &score.points {
            *totals
                .entry((game_id.clone(), score.player_id.clone()))
                .or_insert(0.0) += points;
        }
    }

    round
        .games
        .iter()
        .filter(|g| g.game_type != GameType::Stroke)
        .map(|game| {
            let mut players: Vec<PlayerPoints> = round
                .players
                .iter()
                .filter(|p| game.includes(&p.id))
                .map(|p| PlayerPoints {
                    player_id: p.id.clone(),
                    name: p.name.clone(),
                    total_points: totals
                        .get(&(game.id.clone(), p.id.clone()))
                        .copied()
                        .unwrap_or(0.0),
                })
                .collect();
            players.sort_by(|a, b| b.total_points.total_cmp(&a.total_points));
            GameStanding {
                game_id: game.id.clone(),
                game_type: game.game_type,
                players,
            }
        })
        .collect()
}

/// Gross and net totals for every stroke play game, lowest net first within
/// each game.
#[must_use]
pub fn stroke_standings(round: &RoundSetup, data: &RoundData) -> Vec<StrokeStanding> {
    round
        .games
        .iter()
        .filter(|g| g.game_type == GameType::Stroke)
        .map(|game| {
            let mut players: Vec<PlayerStrokes> = round
                .players
                .iter()
                .filter(|p| game.includes(&p.id))
                .map(|p| {
                    let (gross_score, net_score) = data
                        .scores
                        .iter()
                        .filter(|s| s.player_id == p.id)
                        .fold((0, 0), |(gross, net), s| {
                            (gross + s.gross_score, net + s.net_score)
                        });
                    PlayerStrokes {
                        player_id: p.id.clone(),
                        name: p.name.clone(),
                        gross_score,
                        net_score,
                    }
                })
                .collect();
            players.sort_by_key(|p| p.net_score);
            StrokeStanding {
                game_id: game.id.clone(),
                players,
            }
        })
        .collect()
}

/// A round is complete once every hole in `1..=total_holes` has at least one
/// recorded score. Scores on holes outside that range don't count.
#[must_use]
pub fn is_round_complete(round: &RoundSetup, data: &RoundData) -> bool {
    let played: HashSet<u32, RandomState> = data
        .scores
        .iter()
        .map(|s| s.hole)
        .filter(|hole| (1..=round.total_holes).contains(hole))
        .collect();
    played.len() == round.total_holes as usize
}
