use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::round::{GameId, PlayerId, RoundId};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoleScore {
    pub player_id: PlayerId,
    pub hole: u32,
    pub gross_score: i32,
    pub net_score: i32,
    #[serde(default)]
    pub points: BTreeMap<GameId, f64>,
}

impl HoleScore {
    #[must_use]
    pub fn new(player_id: impl Into<PlayerId>, hole: u32, gross_score: i32, net_score: i32) -> Self {
        Self {
            player_id: player_id.into(),
            hole,
            gross_score,
            net_score,
            points: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn same_key(&self, other: &HoleScore) -> bool {
        self.player_id == other.player_id && self.hole == other.hole
    }

    #[must_use]
    pub fn points_for(&self, game_id: &str) -> f64 {
        self.points.get(game_id).copied().unwrap_or(0.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameScore {
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub total_points: f64,
    pub points_by_hole: Vec<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundData {
    pub round_id: RoundId,
    pub scores: Vec<HoleScore>,
    pub game_scores: Vec<GameScore>,
}

impl RoundData {
    #[must_use]
    pub fn new(round_id: impl Into<RoundId>) -> Self {
        Self {
            round_id: round_id.into(),
            scores: Vec::new(),
            game_scores: Vec::new(),
        }
    }

    #[must_use]
    pub fn scores_for_hole(&self, hole: u32) -> Vec<&HoleScore> {
        self.scores.iter().filter(|s| s.hole == hole).collect()
    }

    #[must_use]
    pub fn score(&self, player_id: &str, hole: u32) -> Option<&HoleScore> {
        self.scores
            .iter()
            .find(|s| s.player_id == player_id && s.hole == hole)
    }

    /// Replaces the entry with the same (player, hole), else appends.
    pub fn upsert(&mut self, score: HoleScore) {
        match self.scores.iter().position(|s| s.same_key(&score)) {
            Some(idx) => self.scores[idx] = score,
            None => self.scores.push(score),
        }
    }
}

/// The three Bingo Bango Bongo feats for one hole.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BbbFeats {
    /// First on the green.
    pub bingo: Option<PlayerId>,
    /// Closest to the pin once everyone is on.
    pub bango: Option<PlayerId>,
    /// First in the hole.
    pub bongo: Option<PlayerId>,
}

impl BbbFeats {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.bingo.is_some() && self.bango.is_some() && self.bongo.is_some()
    }
}
