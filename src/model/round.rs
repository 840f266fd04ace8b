use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RoundError;
use crate::model::course::{CourseId, TeeId};

pub type PlayerId = String;
pub type GameId = String;
pub type RoundId = String;

pub const DEFAULT_TOTAL_HOLES: u32 = 18;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub handicap_index: f64,
    pub tee: TeeId,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum GameType {
    Stroke,
    BingoBangoBongo,
    Wolf,
    FourBall,
}

impl GameType {
    #[must_use]
    pub fn default_handicap_percentage(self) -> u32 {
        match self {
            Self::Stroke => 100,
            Self::BingoBangoBongo => 80,
            Self::Wolf | Self::FourBall => 90,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Stroke => "Stroke Play",
            Self::BingoBangoBongo => "Bingo Bango Bongo",
            Self::Wolf => "Wolf",
            Self::FourBall => "Four Ball",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// How a Bingo Bango Bongo game awards its points. One mode per game.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BbbScoring {
    /// One point to every player tied for the lowest net score.
    #[default]
    LowestNet,
    /// One point per feat (bingo, bango, bongo) recorded for the hole.
    Feats,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    #[serde(rename = "type")]
    pub game_type: GameType,
    pub handicap_percentage: u32,
    pub players: Vec<PlayerId>,
    /// Four Ball pairings. Empty means consecutive participants are paired.
    #[serde(default)]
    pub teams: Vec<[PlayerId; 2]>,
    #[serde(default)]
    pub bbb_scoring: BbbScoring,
}

impl Game {
    #[must_use]
    pub fn new(id: impl Into<GameId>, game_type: GameType, players: Vec<PlayerId>) -> Self {
        Self {
            id: id.into(),
            game_type,
            handicap_percentage: game_type.default_handicap_percentage(),
            players,
            teams: Vec::new(),
            bbb_scoring: BbbScoring::default(),
        }
    }

    #[must_use]
    pub fn includes(&self, player_id: &str) -> bool {
        self.players.iter().any(|p| p == player_id)
    }

    /// Explicit teams, or participants paired in round-player order.
    #[must_use]
    pub fn four_ball_teams(&self, round_players: &[Player]) -> Vec<Vec<PlayerId>> {
        if !self.teams.is_empty() {
            return self.teams.iter().map(|pair| pair.to_vec()).collect();
        }
        let ordered: Vec<PlayerId> = round_players
            .iter()
            .filter(|p| self.includes(&p.id))
            .map(|p| p.id.clone())
            .collect();
        ordered
            .chunks(2)
            .filter(|chunk| chunk.len() == 2)
            .map(<[PlayerId]>::to_vec)
            .collect()
    }

    /// # Errors
    /// Returns `RoundError::InvalidGame` when the percentage is above 100, a
    /// participant is not a round player, or the teams reference players outside the
    /// game or list a player twice.
    pub fn validate(&self, round_players: &[Player]) -> Result<(), RoundError> {
        if self.handicap_percentage > 100 {
            return Err(RoundError::InvalidGame(format!(
                "{}: handicap percentage {} is above 100",
                self.id, self.handicap_percentage
            )));
        }
        if self.players.is_empty() {
            return Err(RoundError::InvalidGame(format!("{}: no players", self.id)));
        }
        for player_id in &self.players {
            if !round_players.iter().any(|p| &p.id == player_id) {
                return Err(RoundError::InvalidGame(format!(
                    "{}: {player_id} is not in the round",
                    self.id
                )));
            }
        }
        let mut seen: Vec<&PlayerId> = Vec::new();
        for player_id in self.teams.iter().flatten() {
            if !self.includes(player_id) {
                return Err(RoundError::InvalidGame(format!(
                    "{}: team member {player_id} is not playing this game",
                    self.id
                )));
            }
            if seen.contains(&player_id) {
                return Err(RoundError::InvalidGame(format!(
                    "{}: {player_id} is on more than one team",
                    self.id
                )));
            }
            seen.push(player_id);
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundSetup {
    pub id: RoundId,
    pub date: NaiveDate,
    pub course_id: CourseId,
    pub players: Vec<Player>,
    pub games: Vec<Game>,
    pub current_hole: u32,
    pub total_holes: u32,
}

impl RoundSetup {
    #[must_use]
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    #[must_use]
    pub fn game(&self, game_id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id == game_id)
    }

    #[must_use]
    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id.clone()).collect()
    }

    /// # Errors
    /// Returns the first game that fails [`Game::validate`].
    pub fn validate_games(&self) -> Result<(), RoundError> {
        for game in &self.games {
            game.validate(&self.players)?;
        }
        Ok(())
    }
}

/// Fields of a round that `UpdateRound` may replace. `None` leaves the field alone.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundUpdate {
    pub date: Option<NaiveDate>,
    pub course_id: Option<CourseId>,
    pub players: Option<Vec<Player>>,
    pub games: Option<Vec<Game>>,
    pub current_hole: Option<u32>,
    pub total_holes: Option<u32>,
}

impl RoundUpdate {
    #[must_use]
    pub fn players(players: Vec<Player>) -> Self {
        Self {
            players: Some(players),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn games(games: Vec<Game>) -> Self {
        Self {
            games: Some(games),
            ..Self::default()
        }
    }

    pub fn apply_to(self, round: &mut RoundSetup) {
        if let Some(date) = self.date {
            round.date = date;
        }
        if let Some(course_id) = self.course_id {
            round.course_id = course_id;
        }
        if let Some(players) = self.players {
            round.players = players;
        }
        if let Some(games) = self.games {
            round.games = games;
        }
        if let Some(current_hole) = self.current_hole {
            round.current_hole = current_hole;
        }
        if let Some(total_holes) = self.total_holes {
            round.total_holes = total_holes;
        }
    }
}

/// `<kind>-<unix millis>`, the id shape used for rounds, players and games.
#[must_use]
pub fn new_id(kind: &str) -> String {
    format!("{kind}-{}", chrono::Utc::now().timestamp_millis())
}
