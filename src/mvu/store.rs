use serde_json::json;

use super::round::{Msg, RoundState, update};
use crate::controller::scorecard::{GrossEntry, score_hole};
use crate::error::RoundError;
use crate::model::{
    BbbFeats, Course, DEFAULT_TOTAL_HOLES, Game, HoleScore, Player, RoundSetup, RoundUpdate,
    new_id,
};

/// Where a hole submission left the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoleOutcome {
    NextHole(u32),
    RoundComplete,
}

/// Single-writer owner of the round state. Every operation runs one message
/// through [`update`] and returns the resulting snapshot.
#[derive(Debug, Clone)]
pub struct RoundStore {
    state: RoundState,
    log_messages: bool,
}

impl Default for RoundStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundStore {
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(RoundState::default())
    }

    #[must_use]
    pub fn from_state(state: RoundState) -> Self {
        Self {
            state,
            log_messages: cfg!(debug_assertions),
        }
    }

    #[must_use]
    pub fn with_logging(mut self, log_messages: bool) -> Self {
        self.log_messages = log_messages;
        self
    }

    #[must_use]
    pub fn logs_messages(&self) -> bool {
        self.log_messages
    }

    #[must_use]
    pub fn get_state(&self) -> &RoundState {
        &self.state
    }

    pub fn dispatch(&mut self, msg: Msg) -> &RoundState {
        let name = msg.name();
        self.state = update(&self.state, msg);
        if self.log_messages {
            let round = self.state.current_round.as_ref();
            eprintln!(
                "{}",
                json!({
                    "mvu": "update",
                    "msg": name,
                    "phase": format!("{:?}", self.state.phase()),
                    "round": round.map(|r| r.id.as_str()),
                    "hole": round.map(|r| r.current_hole),
                    "scores": self.state.round_data.as_ref().map(|d| d.scores.len()),
                })
            );
        }
        &self.state
    }

    pub fn set_courses(&mut self, courses: Vec<Course>) -> &RoundState {
        self.dispatch(Msg::SetCourses(courses))
    }

    pub fn create_round(&mut self, round: RoundSetup) -> &RoundState {
        self.dispatch(Msg::CreateRound(round))
    }

    pub fn update_round(&mut self, fields: RoundUpdate) -> &RoundState {
        self.dispatch(Msg::UpdateRound(fields))
    }

    pub fn set_current_hole(&mut self, hole: u32) -> &RoundState {
        self.dispatch(Msg::SetCurrentHole(hole))
    }

    pub fn record_score(&mut self, score: HoleScore) -> &RoundState {
        self.dispatch(Msg::RecordScore(score))
    }

    pub fn reset_round(&mut self) -> &RoundState {
        self.dispatch(Msg::ResetRound)
    }

    pub fn set_error(&mut self, error: impl Into<String>) -> &RoundState {
        self.dispatch(Msg::SetError(error.into()))
    }

    pub fn clear_error(&mut self) -> &RoundState {
        self.dispatch(Msg::ClearError)
    }

    /// Starts an 18-hole round dated today on the first hole.
    pub fn setup_new_round(
        &mut self,
        course_id: impl Into<String>,
        players: Vec<Player>,
        games: Vec<Game>,
    ) -> &RoundState {
        let round = RoundSetup {
            id: new_id("round"),
            date: chrono::Local::now().date_naive(),
            course_id: course_id.into(),
            players,
            games,
            current_hole: 1,
            total_holes: DEFAULT_TOTAL_HOLES,
        };
        self.create_round(round)
    }

    pub fn add_player(&mut self, player: Player) -> &RoundState {
        let Some(round) = self.state.current_round.as_ref() else {
            return &self.state;
        };
        let mut players = round.players.clone();
        players.push(player);
        self.update_round(RoundUpdate::players(players))
    }

    pub fn remove_player(&mut self, player_id: &str) -> &RoundState {
        let Some(round) = self.state.current_round.as_ref() else {
            return &self.state;
        };
        let players = round
            .players
            .iter()
            .filter(|p| p.id != player_id)
            .cloned()
            .collect();
        self.update_round(RoundUpdate::players(players))
    }

    pub fn add_game(&mut self, game: Game) -> &RoundState {
        let Some(round) = self.state.current_round.as_ref() else {
            return &self.state;
        };
        let mut games = round.games.clone();
        games.push(game);
        self.update_round(RoundUpdate::games(games))
    }

    pub fn remove_game(&mut self, game_id: &str) -> &RoundState {
        let Some(round) = self.state.current_round.as_ref() else {
            return &self.state;
        };
        let games = round
            .games
            .iter()
            .filter(|g| g.id != game_id)
            .cloned()
            .collect();
        self.update_round(RoundUpdate::games(games))
    }

    /// Moves to `hole`, clamped to `1..=total_holes`. No-op without a round.
    pub fn navigate_to_hole(&mut self, hole: u32) -> &RoundState {
        let Some(round) = self.state.current_round.as_ref() else {
            return &self.state;
        };
        let hole = hole.clamp(1, round.total_holes.max(1));
        self.set_current_hole(hole)
    }

    /// Scores and records the current hole, then advances to the next one.
    ///
    /// # Errors
    /// Returns `RoundError::NoActiveRound` without a round, `RoundError::InvalidScore`
    /// when the current hole is outside `1..=total_holes`, `RoundError::NotFound`
    /// when the round's course is not in the catalogue, and any error from
    /// [`score_hole`]. Nothing is recorded on error.
    pub fn submit_hole(
        &mut self,
        entries: &[GrossEntry],
        feats: Option<&BbbFeats>,
    ) -> Result<HoleOutcome, RoundError> {
        let round = self
            .state
            .current_round
            .clone()
            .ok_or(RoundError::NoActiveRound)?;
        if !(1..=round.total_holes).contains(&round.current_hole) {
            return Err(RoundError::InvalidScore(format!(
                "hole {} is outside 1..={}",
                round.current_hole, round.total_holes
            )));
        }
        let course = self
            .state
            .current_course()
            .ok_or_else(|| RoundError::NotFound(format!("course {}", round.course_id)))?;

        let scores = score_hole(course, &round, round.current_hole, entries, feats)?;
        for score in scores {
            self.record_score(score);
        }

        if round.current_hole >= round.total_holes {
            Ok(HoleOutcome::RoundComplete)
        } else {
            let next = round.current_hole + 1;
            self.set_current_hole(next);
            Ok(HoleOutcome::NextHole(next))
        }
    }
}
