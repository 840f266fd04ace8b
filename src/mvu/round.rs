use serde::Serialize;

use crate::controller::leaderboard::game_scores;
use crate::model::{Course, HoleScore, RoundData, RoundSetup, RoundUpdate, sample_courses};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundState {
    pub courses: Vec<Course>,
    pub current_round: Option<RoundSetup>,
    pub round_data: Option<RoundData>,
    pub error: Option<String>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            courses: sample_courses(),
            current_round: None,
            round_data: None,
            error: None,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    NoRound,
    RoundActive,
}

impl RoundState {
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        if self.current_round.is_some() {
            RoundPhase::RoundActive
        } else {
            RoundPhase::NoRound
        }
    }

    #[must_use]
    pub fn current_course(&self) -> Option<&Course> {
        let round = self.current_round.as_ref()?;
        self.courses.iter().find(|c| c.id == round.course_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    SetCourses(Vec<Course>),
    CreateRound(RoundSetup),
    UpdateRound(RoundUpdate),
    SetCurrentHole(u32),
    RecordScore(HoleScore),
    ResetRound,
    SetError(String),
    ClearError,
}

impl Msg {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Msg::SetCourses(_) => "SetCourses",
            Msg::CreateRound(_) => "CreateRound",
            Msg::UpdateRound(_) => "UpdateRound",
            Msg::SetCurrentHole(_) => "SetCurrentHole",
            Msg::RecordScore(_) => "RecordScore",
            Msg::ResetRound => "ResetRound",
            Msg::SetError(_) => "SetError",
            Msg::ClearError => "ClearError",
        }
    }
}

/// Applies one message and returns the next snapshot. `state` is left untouched.
#[must_use]
pub fn update(state: &RoundState, msg: Msg) -> RoundState {
    let mut next = state.clone();
    match msg {
        Msg::SetCourses(courses) => {
            next.courses = courses;
        }
        Msg::CreateRound(round) => {
            next.round_data = Some(RoundData::new(round.id.clone()));
            next.current_round = Some(round);
        }
        Msg::UpdateRound(fields) => {
            if let Some(round) = next.current_round.as_mut() {
                fields.apply_to(round);
            }
        }
        Msg::SetCurrentHole(hole) => {
            // no bounds check here, navigate_to_hole clamps
            if let Some(round) = next.current_round.as_mut() {
                round.current_hole = hole;
            }
        }
        Msg::RecordScore(score) => {
            if let Some(data) = next.round_data.as_mut() {
                data.upsert(score);
                if let Some(round) = next.current_round.as_ref() {
                    data.game_scores = game_scores(round, data);
                }
            }
        }
        Msg::ResetRound => {
            next.current_round = None;
            next.round_data = None;
        }
        Msg::SetError(e) => {
            next.error = Some(e);
        }
        Msg::ClearError => {
            next.error = None;
        }
    }
    next
}
