//! Round scripts: a whole round described up front and replayed through the
//! round loop hole by hole.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::controller::scorecard::GrossEntry;
use crate::error::RoundError;
use crate::model::{
    BbbFeats, CourseId, DEFAULT_TOTAL_HOLES, Game, Player, PlayerId, RoundUpdate, find_course,
};
use crate::mvu::round::{Msg, RoundState};
use crate::mvu::runtime::RoundHandle;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScriptHole {
    /// Hole to jump to before scoring. Defaults to the round's current hole.
    #[serde(default)]
    pub hole: Option<u32>,
    pub scores: BTreeMap<PlayerId, i32>,
    #[serde(default)]
    pub bbb: Option<BbbFeats>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundScript {
    pub course_id: CourseId,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub total_holes: Option<u32>,
    pub players: Vec<Player>,
    pub games: Vec<Game>,
    pub holes: Vec<ScriptHole>,
}

impl RoundScript {
    /// Gross entries for one scripted hole, in round-player order.
    #[must_use]
    pub fn entries_for(&self, hole: &ScriptHole) -> Vec<GrossEntry> {
        self.players
            .iter()
            .filter_map(|p| {
                hole.scores
                    .get(&p.id)
                    .map(|gross| GrossEntry::new(p.id.clone(), *gross))
            })
            .collect()
    }

    /// Checks the script against the course catalogue before anything is replayed.
    ///
    /// # Errors
    /// Returns `RoundError::NotFound` for an unknown course, a tee or game error from
    /// validation, or `RoundError::InvalidScore` for a score by a player outside
    /// the round.
    pub fn validate(&self, state: &RoundState) -> Result<(), RoundError> {
        let course = find_course(&state.courses, &self.course_id)
            .ok_or_else(|| RoundError::NotFound(format!("course {}", self.course_id)))?;
        course.validate(self.total_holes.unwrap_or(DEFAULT_TOTAL_HOLES))?;
        for game in &self.games {
            game.validate(&self.players)?;
        }
        for (i, hole) in self.holes.iter().enumerate() {
            if let Some(unknown) = hole
                .scores
                .keys()
                .find(|id| !self.players.iter().any(|p| &p.id == *id))
            {
                return Err(RoundError::InvalidScore(format!(
                    "holes[{i}]: {unknown} is not in the round"
                )));
            }
        }
        Ok(())
    }
}

/// Replays `script` through the round loop and returns the final state.
///
/// # Errors
/// Returns the first validation or scoring error, or an error if the loop stopped.
pub async fn replay(handle: &RoundHandle, script: &RoundScript) -> Result<RoundState, RoundError> {
    script.validate(&handle.get_state())?;

    handle
        .setup_new_round(
            script.course_id.clone(),
            script.players.clone(),
            script.games.clone(),
        )
        .await?;
    if script.date.is_some() || script.total_holes.is_some() {
        handle
            .dispatch(Msg::UpdateRound(RoundUpdate {
                date: script.date,
                total_holes: script.total_holes,
                ..RoundUpdate::default()
            }))
            .await?;
    }

    for hole in &script.holes {
        if let Some(n) = hole.hole {
            handle.navigate_to_hole(n).await?;
        }
        handle
            .submit_hole(script.entries_for(hole), hole.bbb.clone())
            .await?;
    }
    Ok(handle.get_state())
}
