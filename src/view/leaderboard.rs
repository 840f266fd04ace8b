use serde::Serialize;
use std::fmt::Write;

use crate::controller::leaderboard::{
    GameStanding, StrokeStanding, game_standings, is_round_complete, stroke_standings,
};
use crate::model::{GameScore, RoundId};
use crate::mvu::round::RoundState;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub round_id: RoundId,
    pub course_name: String,
    pub date: String,
    pub player_count: usize,
    pub game_count: usize,
    pub current_hole: u32,
    pub complete: bool,
    pub stroke_play: Vec<StrokeStanding>,
    pub games: Vec<GameStanding>,
    pub game_scores: Vec<GameScore>,
}

/// Builds the leaderboard view of the active round, `None` without one.
#[must_use]
pub fn round_summary(state: &RoundState) -> Option<RoundSummary> {
    let round = state.current_round.as_ref()?;
    let data = state.round_data.as_ref()?;
    let course_name = state
        .current_course()
        .map_or_else(|| round.course_id.clone(), |c| c.name.clone());
    Some(RoundSummary {
        round_id: round.id.clone(),
        course_name,
        date: round.date.format("%Y-%m-%d").to_string(),
        player_count: round.players.len(),
        game_count: round.games.len(),
        current_hole: round.current_hole,
        complete: is_round_complete(round, data),
        stroke_play: stroke_standings(round, data),
        games: game_standings(round, data),
        game_scores: data.game_scores.clone(),
    })
}

fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{points:.0}")
    } else {
        format!("{points:.1}")
    }
}

#[must_use]
pub fn render_text(summary: &RoundSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", summary.course_name, summary.date);
    let _ = writeln!(
        out,
        "{} players, {} games, {}",
        summary.player_count,
        summary.game_count,
        if summary.complete {
            "final".to_string()
        } else {
            format!("thru hole {}", summary.current_hole.saturating_sub(1))
        }
    );

    for standing in &summary.games {
        let _ = writeln!(out, "\n{} Results", standing.game_type.title());
        if standing.players.is_empty() {
            let _ = writeln!(out, "  No scores recorded yet");
        }
        for (i, player) in standing.players.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {:>2}. {:<20} {:>5} pts",
                i + 1,
                player.name,
                format_points(player.total_points)
            );
        }
    }

    for stroke in &summary.stroke_play {
        let _ = writeln!(out, "\nStroke Play Results");
        for (i, player) in stroke.players.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {:>2}. {:<20} {:>4} net {:>4} gross",
                i + 1,
                player.name,
                player.net_score,
                player.gross_score
            );
        }
    }
    out
}

/// # Errors
/// Returns an error if serialization fails.
pub fn render_json(summary: &RoundSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}
