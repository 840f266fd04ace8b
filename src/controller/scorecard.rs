use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::games::{bbb_feat_points, game_points};
use super::handicap::{adjusted_handicap, course_handicap, net_score};
use crate::error::RoundError;
use crate::model::{
    BbbFeats, BbbScoring, Course, GameId, GameType, HoleScore, Player, PlayerId, RoundSetup,
};

/// Gross strokes entered for one player on the current hole.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GrossEntry {
    pub player_id: PlayerId,
    pub gross_score: i32,
}

impl GrossEntry {
    #[must_use]
    pub fn new(player_id: impl Into<PlayerId>, gross_score: i32) -> Self {
        Self {
            player_id: player_id.into(),
            gross_score,
        }
    }
}

/// What a player brings to one hole: tee par, stroke rank and course handicap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleContext {
    pub par: i32,
    pub rank: i32,
    pub course_handicap: i32,
}

/// Resolves a player's tee (first tee when unknown) and the hole's par and rank.
///
/// # Errors
/// Returns `RoundError::NotFound` when the course has no tees at all.
pub fn hole_context(course: &Course, player: &Player, hole: u32) -> Result<HoleContext, RoundError> {
    let tee = course
        .tee_or_default(&player.tee)
        .ok_or_else(|| RoundError::NotFound(format!("course {} has no tees", course.id)))?;
    Ok(HoleContext {
        par: tee.hole_par(hole),
        rank: tee.hole_rank(hole),
        course_handicap: course_handicap(
            player.handicap_index,
            tee.slope,
            tee.rating,
            tee.total_par(),
        ),
    })
}

/// Turns the gross entries for one hole into stored hole scores.
///
/// The stored net score uses the full course handicap. Game points are computed
/// from every participant's net score under that game's handicap percentage.
/// Entries for players outside the round are skipped.
///
/// # Errors
/// Returns `RoundError::InvalidScore` for a gross score below 1 or a player
/// entered twice, and
/// `RoundError::NotFound` when the course has no tees.
pub fn score_hole(
    course: &Course,
    round: &RoundSetup,
    hole: u32,
    entries: &[GrossEntry],
    feats: Option<&BbbFeats>,
) -> Result<Vec<HoleScore>, RoundError> {
    let mut scored: Vec<(&GrossEntry, HoleContext)> = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.gross_score < 1 {
            return Err(RoundError::InvalidScore(format!(
                "{} on hole {hole}: gross score {} is below 1",
                entry.player_id, entry.gross_score
            )));
        }
        if scored.iter().any(|(seen, _)| seen.player_id == entry.player_id) {
            return Err(RoundError::InvalidScore(format!(
                "{} on hole {hole}: more than one gross score",
                entry.player_id
            )));
        }
        let Some(player) = round.player(&entry.player_id) else {
            continue;
        };
        scored.push((entry, hole_context(course, player, hole)?));
    }

    let per_game: BTreeMap<&GameId, Vec<HoleScore>> = round
        .games
        .iter()
        .map(|game| {
            let scores = scored
                .iter()
                .filter(|(entry, _)| game.includes(&entry.player_id))
                .map(|(entry, ctx)| {
                    let game_handicap =
                        adjusted_handicap(ctx.course_handicap, game.handicap_percentage);
                    HoleScore::new(
                        entry.player_id.clone(),
                        hole,
                        entry.gross_score,
                        net_score(entry.gross_score, game_handicap, ctx.rank, round.total_holes),
                    )
                })
                .collect();
            (&game.id, scores)
        })
        .collect();

    let mut out = Vec::with_capacity(scored.len());
    for (entry, ctx) in &scored {
        let mut score = HoleScore::new(
            entry.player_id.clone(),
            hole,
            entry.gross_score,
            net_score(entry.gross_score, ctx.course_handicap, ctx.rank, round.total_holes),
        );
        for game in round.games.iter().filter(|g| g.includes(&entry.player_id)) {
            let game_scores = per_game.get(&game.id).map_or(&[][..], Vec::as_slice);
            let mut points =
                game_points(game, game_scores, round, &entry.player_id, hole, ctx.par);
            if game.game_type == GameType::BingoBangoBongo && game.bbb_scoring == BbbScoring::Feats
            {
                if let Some(feats) = feats {
                    points += bbb_feat_points(feats, &entry.player_id);
                }
            }
            score.points.insert(game.id.clone(), points);
        }
        out.push(score);
    }
    Ok(out)
}
