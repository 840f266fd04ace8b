mod common;

use common::{ann_and_ben, game};
use golf_rounds::RoundError;
use golf_rounds::args::validation::validate_round_script_format;
use golf_rounds::controller::scorecard::GrossEntry;
use golf_rounds::model::GameType;
use golf_rounds::mvu::round::{Msg, RoundPhase};
use golf_rounds::mvu::runtime::spawn_round_loop;
use golf_rounds::mvu::store::{HoleOutcome, RoundStore};
use golf_rounds::script::{RoundScript, replay};
use golf_rounds::view::leaderboard::{render_json, render_text, round_summary};

fn load_script() -> Result<RoundScript, Box<dyn std::error::Error>> {
    let json: serde_json::Value = serde_json::from_str(include_str!("test05_round_script.json"))?;
    validate_round_script_format(&json)?;
    Ok(serde_json::from_value(json)?)
}

#[tokio::test]
async fn test05_commands_apply_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let (handle, task) = spawn_round_loop(RoundStore::new().with_logging(false));
    let mut updates = handle.subscribe();

    let state = handle
        .setup_new_round(
            "course1",
            ann_and_ben(),
            vec![game("g-stroke", GameType::Stroke, &["p1", "p2"])],
        )
        .await?;
    assert_eq!(state.phase(), RoundPhase::RoundActive);
    assert!(updates.has_changed()?);
    updates.borrow_and_update();

    let outcome = handle
        .submit_hole(
            vec![GrossEntry::new("p1", 5), GrossEntry::new("p2", 4)],
            None,
        )
        .await?;
    assert_eq!(outcome, HoleOutcome::NextHole(2));

    let seen = handle.get_state();
    assert_eq!(seen.current_round.as_ref().map(|r| r.current_hole), Some(2));
    assert_eq!(seen.round_data.as_ref().map(|d| d.scores.len()), Some(2));
    assert!(updates.has_changed()?);

    let state = handle.navigate_to_hole(40).await?;
    assert_eq!(state.current_round.as_ref().map(|r| r.current_hole), Some(18));

    let state = handle.dispatch(Msg::ResetRound).await?;
    assert!(state.current_round.is_none());

    drop(updates);
    drop(handle);
    let store = task.await?;
    assert!(store.get_state().round_data.is_none());
    Ok(())
}

#[tokio::test]
async fn test05_failed_submit_records_error() -> Result<(), Box<dyn std::error::Error>> {
    let (handle, _task) = spawn_round_loop(RoundStore::new().with_logging(false));
    let result = handle
        .submit_hole(vec![GrossEntry::new("p1", 5)], None)
        .await;
    assert_eq!(result, Err(RoundError::NoActiveRound));
    assert_eq!(handle.get_state().error.as_deref(), Some("no active round"));

    let state = handle.dispatch(Msg::ClearError).await?;
    assert!(state.error.is_none());
    Ok(())
}

#[tokio::test]
async fn test05_successful_submit_clears_error() -> Result<(), Box<dyn std::error::Error>> {
    let (handle, _task) = spawn_round_loop(RoundStore::new().with_logging(false));
    handle
        .setup_new_round(
            "course1",
            ann_and_ben(),
            vec![game("g-stroke", GameType::Stroke, &["p1", "p2"])],
        )
        .await?;

    let result = handle
        .submit_hole(vec![GrossEntry::new("p1", 0)], None)
        .await;
    assert!(matches!(result, Err(RoundError::InvalidScore(_))));
    assert!(handle.get_state().error.is_some());

    let outcome = handle
        .submit_hole(
            vec![GrossEntry::new("p1", 5), GrossEntry::new("p2", 4)],
            None,
        )
        .await?;
    assert_eq!(outcome, HoleOutcome::NextHole(2));
    assert!(handle.get_state().error.is_none());
    Ok(())
}

#[tokio::test]
async fn test05_replay_round_script() -> Result<(), Box<dyn std::error::Error>> {
    let script = load_script()?;
    assert_eq!(script.entries_for(&script.holes[0]).len(), 2);

    let (handle, _task) = spawn_round_loop(RoundStore::new().with_logging(false));
    let state = replay(&handle, &script).await?;

    let round = state.current_round.as_ref().ok_or("no round")?;
    assert_eq!(round.date.to_string(), "2025-04-12");
    assert_eq!(round.current_hole, 3);

    let summary = round_summary(&state).ok_or("no summary")?;
    assert_eq!(summary.course_name, "Pine Valley Golf Club");
    assert!(!summary.complete);

    assert_eq!(summary.stroke_play.len(), 1);
    let stroke = &summary.stroke_play[0];
    assert_eq!(stroke.players[0].player_id, "p1");
    assert_eq!(stroke.players[0].net_score, 8);
    assert_eq!(stroke.players[1].net_score, 9);

    // feats: Ann took bingo and bango on 1, Ben bongo; nothing recorded on 2
    let bbb = &summary.games[0];
    assert_eq!(bbb.game_id, "g-bbb");
    assert_eq!(bbb.players[0].name, "Ann");
    assert_eq!(bbb.players[0].total_points, 2.0);
    assert_eq!(bbb.players[1].total_points, 1.0);

    let text = render_text(&summary);
    assert!(text.contains("Bingo Bango Bongo Results"));
    assert!(text.contains("Stroke Play Results"));
    assert!(text.contains("thru hole 2"));

    let json: serde_json::Value = serde_json::from_str(&render_json(&summary)?)?;
    assert_eq!(json["roundId"], serde_json::Value::from(round.id.clone()));
    assert_eq!(json["strokePlay"][0]["players"][0]["grossScore"], 9);
    Ok(())
}

#[tokio::test]
async fn test05_replay_rejects_unknown_course() -> Result<(), Box<dyn std::error::Error>> {
    let mut script = load_script()?;
    script.course_id = "course9".to_string();
    let (handle, _task) = spawn_round_loop(RoundStore::new().with_logging(false));
    let result = replay(&handle, &script).await;
    assert!(matches!(result, Err(RoundError::NotFound(_))));
    assert!(handle.get_state().current_round.is_none());
    Ok(())
}

#[tokio::test]
async fn test05_replay_rejects_scores_for_outsiders() -> Result<(), Box<dyn std::error::Error>> {
    let mut script = load_script()?;
    script.holes[1].scores.insert("p7".to_string(), 4);
    let (handle, _task) = spawn_round_loop(RoundStore::new().with_logging(false));
    let result = replay(&handle, &script).await;
    assert!(matches!(result, Err(RoundError::InvalidScore(_))));
    Ok(())
}
