use anyhow::{Context, Result, anyhow};
use clap::Parser;
use golf_rounds::args::validation::{
    check_readable_file_and_json, validate_courses_format, validate_round_script_format,
};
use golf_rounds::args::{Cli, OutputFormat, Settings, load_settings};
use golf_rounds::model::Course;
use golf_rounds::mvu::runtime::spawn_round_loop;
use golf_rounds::mvu::store::RoundStore;
use golf_rounds::script::{RoundScript, replay};
use golf_rounds::view::leaderboard::{render_json, render_text, round_summary};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = load_settings(Cli::parse())?;
    run(&settings).await
}

async fn run(settings: &Settings) -> Result<()> {
    let script_json = check_readable_file_and_json(&settings.round_json).map_err(|e| anyhow!(e))?;
    validate_round_script_format(&script_json).map_err(|e| anyhow!(e))?;
    let script: RoundScript = serde_json::from_value(script_json)
        .with_context(|| format!("parse round script {}", settings.round_json.display()))?;

    let mut store = RoundStore::new().with_logging(settings.log_effects || cfg!(debug_assertions));
    if let Some(path) = &settings.courses_json {
        let courses_json = check_readable_file_and_json(path).map_err(|e| anyhow!(e))?;
        validate_courses_format(&courses_json).map_err(|e| anyhow!(e))?;
        let courses: Vec<Course> = serde_json::from_value(courses_json)
            .with_context(|| format!("parse course catalogue {}", path.display()))?;
        store.set_courses(courses);
    }

    let (handle, task) = spawn_round_loop(store);
    let state = replay(&handle, &script).await?;
    drop(handle);
    task.await.context("round loop panicked")?;

    let summary = round_summary(&state).ok_or_else(|| anyhow!("no active round after replay"))?;
    match settings.format {
        OutputFormat::Text => print!("{}", render_text(&summary)),
        OutputFormat::Json => println!("{}", render_json(&summary)?),
    }
    Ok(())
}
