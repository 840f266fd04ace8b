use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub mod validation;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Replay a golf round script and print the leaderboards", long_about = None)]
pub struct Cli {
    /// Round script: course, players, games and hole-by-hole gross scores
    #[arg(long)]
    pub round_json: Option<PathBuf>,
    #[arg(long)]
    pub config_toml: Option<PathBuf>,
    /// Course catalogue replacing the built-in courses
    #[arg(long)]
    pub courses_json: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Print every state transition to stderr as json
    #[arg(long)]
    pub log_effects: bool,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    round_json: Option<PathBuf>,
    courses_json: Option<PathBuf>,
    format: Option<OutputFormat>,
    log_effects: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub round_json: PathBuf,
    pub courses_json: Option<PathBuf>,
    pub format: OutputFormat,
    pub log_effects: bool,
}

/// Merges CLI flags over an optional TOML config file. CLI values win.
///
/// # Errors
/// Returns an error if the config file is unreadable or invalid, the round script
/// is missing, or a referenced file is not readable.
pub fn load_settings(cli: Cli) -> Result<Settings> {
    let file_config = match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            parse_file_config(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))?
        }
        None => FileConfig::default(),
    };

    let round_json = cli
        .round_json
        .or(file_config.round_json)
        .ok_or_else(|| anyhow!("missing --round-json"))?;
    validation::check_readable_file(&round_json).map_err(|e| anyhow!(e))?;

    let courses_json = cli.courses_json.or(file_config.courses_json);
    if let Some(path) = &courses_json {
        validation::check_readable_file(path).map_err(|e| anyhow!(e))?;
    }

    Ok(Settings {
        round_json,
        courses_json,
        format: cli.format.or(file_config.format).unwrap_or_default(),
        log_effects: cli.log_effects || file_config.log_effects.unwrap_or(false),
    })
}

fn parse_file_config(contents: &str) -> Result<FileConfig, toml::de::Error> {
    toml::from_str(contents)
}
