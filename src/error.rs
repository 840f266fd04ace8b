use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error("invalid tee {0}")]
    InvalidTee(String),
    #[error("invalid game {0}")]
    InvalidGame(String),
    #[error("invalid score: {0}")]
    InvalidScore(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("no active round")]
    NoActiveRound,
    #[error("parse error: {0}")]
    Parse(String),
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for RoundError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for RoundError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<String> for RoundError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for RoundError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
