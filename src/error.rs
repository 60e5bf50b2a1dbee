use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScorecardError {
    #[error("io error: {0}")]
    Io(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("decoding error: {0}")]
    Decoding(String),
    #[error("invalid tee: {0}")]
    InvalidTee(String),
    #[error("invalid round: {0}")]
    InvalidRound(String),
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for ScorecardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ScorecardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decoding(err.to_string())
    }
}

impl From<toml::de::Error> for ScorecardError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<String> for ScorecardError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for ScorecardError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
