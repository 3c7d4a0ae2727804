use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid card rank: {0} (expected 1..=13)")]
    InvalidRank(u8),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("input closed before a response was given")]
    InputClosed,
    #[error("io error: {0}")]
    Io(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for GameError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for GameError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidInput(value.to_string())
    }
}
