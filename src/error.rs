use thiserror::Error;

use crate::types::StrategyId;

#[derive(Error, Debug)]
pub enum ProbeforgeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Provider '{strategy}' failed: {reason}")]
    Provider { strategy: StrategyId, reason: String },

    #[error("Generation failed: all {attempted} requested providers failed")]
    TotalFailure { attempted: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, ProbeforgeError>;
