//! Error types

use thiserror::Error;

/// Errors surfaced by the engine.
///
/// Everything here is raised before a round is played. Unknown strategy keys
/// are not errors: the registry falls back to its first entry.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SimulationError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

/// Reasons a simulation or its configuration was rejected.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("round count must be at least 1 (got {0})")]
    NonPositiveRounds(i64),
    #[error("round count {0:?} is not a number")]
    NonNumericRounds(String),
    #[error("max_rounds must be at least 1")]
    ZeroMaxRounds,
    #[error("{requested} rounds exceeds the limit of {limit}")]
    RoundLimitExceeded { requested: u64, limit: u32 },
    #[error("default_rounds {default} must be between 1 and max_rounds {max}")]
    DefaultRoundsOutOfRange { default: u32, max: u32 },
    #[error("strategy registry must contain at least one strategy")]
    EmptyRegistry,
    #[error("strategy key {0:?} is registered more than once")]
    DuplicateStrategyKey(String),
    #[error("malformed configuration: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
