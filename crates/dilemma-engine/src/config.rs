//! Caller-supplied simulation settings

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::game::ROUND_LIMIT;
use crate::strategy::StrategyKind;

/// Defaults and limits for a simulation session.
///
/// Every field is optional when deserializing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub default_rounds: u32,
    /// Requested round counts above this are clamped to it. At most [`ROUND_LIMIT`].
    pub max_rounds: u32,
    pub default_strategy_a: String,
    pub default_strategy_b: String,
    /// Fixed seed for reproducible runs; callers pick a fresh one when absent
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub const DEFAULT_ROUNDS: u32 = 10;
    pub const MAX_ROUNDS: u32 = 1000;

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroMaxRounds.into());
        }
        if self.max_rounds > ROUND_LIMIT {
            return Err(ConfigError::RoundLimitExceeded {
                requested: self.max_rounds as u64,
                limit: ROUND_LIMIT,
            }
            .into());
        }
        if self.default_rounds == 0 || self.default_rounds > self.max_rounds {
            return Err(ConfigError::DefaultRoundsOutOfRange {
                default: self.default_rounds,
                max: self.max_rounds,
            }
            .into());
        }
        Ok(())
    }

    /// Turn a requested round count into a playable one.
    ///
    /// Non-positive counts are rejected; counts above `max_rounds` are clamped.
    pub fn resolve_rounds(&self, requested: i64) -> Result<u32> {
        if requested <= 0 {
            return Err(ConfigError::NonPositiveRounds(requested).into());
        }
        Ok(requested.min(self.max_rounds as i64) as u32)
    }

    /// Like [`resolve_rounds`](Self::resolve_rounds), for raw user input
    pub fn parse_rounds(&self, input: &str) -> Result<u32> {
        let trimmed = input.trim();
        if let Ok(requested) = trimmed.parse::<i64>() {
            return self.resolve_rounds(requested);
        }

        // digit strings too long for i64 are still numbers, just out of range
        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        match trimmed.strip_prefix('-') {
            Some(rest) if is_digits(rest) => self.resolve_rounds(i64::MIN),
            _ if is_digits(trimmed.strip_prefix('+').unwrap_or(trimmed)) => Ok(self.max_rounds),
            _ => Err(ConfigError::NonNumericRounds(input.to_string()).into()),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            default_rounds: Self::DEFAULT_ROUNDS,
            max_rounds: Self::MAX_ROUNDS,
            default_strategy_a: StrategyKind::AlwaysCooperate.key().to_string(),
            default_strategy_b: StrategyKind::TitForTat.key().to_string(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;

    fn invalid(e: ConfigError) -> SimulationError {
        SimulationError::InvalidConfiguration(e)
    }

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.default_rounds, 10);
        assert_eq!(config.max_rounds, 1000);
        assert_eq!(config.default_strategy_a, "unconditional-cooperate");
        assert_eq!(config.default_strategy_b, "tit-for-tat");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimulationConfig::from_json(r#"{"max_rounds": 50, "seed": 7}"#).unwrap();
        assert_eq!(config.max_rounds, 50);
        assert_eq!(config.default_rounds, 10);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_json_rejects_bad_limits() {
        assert_eq!(
            SimulationConfig::from_json(r#"{"max_rounds": 0}"#),
            Err(invalid(ConfigError::ZeroMaxRounds))
        );
        assert_eq!(
            SimulationConfig::from_json(r#"{"max_rounds": 5, "default_rounds": 6}"#),
            Err(invalid(ConfigError::DefaultRoundsOutOfRange { default: 6, max: 5 }))
        );
        assert_eq!(
            SimulationConfig::from_json(r#"{"max_rounds": 4294967295}"#),
            Err(invalid(ConfigError::RoundLimitExceeded {
                requested: u32::MAX as u64,
                limit: ROUND_LIMIT,
            }))
        );
        assert!(matches!(
            SimulationConfig::from_json("{not json"),
            Err(SimulationError::InvalidConfiguration(ConfigError::Json(_)))
        ));
    }

    #[test]
    fn test_resolve_rounds() {
        let config = SimulationConfig::default();
        assert_eq!(config.resolve_rounds(1), Ok(1));
        assert_eq!(config.resolve_rounds(1000), Ok(1000));
        assert_eq!(config.resolve_rounds(1001), Ok(1000));
        assert_eq!(config.resolve_rounds(0), Err(invalid(ConfigError::NonPositiveRounds(0))));
        assert_eq!(config.resolve_rounds(-3), Err(invalid(ConfigError::NonPositiveRounds(-3))));
    }

    #[test]
    fn test_parse_rounds() {
        let config = SimulationConfig::default();
        assert_eq!(config.parse_rounds(" 25 "), Ok(25));
        assert_eq!(config.parse_rounds("5000"), Ok(1000));
        assert_eq!(config.parse_rounds("99999999999999999999999"), Ok(1000));
        assert_eq!(config.parse_rounds("0"), Err(invalid(ConfigError::NonPositiveRounds(0))));
        assert_eq!(
            config.parse_rounds("ten"),
            Err(invalid(ConfigError::NonNumericRounds("ten".to_string())))
        );
        assert_eq!(
            config.parse_rounds(""),
            Err(invalid(ConfigError::NonNumericRounds(String::new())))
        );
        assert_eq!(
            config.parse_rounds("2.5"),
            Err(invalid(ConfigError::NonNumericRounds("2.5".to_string())))
        );
    }
}
