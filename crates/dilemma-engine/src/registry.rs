//! Ordered set of selectable strategies

use serde::Serialize;

use crate::error::{ConfigError, Result};
use crate::strategy::{Strategy, StrategyKind};

/// What a selection UI needs to show for one strategy
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StrategyInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

impl From<&Strategy> for StrategyInfo {
    fn from(strategy: &Strategy) -> Self {
        Self {
            key: strategy.key(),
            label: strategy.label(),
            description: strategy.description(),
        }
    }
}

/// Registry of strategies with unique keys. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrategyRegistry {
    strategies: Vec<Strategy>,
}

impl StrategyRegistry {
    /// Build a registry from an ordered list of strategies
    pub fn new(strategies: Vec<Strategy>) -> Result<Self> {
        if strategies.is_empty() {
            return Err(ConfigError::EmptyRegistry.into());
        }
        for (i, strategy) in strategies.iter().enumerate() {
            if strategies[..i].iter().any(|s| s.key() == strategy.key()) {
                return Err(ConfigError::DuplicateStrategyKey(strategy.key().to_string()).into());
            }
        }
        Ok(Self { strategies })
    }

    /// All built-in strategies in their canonical order
    pub fn builtin() -> Self {
        Self {
            strategies: StrategyKind::ALL.into_iter().map(Strategy::new).collect(),
        }
    }

    /// The fallback strategy
    pub fn first(&self) -> &Strategy {
        &self.strategies[0]
    }

    /// Look up a strategy, falling back to the first entry when `key` is unknown
    pub fn get(&self, key: &str) -> &Strategy {
        match self.find(key) {
            Some(strategy) => strategy,
            None => {
                let fallback = self.first();
                log::warn!(
                    "unknown strategy key {:?}, falling back to {}",
                    key,
                    fallback.key()
                );
                fallback
            }
        }
    }

    /// Strict lookup
    pub fn find(&self, key: &str) -> Option<&Strategy> {
        self.strategies.iter().find(|s| s.key() == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Strategy> {
        self.strategies.iter()
    }

    /// Key, label and description of every strategy, in order
    pub fn entries(&self) -> Vec<StrategyInfo> {
        self.strategies.iter().map(StrategyInfo::from).collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
