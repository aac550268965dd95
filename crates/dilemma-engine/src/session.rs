//! Stateful front for a presentation layer
//!
//! Holds the current selection (two strategies and a round count) and at most
//! one run. A run belongs to the selection that started it: changing any part
//! of the selection discards it.

use crate::config::SimulationConfig;
use crate::error::{ConfigError, Result, SimulationError};
use crate::game::{run, RoundResult, Simulation, SimulationRun};
use crate::registry::StrategyRegistry;
use crate::strategy::Strategy;

#[derive(Clone, Debug)]
struct ActiveRun {
    simulation: Simulation,
    results: SimulationRun,
}

/// Selection state plus the run it spawned
#[derive(Clone, Debug)]
pub struct Session {
    config: SimulationConfig,
    registry: StrategyRegistry,
    strategy_a: Strategy,
    strategy_b: Strategy,
    /// `Err` while the last requested round count is unusable
    round_count: std::result::Result<u32, ConfigError>,
    active: Option<ActiveRun>,
}

impl Session {
    pub fn new(config: SimulationConfig, registry: StrategyRegistry) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, registry))
    }

    fn from_parts(config: SimulationConfig, registry: StrategyRegistry) -> Self {
        let strategy_a = *registry.get(&config.default_strategy_a);
        let strategy_b = *registry.get(&config.default_strategy_b);

        Self {
            round_count: Ok(config.default_rounds),
            config,
            registry,
            strategy_a,
            strategy_b,
            active: None,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn strategy_a(&self) -> &Strategy {
        &self.strategy_a
    }

    pub fn strategy_b(&self) -> &Strategy {
        &self.strategy_b
    }

    /// Current round count, or the reason it is unusable
    pub fn round_count(&self) -> Result<u32> {
        self.round_count.clone().map_err(SimulationError::from)
    }

    /// Whether `start` would succeed
    pub fn can_start(&self) -> bool {
        self.round_count.is_ok()
    }

    /// Select player A's strategy. Unknown keys fall back to the registry's first entry.
    pub fn set_strategy_a(&mut self, key: &str) -> &Strategy {
        self.strategy_a = *self.registry.get(key);
        self.discard("strategy A changed");
        &self.strategy_a
    }

    /// Select player B's strategy. Unknown keys fall back to the registry's first entry.
    pub fn set_strategy_b(&mut self, key: &str) -> &Strategy {
        self.strategy_b = *self.registry.get(key);
        self.discard("strategy B changed");
        &self.strategy_b
    }

    /// Change the round count. Values above the configured maximum are clamped.
    ///
    /// An invalid value is remembered: `start` fails until a valid count is set.
    pub fn set_round_count(&mut self, requested: i64) -> Result<u32> {
        let resolved = self.config.resolve_rounds(requested);
        self.store_round_count(resolved)
    }

    /// Like [`set_round_count`](Self::set_round_count), for raw user input
    pub fn set_round_count_input(&mut self, input: &str) -> Result<u32> {
        let resolved = self.config.parse_rounds(input);
        self.store_round_count(resolved)
    }

    fn store_round_count(&mut self, resolved: Result<u32>) -> Result<u32> {
        self.round_count = resolved
            .clone()
            .map_err(|SimulationError::InvalidConfiguration(e)| e);
        self.discard("round count changed");
        resolved
    }

    /// Begin a fresh run for the current selection, replacing any existing one
    pub fn start(&mut self, seed: u64) -> Result<()> {
        let round_count = self.round_count()?;
        let simulation = run(&self.strategy_a, &self.strategy_b, round_count, seed)?;
        self.active = Some(ActiveRun {
            simulation,
            results: SimulationRun::new(round_count),
        });
        Ok(())
    }

    /// Play one round of the current run
    pub fn step(&mut self) -> Option<RoundResult> {
        let active = self.active.as_mut()?;
        let result = active.simulation.next()?;
        active.results.push(result.clone());
        Some(result)
    }

    /// Play all remaining rounds of the current run
    pub fn finish(&mut self) -> Option<&SimulationRun> {
        while self.step().is_some() {}
        self.run()
    }

    /// Drop the current run. Safe at any time.
    pub fn reset(&mut self) {
        self.discard("reset");
    }

    /// Rounds played so far in the current run
    pub fn run(&self) -> Option<&SimulationRun> {
        self.active.as_ref().map(|active| &active.results)
    }

    /// A run exists and has rounds left
    pub fn is_running(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.simulation.remaining() > 0)
    }

    pub fn is_complete(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.simulation.remaining() == 0)
    }

    fn discard(&mut self, reason: &str) {
        if let Some(active) = self.active.take() {
            log::debug!(
                "discarding run after {} of {} rounds: {}",
                active.results.rounds.len(),
                active.results.round_count,
                reason
            );
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_parts(SimulationConfig::default(), StrategyRegistry::builtin())
    }
}
