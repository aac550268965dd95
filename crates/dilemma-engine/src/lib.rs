//! Dilemma Engine
//!
//! Simulation engine for the Iterated Prisoner's Dilemma: two strategies play
//! a fixed number of rounds, scored by the classic payoff table.
//! This crate is compiled to:
//! - Native (for the CLI)
//! - WASM (for a browser front end, `wasm` feature)

mod config;
mod error;
mod game;
mod random;
mod registry;
mod session;
mod strategy;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::SimulationConfig;
pub use error::{ConfigError, Result, SimulationError};
pub use game::{
    run, run_to_completion, Outcome, RoundResult, Simulation, SimulationRun, ROUND_LIMIT,
};
pub use random::SeededRng;
pub use registry::{StrategyInfo, StrategyRegistry};
pub use session::Session;
pub use strategy::{last_or_default, Choice, Strategy, StrategyKind};

/// Payoff matrix for the Prisoner's Dilemma
/// Returns (score_a, score_b)
pub fn payoff(a: Choice, b: Choice) -> (u8, u8) {
    match (a, b) {
        (Choice::Cooperate, Choice::Cooperate) => (3, 3),
        (Choice::Cooperate, Choice::Defect) => (0, 5),
        (Choice::Defect, Choice::Cooperate) => (5, 0),
        (Choice::Defect, Choice::Defect) => (1, 1),
    }
}
