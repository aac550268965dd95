//! Simulation engine

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::payoff;
use crate::random::SeededRng;
use crate::strategy::{Choice, Strategy};

/// Most rounds a single run may have. Keeps both totals within `u32` at the
/// highest per-round payoff.
pub const ROUND_LIMIT: u32 = 1_000_000;

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    pub choice_a: Choice,
    pub choice_b: Choice,
    pub score_a: u8,
    pub score_b: u8,
    pub cumulative_a: u32,
    pub cumulative_b: u32,
}

/// Who came out ahead
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerA,
    PlayerB,
    Tie,
}

/// Rounds played so far in a run, plus running totals
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRun {
    pub rounds: Vec<RoundResult>,
    pub total_score_a: u32,
    pub total_score_b: u32,
    /// Rounds the run was configured for (may exceed `rounds.len()` while in flight)
    pub round_count: u32,
}

impl SimulationRun {
    pub fn new(round_count: u32) -> Self {
        Self {
            rounds: Vec::new(),
            total_score_a: 0,
            total_score_b: 0,
            round_count,
        }
    }

    /// Record the next round
    pub fn push(&mut self, result: RoundResult) {
        self.total_score_a = result.cumulative_a;
        self.total_score_b = result.cumulative_b;
        self.rounds.push(result);
    }

    pub fn is_complete(&self) -> bool {
        self.rounds
            .last()
            .is_some_and(|last| last.round + 1 == self.round_count)
    }

    pub fn history_a(&self) -> Vec<Choice> {
        self.rounds.iter().map(|r| r.choice_a).collect()
    }

    pub fn history_b(&self) -> Vec<Choice> {
        self.rounds.iter().map(|r| r.choice_b).collect()
    }

    pub fn winner(&self) -> Outcome {
        use std::cmp::Ordering;

        match self.total_score_a.cmp(&self.total_score_b) {
            Ordering::Greater => Outcome::PlayerA,
            Ordering::Less => Outcome::PlayerB,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

/// A run in progress, yielding one [`RoundResult`] per round.
///
/// Histories and totals belong to this value alone. Dropping it between rounds
/// abandons the run with no other effect.
#[derive(Clone, Debug)]
pub struct Simulation {
    strategy_a: Strategy,
    strategy_b: Strategy,
    round_count: u32,
    next_round: u32,
    rng: SeededRng,
    history_a: Vec<Choice>,
    history_b: Vec<Choice>,
    total_a: u32,
    total_b: u32,
}

impl Simulation {
    pub fn strategy_a(&self) -> &Strategy {
        &self.strategy_a
    }

    pub fn strategy_b(&self) -> &Strategy {
        &self.strategy_b
    }

    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    /// Rounds not yet played
    pub fn remaining(&self) -> u32 {
        self.round_count - self.next_round
    }

    pub fn history_a(&self) -> &[Choice] {
        &self.history_a
    }

    pub fn history_b(&self) -> &[Choice] {
        &self.history_b
    }

    pub fn totals(&self) -> (u32, u32) {
        (self.total_a, self.total_b)
    }

    /// Play the remaining rounds and collect them.
    ///
    /// Rounds already taken from the iterator are not included.
    pub fn into_run(self) -> SimulationRun {
        let mut run = SimulationRun::new(self.round_count);
        for result in self {
            run.push(result);
        }
        run
    }

    fn play_round(&mut self) -> RoundResult {
        let round = self.next_round;

        // Separate RNG per player so they don't affect each other
        let slot = round as u64 * 2;
        let mut rng_a = self.rng.for_round(slot);
        let mut rng_b = self.rng.for_round(slot + 1);

        // Both decide against the histories as they stood before this round
        let choice_a = self.strategy_a.decide(&self.history_b, &self.history_a, &mut rng_a);
        let choice_b = self.strategy_b.decide(&self.history_a, &self.history_b, &mut rng_b);

        self.history_a.push(choice_a);
        self.history_b.push(choice_b);

        let (score_a, score_b) = payoff(choice_a, choice_b);
        self.total_a += score_a as u32;
        self.total_b += score_b as u32;
        self.next_round += 1;

        log::trace!(
            "round {}: {} vs {} -> ({}, {}) totals ({}, {})",
            round,
            choice_a,
            choice_b,
            score_a,
            score_b,
            self.total_a,
            self.total_b
        );

        RoundResult {
            round,
            choice_a,
            choice_b,
            score_a,
            score_b,
            cumulative_a: self.total_a,
            cumulative_b: self.total_b,
        }
    }
}

impl Iterator for Simulation {
    type Item = RoundResult;

    fn next(&mut self) -> Option<RoundResult> {
        if self.next_round >= self.round_count {
            return None;
        }
        Some(self.play_round())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Simulation {}

impl std::iter::FusedIterator for Simulation {}

/// Start a run between two strategies
///
/// # Arguments
/// * `strategy_a` - First player's strategy
/// * `strategy_b` - Second player's strategy
/// * `round_count` - Rounds to play, between 1 and [`ROUND_LIMIT`]
/// * `seed` - Seed for randomized strategies
///
/// # Returns
/// A lazy sequence of exactly `round_count` results
pub fn run(
    strategy_a: &Strategy,
    strategy_b: &Strategy,
    round_count: u32,
    seed: u64,
) -> Result<Simulation> {
    if round_count == 0 {
        return Err(ConfigError::NonPositiveRounds(0).into());
    }
    if round_count > ROUND_LIMIT {
        return Err(ConfigError::RoundLimitExceeded {
            requested: round_count as u64,
            limit: ROUND_LIMIT,
        }
        .into());
    }

    log::debug!(
        "starting run: {} vs {}, {} rounds, seed {}",
        strategy_a.key(),
        strategy_b.key(),
        round_count,
        seed
    );

    Ok(Simulation {
        strategy_a: *strategy_a,
        strategy_b: *strategy_b,
        round_count,
        next_round: 0,
        rng: SeededRng::new(seed),
        history_a: Vec::new(),
        history_b: Vec::new(),
        total_a: 0,
        total_b: 0,
    })
}

/// Run a complete match between two strategies
pub fn run_to_completion(
    strategy_a: &Strategy,
    strategy_b: &Strategy,
    round_count: u32,
    seed: u64,
) -> Result<SimulationRun> {
    Ok(run(strategy_a, strategy_b, round_count, seed)?.into_run())
}
