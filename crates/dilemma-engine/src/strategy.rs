//! Strategy definitions and execution

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::random::SeededRng;

/// A player's action in one round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Cooperate,
    Defect,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Cooperate => f.write_str("Cooperate"),
            Choice::Defect => f.write_str("Defect"),
        }
    }
}

/// Most recent move in `history`, or `default` before the first round.
pub fn last_or_default(history: &[Choice], default: Choice) -> Choice {
    history.last().copied().unwrap_or(default)
}

/// Built-in strategy kinds, in registry order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum StrategyKind {
    /// Always cooperate, never defect.
    AlwaysCooperate,
    /// Always defect, never cooperate.
    AlwaysDefect,
    /// Copy opponent's last move. Start with cooperate.
    TitForTat,
    /// Coin flip each round.
    Random,
    /// Cooperate until opponent defects once, then always defect.
    GrimTrigger,
    /// Cooperate when both players made the same move last round.
    Pavlov,
    /// Tit-for-Tat but start with defect.
    SuspiciousTitForTat,
    /// Tit-for-Tat that keeps cooperating after a run of its own cooperation.
    ForgivingTitForTat,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 8] = [
        StrategyKind::AlwaysCooperate,
        StrategyKind::AlwaysDefect,
        StrategyKind::TitForTat,
        StrategyKind::Random,
        StrategyKind::GrimTrigger,
        StrategyKind::Pavlov,
        StrategyKind::SuspiciousTitForTat,
        StrategyKind::ForgivingTitForTat,
    ];

    /// Stable identity key
    pub fn key(self) -> &'static str {
        match self {
            StrategyKind::AlwaysCooperate => "unconditional-cooperate",
            StrategyKind::AlwaysDefect => "unconditional-defect",
            StrategyKind::TitForTat => "tit-for-tat",
            StrategyKind::Random => "random",
            StrategyKind::GrimTrigger => "grim-trigger",
            StrategyKind::Pavlov => "pavlov",
            StrategyKind::SuspiciousTitForTat => "suspicious-tit-for-tat",
            StrategyKind::ForgivingTitForTat => "forgiving-tit-for-tat",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrategyKind::AlwaysCooperate => "Always Cooperate",
            StrategyKind::AlwaysDefect => "Always Defect",
            StrategyKind::TitForTat => "Tit for Tat",
            StrategyKind::Random => "Random",
            StrategyKind::GrimTrigger => "Grim Trigger",
            StrategyKind::Pavlov => "Pavlov (Win-Stay Lose-Shift)",
            StrategyKind::SuspiciousTitForTat => "Suspicious Tit for Tat",
            StrategyKind::ForgivingTitForTat => "Forgiving Tit for Tat",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StrategyKind::AlwaysCooperate => {
                "The player will always cooperate, regardless of the opponent's previous choices."
            }
            StrategyKind::AlwaysDefect => {
                "The player will always defect, regardless of the opponent's previous choices."
            }
            StrategyKind::TitForTat => {
                "The player cooperates in the first round and then mirrors the opponent's previous move in subsequent rounds."
            }
            StrategyKind::Random => {
                "The player randomly chooses to cooperate or defect in each round."
            }
            StrategyKind::GrimTrigger => {
                "The player starts by cooperating and continues to cooperate unless the opponent defects, after which it always defects."
            }
            StrategyKind::Pavlov => {
                "The player cooperates if the opponent's last move was the same as its own previous move, and defects otherwise."
            }
            StrategyKind::SuspiciousTitForTat => {
                "Similar to Tit for Tat, but starts by defecting and then mirrors the opponent's previous move."
            }
            StrategyKind::ForgivingTitForTat => {
                "Similar to Tit for Tat, but forgives the opponent's occasional defection by cooperating after a certain number of consecutive mutual cooperations."
            }
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Whether `decide` consumes randomness
    pub fn is_randomized(self) -> bool {
        matches!(self, StrategyKind::Random)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("unknown strategy key: {}", s))
    }
}

impl From<StrategyKind> for String {
    fn from(kind: StrategyKind) -> Self {
        kind.key().to_string()
    }
}

impl TryFrom<String> for StrategyKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A named decision rule
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Strategy {
    pub kind: StrategyKind,
}

impl Strategy {
    pub fn new(kind: StrategyKind) -> Self {
        Self { kind }
    }

    pub fn key(&self) -> &'static str {
        self.kind.key()
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    /// Choose the next move.
    ///
    /// # Arguments
    /// * `opponent_history` - Opponent's past moves
    /// * `own_history` - Our past moves
    /// * `rng` - Random number generator for this decision
    ///
    /// Both histories may be empty (round 0). Only the Random strategy reads
    /// from `rng`.
    pub fn decide(
        &self,
        opponent_history: &[Choice],
        own_history: &[Choice],
        rng: &mut SeededRng,
    ) -> Choice {
        match self.kind {
            StrategyKind::AlwaysCooperate => Choice::Cooperate,
            StrategyKind::AlwaysDefect => Choice::Defect,
            StrategyKind::TitForTat => last_or_default(opponent_history, Choice::Cooperate),
            StrategyKind::Random => execute_random(rng),
            StrategyKind::GrimTrigger => execute_grim_trigger(opponent_history),
            StrategyKind::Pavlov => execute_pavlov(opponent_history, own_history),
            StrategyKind::SuspiciousTitForTat => {
                last_or_default(opponent_history, Choice::Defect)
            }
            StrategyKind::ForgivingTitForTat => {
                execute_forgiving_tit_for_tat(opponent_history, own_history)
            }
        }
    }
}

impl From<StrategyKind> for Strategy {
    fn from(kind: StrategyKind) -> Self {
        Self::new(kind)
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::new(StrategyKind::AlwaysCooperate)
    }
}

/// Random: fair coin each call
fn execute_random(rng: &mut SeededRng) -> Choice {
    if rng.next_bool() {
        Choice::Cooperate
    } else {
        Choice::Defect
    }
}

/// Grim Trigger: any defection in the opponent's history triggers permanent defection
fn execute_grim_trigger(opponent_history: &[Choice]) -> Choice {
    if opponent_history.contains(&Choice::Defect) {
        Choice::Defect
    } else {
        Choice::Cooperate
    }
}

/// Pavlov: cooperate when last round's moves matched, defect otherwise.
/// Missing moves count as Cooperate.
fn execute_pavlov(opponent_history: &[Choice], own_history: &[Choice]) -> Choice {
    let own_last = last_or_default(own_history, Choice::Cooperate);
    let opp_last = last_or_default(opponent_history, Choice::Cooperate);

    if own_last == opp_last {
        Choice::Cooperate
    } else {
        Choice::Defect
    }
}

/// Own cooperations needed before Forgiving Tit for Tat stops mirroring
const FORGIVENESS_THRESHOLD: usize = 2;

/// Forgiving Tit-for-Tat: after our own streak of cooperation, keep cooperating;
/// otherwise mirror the opponent (Cooperate before their first move)
fn execute_forgiving_tit_for_tat(opponent_history: &[Choice], own_history: &[Choice]) -> Choice {
    let streak = own_history
        .iter()
        .rev()
        .take_while(|m| **m == Choice::Cooperate)
        .count();

    if streak >= FORGIVENESS_THRESHOLD {
        Choice::Cooperate
    } else {
        last_or_default(opponent_history, Choice::Cooperate)
    }
}
