//! Text rendering of rounds and results

use colored::{ColoredString, Colorize};
use dilemma_engine::{Choice, Outcome, RoundResult, SimulationRun, Strategy};

fn choice_cell(choice: Choice) -> ColoredString {
    let text = choice.to_string();
    match choice {
        Choice::Cooperate => text.green(),
        Choice::Defect => text.red(),
    }
}

pub fn header(a: &Strategy, b: &Strategy) -> String {
    format!(
        "{}\n{:>6}  {:<10}{:<10}{:>8}{:>8}{:>8}{:>8}",
        format!("{} vs {}", a.label(), b.label()).bright_cyan().bold(),
        "round",
        "P1",
        "P2",
        "+P1",
        "+P2",
        "P1",
        "P2",
    )
}

/// Round numbers are shown 1-based
pub fn round_line(result: &RoundResult) -> String {
    format!(
        "{:>6}  {:<10}{:<10}{:>8}{:>8}{:>8}{:>8}",
        result.round + 1,
        choice_cell(result.choice_a),
        choice_cell(result.choice_b),
        format!("+{}", result.score_a),
        format!("+{}", result.score_b),
        result.cumulative_a,
        result.cumulative_b,
    )
}

pub fn summary(run: &SimulationRun, a: &Strategy, b: &Strategy) -> String {
    let verdict = match run.winner() {
        Outcome::PlayerA => format!("{} wins", a.label()).green(),
        Outcome::PlayerB => format!("{} wins", b.label()).green(),
        Outcome::Tie => "tie".yellow(),
    };
    format!(
        "after {} rounds: {} {} - {} {} ({})",
        run.rounds.len(),
        a.label(),
        run.total_score_a,
        run.total_score_b,
        b.label(),
        verdict.bold(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dilemma_engine::{run_to_completion, StrategyKind};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_round_line_is_one_based() {
        plain();
        let result = RoundResult {
            round: 0,
            choice_a: Choice::Cooperate,
            choice_b: Choice::Defect,
            score_a: 0,
            score_b: 5,
            cumulative_a: 0,
            cumulative_b: 5,
        };
        let line = round_line(&result);
        assert!(line.trim_start().starts_with("1 "));
        assert!(line.contains("Cooperate"));
        assert!(line.contains("Defect"));
        assert!(line.contains("+5"));
    }

    #[test]
    fn test_summary_names_winner() {
        plain();
        let a = Strategy::new(StrategyKind::AlwaysDefect);
        let b = Strategy::new(StrategyKind::AlwaysCooperate);
        let run = run_to_completion(&a, &b, 4, 0).unwrap();

        let text = summary(&run, &a, &b);
        assert!(text.contains("after 4 rounds"));
        assert!(text.contains("Always Defect 20 - 0 Always Cooperate"));
        assert!(text.contains("Always Defect wins"));
    }

    #[test]
    fn test_summary_tie() {
        plain();
        let s = Strategy::new(StrategyKind::TitForTat);
        let run = run_to_completion(&s, &s, 3, 0).unwrap();
        assert!(summary(&run, &s, &s).contains("(tie)"));
    }
}
