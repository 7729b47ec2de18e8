//! Payoff derivation: expected and worst-case payoffs, per-row maximizers.
//!
//! Pure functions over well-formed grids; there are no error paths. The
//! *No Usage* baseline column is included in the derived grids but excluded
//! from maximizer scans, which only rank the five action columns.

use crate::{Grid, Scenario, COLS, ROWS};

/// Worst-case payoff: benefit − cost, elementwise.
#[must_use]
pub fn worst_case_payoff(benefit: &Grid, cost: &Grid) -> Grid {
    benefit.zip_with(cost, |b, c| b - c)
}

/// Expected payoff: benefit − breach ⊙ cost, elementwise.
#[must_use]
pub fn expected_payoff(benefit: &Grid, cost: &Grid, breach: &Grid) -> Grid {
    let risk_cost = breach.zip_with(cost, |p, c| p * c);
    benefit.zip_with(&risk_cost, |b, rc| b - rc)
}

/// Per-row maximizing column over the action columns (1..=5).
///
/// Returns absolute column indices. Ties break toward the lowest column
/// (first occurrence), so the result is stable under exact equality.
#[must_use]
pub fn action_maximizers(payoff: &Grid) -> [usize; ROWS] {
    let mut out = [1; ROWS];
    for i in 0..ROWS {
        let mut best_col = 1;
        let mut best = payoff[(i, 1)];
        for j in 2..COLS {
            if payoff[(i, j)] > best {
                best = payoff[(i, j)];
                best_col = j;
            }
        }
        out[i] = best_col;
    }
    out
}

/// Derived payoffs and maximizers for one scenario.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffAnalysis {
    pub expected: Grid,
    pub worst_case: Grid,
    /// Per-row expected-payoff maximizer (absolute column index).
    pub expected_max: [usize; ROWS],
    /// Per-row worst-case-payoff maximizer (absolute column index).
    pub worst_case_max: [usize; ROWS],
}

/// Compute both derived grids and both maximizer vectors.
#[must_use]
pub fn analyze(s: &Scenario) -> PayoffAnalysis {
    let expected = expected_payoff(&s.benefit, &s.cost, &s.breach);
    let worst_case = worst_case_payoff(&s.benefit, &s.cost);
    let expected_max = action_maximizers(&expected);
    let worst_case_max = action_maximizers(&worst_case);
    PayoffAnalysis {
        expected,
        worst_case,
        expected_max,
        worst_case_max,
    }
}
