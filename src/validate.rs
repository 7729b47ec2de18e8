//! The acceptance gate: nine structural and derived checks over a candidate.
//!
//! [`is_valid`] is the short-circuit verdict used inside the search loop;
//! [`validate_explain`] is the audit-friendly variant that sweeps every check
//! and reports each failure with the offending matrix and cell. The two share
//! the same per-check helpers, and a property test pins them to agree.
//!
//! Baseline equality checks use a small absolute tolerance; monotonicity
//! checks are exact (a tie is fine, only a strict decrease fails).

use std::fmt;

use crate::{
    action_maximizers, expected_payoff, worst_case_payoff, Grid, Scenario, COLS, ROWS,
};

/// Absolute tolerance for floating-point equality checks.
pub const FLOAT_TOL: f64 = 1e-9;

/// Required breach probability in the *No Usage* column.
pub const BASELINE_BREACH: f64 = 0.2;

/// Required breach probability at (High Collection, Very High).
pub const BREACH_CEILING: f64 = 0.99;

/// Required worst-case maximizer per row: Very High, High, Medium.
pub const WORST_CASE_TARGETS: [usize; ROWS] = [5, 4, 3];

/// Required column distance between the two maximizers of a row.
pub const MAXIMIZER_GAP: usize = 2;

/// Which of the three input grids a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixKind {
    Benefit,
    Cost,
    Breach,
}

impl MatrixKind {
    pub fn label(self) -> &'static str {
        match self {
            MatrixKind::Benefit => "benefit",
            MatrixKind::Cost => "cost",
            MatrixKind::Breach => "breach",
        }
    }
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One violated check, with enough payload to point at the offense.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CheckFailure {
    /// Benefit at *No Usage* must be zero in every row.
    BenefitBaseline { row: usize, value: f64 },
    /// Cost at *No Usage* must be one shared constant across rows.
    CostBaseline { row: usize, value: f64, expected: f64 },
    /// Breach at *No Usage* must be [`BASELINE_BREACH`] in every row.
    BreachBaseline { row: usize, value: f64 },
    /// Breach at (High Collection, Very High) must be [`BREACH_CEILING`].
    BreachCeiling { value: f64 },
    /// A row of `matrix` decreases left-to-right at `(row, col)`.
    RowOrder { matrix: MatrixKind, row: usize, col: usize },
    /// A column of `matrix` decreases top-to-bottom at `(row, col)`.
    ColumnOrder { matrix: MatrixKind, row: usize, col: usize },
    /// Worst-case payoff must be strictly positive on every action column.
    NonPositiveWorstCase { row: usize, col: usize, value: f64 },
    /// Worst-case maximizers must be exactly [`WORST_CASE_TARGETS`].
    WorstCaseMaximizers { found: [usize; ROWS] },
    /// Expected and worst-case maximizers of `row` must sit exactly
    /// [`MAXIMIZER_GAP`] columns apart.
    MaximizerGap {
        row: usize,
        expected_max: usize,
        worst_case_max: usize,
    },
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CheckFailure::BenefitBaseline { row, value } => {
                write!(f, "benefit[{row},0] = {value} (must be 0)")
            }
            CheckFailure::CostBaseline { row, value, expected } => {
                write!(f, "cost[{row},0] = {value} (must equal cost[0,0] = {expected})")
            }
            CheckFailure::BreachBaseline { row, value } => {
                write!(f, "breach[{row},0] = {value} (must be {BASELINE_BREACH})")
            }
            CheckFailure::BreachCeiling { value } => {
                write!(f, "breach[2,5] = {value} (must be {BREACH_CEILING})")
            }
            CheckFailure::RowOrder { matrix, row, col } => {
                write!(f, "{matrix}[{row},{col}] decreases within its row")
            }
            CheckFailure::ColumnOrder { matrix, row, col } => {
                write!(f, "{matrix}[{row},{col}] decreases within its column")
            }
            CheckFailure::NonPositiveWorstCase { row, col, value } => {
                write!(f, "worst-case payoff [{row},{col}] = {value} (must be > 0)")
            }
            CheckFailure::WorstCaseMaximizers { found } => {
                write!(
                    f,
                    "worst-case maximizers {found:?} (must be {WORST_CASE_TARGETS:?})"
                )
            }
            CheckFailure::MaximizerGap {
                row,
                expected_max,
                worst_case_max,
            } => {
                write!(
                    f,
                    "row {row}: |expected max {expected_max} − worst-case max {worst_case_max}| ≠ {MAXIMIZER_GAP}"
                )
            }
        }
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= FLOAT_TOL
}

fn matrices(s: &Scenario) -> [(MatrixKind, &Grid); 3] {
    [
        (MatrixKind::Benefit, &s.benefit),
        (MatrixKind::Cost, &s.cost),
        (MatrixKind::Breach, &s.breach),
    ]
}

fn benefit_baseline(s: &Scenario) -> Option<CheckFailure> {
    (0..ROWS)
        .find(|&i| !approx(s.benefit[(i, 0)], 0.0))
        .map(|row| CheckFailure::BenefitBaseline {
            row,
            value: s.benefit[(row, 0)],
        })
}

fn cost_baseline(s: &Scenario) -> Option<CheckFailure> {
    let expected = s.cost[(0, 0)];
    (1..ROWS)
        .find(|&i| !approx(s.cost[(i, 0)], expected))
        .map(|row| CheckFailure::CostBaseline {
            row,
            value: s.cost[(row, 0)],
            expected,
        })
}

fn breach_baseline(s: &Scenario) -> Option<CheckFailure> {
    (0..ROWS)
        .find(|&i| !approx(s.breach[(i, 0)], BASELINE_BREACH))
        .map(|row| CheckFailure::BreachBaseline {
            row,
            value: s.breach[(row, 0)],
        })
}

fn breach_ceiling(s: &Scenario) -> Option<CheckFailure> {
    let value = s.breach[(ROWS - 1, COLS - 1)];
    (!approx(value, BREACH_CEILING)).then_some(CheckFailure::BreachCeiling { value })
}

fn positivity_failure(worst_case: &Grid) -> Option<CheckFailure> {
    for i in 0..ROWS {
        for j in 1..COLS {
            if worst_case[(i, j)] <= 0.0 {
                return Some(CheckFailure::NonPositiveWorstCase {
                    row: i,
                    col: j,
                    value: worst_case[(i, j)],
                });
            }
        }
    }
    None
}

/// First failed check in evaluation order, or `None` if the scenario is valid.
///
/// Short-circuits; this is the path the search loop runs once per attempt.
#[must_use]
pub fn first_failure(s: &Scenario) -> Option<CheckFailure> {
    if let Some(f) = benefit_baseline(s) {
        return Some(f);
    }
    if let Some(f) = cost_baseline(s) {
        return Some(f);
    }
    if let Some(f) = breach_baseline(s) {
        return Some(f);
    }
    if let Some(f) = breach_ceiling(s) {
        return Some(f);
    }
    for (matrix, g) in matrices(s) {
        if let Some((row, col)) = g.row_order_violation() {
            return Some(CheckFailure::RowOrder { matrix, row, col });
        }
    }
    for (matrix, g) in matrices(s) {
        if let Some((row, col)) = g.column_order_violation() {
            return Some(CheckFailure::ColumnOrder { matrix, row, col });
        }
    }

    let worst_case = worst_case_payoff(&s.benefit, &s.cost);
    if let Some(f) = positivity_failure(&worst_case) {
        return Some(f);
    }
    let worst_case_max = action_maximizers(&worst_case);
    if worst_case_max != WORST_CASE_TARGETS {
        return Some(CheckFailure::WorstCaseMaximizers {
            found: worst_case_max,
        });
    }

    let expected = expected_payoff(&s.benefit, &s.cost, &s.breach);
    let expected_max = action_maximizers(&expected);
    for row in 0..ROWS {
        if expected_max[row].abs_diff(worst_case_max[row]) != MAXIMIZER_GAP {
            return Some(CheckFailure::MaximizerGap {
                row,
                expected_max: expected_max[row],
                worst_case_max: worst_case_max[row],
            });
        }
    }
    None
}

/// Overall verdict. Pure and idempotent.
#[must_use]
pub fn is_valid(s: &Scenario) -> bool {
    first_failure(s).is_none()
}

/// Sweep every check and collect each failure (first offending cell per
/// matrix and check). Empty exactly when [`is_valid`] returns `true`.
#[must_use]
pub fn validate_explain(s: &Scenario) -> Vec<CheckFailure> {
    let mut out = Vec::new();
    out.extend(benefit_baseline(s));
    out.extend(cost_baseline(s));
    out.extend(breach_baseline(s));
    out.extend(breach_ceiling(s));
    for (matrix, g) in matrices(s) {
        if let Some((row, col)) = g.row_order_violation() {
            out.push(CheckFailure::RowOrder { matrix, row, col });
        }
    }
    for (matrix, g) in matrices(s) {
        if let Some((row, col)) = g.column_order_violation() {
            out.push(CheckFailure::ColumnOrder { matrix, row, col });
        }
    }

    let worst_case = worst_case_payoff(&s.benefit, &s.cost);
    out.extend(positivity_failure(&worst_case));
    let worst_case_max = action_maximizers(&worst_case);
    if worst_case_max != WORST_CASE_TARGETS {
        out.push(CheckFailure::WorstCaseMaximizers {
            found: worst_case_max,
        });
    }

    let expected = expected_payoff(&s.benefit, &s.cost, &s.breach);
    let expected_max = action_maximizers(&expected);
    for row in 0..ROWS {
        if expected_max[row].abs_diff(worst_case_max[row]) != MAXIMIZER_GAP {
            out.push(CheckFailure::MaximizerGap {
                row,
                expected_max: expected_max[row],
                worst_case_max: worst_case_max[row],
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scenario_is_valid() {
        let s = Scenario::reference();
        assert!(is_valid(&s));
        assert!(validate_explain(&s).is_empty());
    }

    #[test]
    fn benefit_baseline_is_enforced() {
        let mut s = Scenario::reference();
        s.benefit[(1, 0)] = 1.0;
        assert_eq!(
            first_failure(&s),
            Some(CheckFailure::BenefitBaseline { row: 1, value: 1.0 })
        );
    }

    #[test]
    fn baseline_tolerance_absorbs_float_noise() {
        // Noise goes on the bottom row so the exact column-order checks
        // (which have no tolerance) still see non-decreasing columns.
        let mut s = Scenario::reference();
        s.breach[(2, 0)] = BASELINE_BREACH + 1e-12;
        s.cost[(2, 0)] = s.cost[(0, 0)] + 1e-12;
        assert!(is_valid(&s));
    }

    #[test]
    fn ceiling_pin_is_enforced() {
        let mut s = Scenario::reference();
        s.breach[(2, 5)] = 0.98;
        assert!(matches!(
            first_failure(&s),
            Some(CheckFailure::BreachCeiling { .. })
        ));
    }

    #[test]
    fn non_positive_worst_case_is_rejected() {
        let mut s = Scenario::reference();
        // Drop benefit to exactly meet cost at one action cell: wc hits 0.
        // Both grids stay row- and column-monotone, so positivity fires.
        s.benefit[(0, 1)] = s.cost[(0, 1)];
        assert!(matches!(
            first_failure(&s),
            Some(CheckFailure::NonPositiveWorstCase { row: 0, col: 1, .. })
        ));
    }

    #[test]
    fn wrong_worst_case_maximizers_are_rejected() {
        let mut s = Scenario::reference();
        // Inflate the Very High benefit of the last row so its worst-case
        // payoff peaks at column 5 instead of Medium.
        s.benefit[(2, 5)] = 2_000.0;
        assert!(matches!(
            first_failure(&s),
            Some(CheckFailure::WorstCaseMaximizers { found: [5, 4, 5] })
        ));
    }

    #[test]
    fn explain_agrees_with_verdict_on_a_multiply_broken_scenario() {
        let mut s = Scenario::reference();
        s.benefit[(0, 0)] = 5.0;
        s.breach[(2, 5)] = 0.5;
        let failures = validate_explain(&s);
        assert!(!is_valid(&s));
        assert!(failures.len() >= 2, "expected several failures: {failures:?}");
        assert!(failures
            .iter()
            .any(|f| matches!(f, CheckFailure::BenefitBaseline { .. })));
        assert!(failures
            .iter()
            .any(|f| matches!(f, CheckFailure::BreachCeiling { .. })));
    }
}
