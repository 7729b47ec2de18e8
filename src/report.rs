//! Console rendering: fixed-point tables, per-solution analysis, summary.
//!
//! Everything here returns `String`s; the demo binary owns the actual
//! printing. Kept outside the core generate/validate/search path: this
//! module consumes scenarios and verdicts, it never influences them.

use crate::{
    analyze, validate_explain, Grid, Scenario, SearchConfig, SearchOutcome, SearchReport,
    COLLECTION_LEVELS, MAXIMIZER_GAP, ROWS, USAGE_ACTIONS, WORST_CASE_TARGETS,
};

const RULE_WIDTH: usize = 80;
const LABEL_WIDTH: usize = 18;
const CELL_WIDTH: usize = 11;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// One labeled table, 2-decimal fixed point.
pub fn render_grid(grid: &Grid, title: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{title}:\n"));
    out.push_str(&" ".repeat(LABEL_WIDTH));
    for action in USAGE_ACTIONS {
        out.push_str(&format!("{action:>width$}", width = CELL_WIDTH));
    }
    out.push('\n');
    for (i, level) in COLLECTION_LEVELS.iter().enumerate() {
        out.push_str(&format!("{level:<width$}", width = LABEL_WIDTH));
        for &v in grid.row(i) {
            out.push_str(&format!("{v:>width$.2}", width = CELL_WIDTH));
        }
        out.push('\n');
    }
    out
}

/// Full analysis block for one solution: the three input tables, the two
/// derived payoff tables, the per-row maximizer comparison, and the status
/// of the two structural conditions.
pub fn render_solution(s: &Scenario, solution: usize) -> String {
    let a = analyze(s);
    let failures = validate_explain(s);

    let mut out = String::new();
    out.push_str(&format!("{}\nSOLUTION {solution}\n{}\n\n", rule(), rule()));
    out.push_str(&render_grid(&s.benefit, "BENEFIT MATRIX"));
    out.push('\n');
    out.push_str(&render_grid(&s.cost, "COST MATRIX"));
    out.push('\n');
    out.push_str(&render_grid(&s.breach, "BREACH PROBABILITY MATRIX"));
    out.push('\n');
    out.push_str(&render_grid(&a.expected, "EXPECTED PAYOFF MATRIX"));
    out.push('\n');
    out.push_str(&render_grid(&a.worst_case, "WORST CASE PAYOFF MATRIX"));

    out.push_str("\nRow-wise maximizers:\n");
    for i in 0..ROWS {
        out.push_str(&format!(
            "  {:<width$} worst case: {:<10} expected: {}\n",
            COLLECTION_LEVELS[i],
            USAGE_ACTIONS[a.worst_case_max[i]],
            USAGE_ACTIONS[a.expected_max[i]],
            width = LABEL_WIDTH,
        ));
    }

    let targets_ok = a.worst_case_max == WORST_CASE_TARGETS;
    let gaps_ok =
        (0..ROWS).all(|i| a.expected_max[i].abs_diff(a.worst_case_max[i]) == MAXIMIZER_GAP);
    out.push_str("\nConstraint checks:\n");
    out.push_str(&format!(
        "  worst-case maximizers are {{Very High, High, Medium}} by row: {}\n",
        yes_no(targets_ok)
    ));
    out.push_str(&format!(
        "  expected maximizers sit exactly {MAXIMIZER_GAP} actions from worst-case: {}\n",
        yes_no(gaps_ok)
    ));

    if failures.is_empty() {
        out.push_str("\nAll constraints satisfied.\n");
    } else {
        out.push_str("\nFailed checks:\n");
        for f in &failures {
            out.push_str(&format!("  - {f}\n"));
        }
    }
    out
}

/// Final tally. Exhaustion renders as a warning, not an error.
pub fn render_summary(report: &SearchReport, cfg: &SearchConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\nSUMMARY\n{}\n", rule(), rule()));
    out.push_str(&format!(
        "Samples: {} of {} ({} seeded + {} random), attempts used: {}\n",
        report.total_found(),
        cfg.target_total,
        report.seeded,
        report.accepted.len(),
        report.attempts,
    ));
    match report.outcome {
        SearchOutcome::FoundEnough => {
            out.push_str("Target reached.\n");
        }
        SearchOutcome::Exhausted => {
            out.push_str("Warning: attempt budget exhausted before reaching the target.\n");
            out.push_str(
                "The constraint set is strict: both maximizer conditions must line up \
                 on top of full monotonicity, so acceptance is rare by design.\n",
            );
        }
    }
    out
}

fn yes_no(ok: bool) -> &'static str {
    if ok {
        "yes"
    } else {
        "NO"
    }
}
