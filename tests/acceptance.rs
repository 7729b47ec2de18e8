//! End-to-end acceptance: the reference fixture's arithmetic, the validator
//! as the authoritative gate, and the driver's two terminal states.

use paygrid::{
    analyze, is_valid, run_search, validate_explain, GeneratorConfig, Scenario,
    ScenarioGenerator, SearchConfig, SearchEvent, SearchOutcome, MAXIMIZER_GAP, ROWS,
    WORST_CASE_TARGETS,
};

#[test]
fn reference_scenario_is_a_regression_fixture() {
    let s = Scenario::reference();
    assert!(is_valid(&s));
    assert!(validate_explain(&s).is_empty());
    // Idempotent: re-running changes nothing.
    assert!(is_valid(&s));
}

#[test]
fn reference_scenario_satisfies_every_published_property() {
    let s = Scenario::reference();

    for m in [&s.benefit, &s.cost, &s.breach] {
        assert!(m.is_row_monotone());
        assert!(m.is_col_monotone());
    }
    for i in 0..ROWS {
        assert_eq!(s.benefit[(i, 0)], 0.0);
        assert_eq!(s.cost[(i, 0)], s.cost[(0, 0)]);
        assert_eq!(s.breach[(i, 0)], 0.2);
    }
    assert_eq!(s.breach[(2, 5)], 0.99);

    let a = analyze(&s);
    for i in 0..ROWS {
        for j in 1..6 {
            assert!(a.worst_case[(i, j)] > 0.0, "wc[{i},{j}] must be positive");
        }
    }
    assert_eq!(a.worst_case_max, WORST_CASE_TARGETS);
    assert_eq!(a.expected_max, [3, 2, 1]);
    for i in 0..ROWS {
        assert_eq!(a.expected_max[i].abs_diff(a.worst_case_max[i]), MAXIMIZER_GAP);
    }
}

#[test]
fn reference_scenario_derivations_match_hand_arithmetic() {
    let a = analyze(&Scenario::reference());

    // Worst case, row 0 action columns: benefit − cost.
    let wc0: Vec<f64> = (1..6).map(|j| a.worst_case[(0, j)]).collect();
    assert_eq!(wc0, vec![100.0, 120.0, 140.0, 160.0, 200.0]);

    // Expected payoff spot checks: benefit − breach·cost.
    assert!((a.expected[(0, 1)] - 240.0).abs() < 1e-9); // 300 − 0.30·200
    assert!((a.expected[(1, 2)] - 331.4).abs() < 1e-9); // 470 − 0.42·330
    assert!((a.expected[(2, 5)] - 167.4).abs() < 1e-9); // 900 − 0.99·740
    // No Usage column may go negative; it is exempt from positivity.
    assert!((a.worst_case[(0, 0)] + 100.0).abs() < 1e-9);
}

#[test]
fn driver_exhausts_when_the_only_candidate_is_invalid() {
    let cfg = SearchConfig {
        target_total: 1,
        max_attempts: 1,
        seeded: 0,
        progress_every: 0,
    };
    // One deliberately broken candidate: ceiling unpinned.
    let mut broken = Scenario::reference();
    broken.breach[(2, 5)] = 0.5;

    let report = run_search(cfg, || broken.clone(), |_| {});
    assert_eq!(report.outcome, SearchOutcome::Exhausted);
    assert_eq!(report.accepted.len(), 0);
    assert_eq!(report.attempts, 1);
}

#[test]
fn driver_announces_each_acceptance_with_running_numbers() {
    let cfg = SearchConfig {
        target_total: 3,
        max_attempts: 10,
        seeded: 1,
        progress_every: 0,
    };
    let mut announced = Vec::new();
    let report = run_search(cfg, Scenario::reference, |ev| {
        if let SearchEvent::Accepted {
            scenario,
            solution,
            attempts,
        } = ev
        {
            assert!(is_valid(scenario));
            announced.push((*solution, *attempts));
        }
    });
    assert_eq!(report.outcome, SearchOutcome::FoundEnough);
    // Seeded sample is solution 1; the two random ones follow.
    assert_eq!(announced, vec![(2, 1), (3, 2)]);
    assert_eq!(report.total_found(), 3);
}

#[test]
fn full_pipeline_counts_stay_consistent_under_the_real_generator() {
    let cfg = SearchConfig {
        target_total: 1,
        max_attempts: 2_000,
        seeded: 0,
        progress_every: 0,
    };
    let mut gen = ScenarioGenerator::with_seed(GeneratorConfig::default(), 1234);
    let report = run_search(cfg, || gen.generate(), |_| {});

    assert!(report.attempts <= 2_000);
    match report.outcome {
        SearchOutcome::FoundEnough => {
            assert_eq!(report.accepted.len(), 1);
            assert!(is_valid(&report.accepted[0]));
        }
        SearchOutcome::Exhausted => {
            assert_eq!(report.accepted.len(), 0);
            assert_eq!(report.attempts, 2_000);
        }
    }
}
