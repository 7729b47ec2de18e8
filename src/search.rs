//! Discard-and-retry search: draw candidates until enough pass validation.
//!
//! The driver owns the only mutable state in the pipeline (the accepted list
//! and the attempt counter). It takes the candidate source and the event sink
//! as closures, so demos, tests, and harnesses can wire in whatever they need
//! (a seeded [`crate::ScenarioGenerator`], a canned fixture, a progress
//! printer) without the driver knowing about any of it.

use crate::{is_valid, Scenario};

/// Search targets and budget.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Stop once this many samples are in hand (seeded ones included).
    pub target_total: usize,
    /// Give up after this many generation attempts.
    pub max_attempts: u64,
    /// Samples the caller already holds; they count toward `target_total`
    /// but are not re-validated or stored in the report.
    pub seeded: usize,
    /// Emit a still-searching [`SearchEvent::Progress`] every this many
    /// attempts while no random sample has been accepted yet. 0 disables.
    pub progress_every: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            target_total: 20,
            max_attempts: 1_000_000,
            seeded: 0,
            progress_every: 50_000,
        }
    }
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// Reached `target_total` samples.
    FoundEnough,
    /// Ran out of attempts first. An outcome, not an error.
    Exhausted,
}

/// Mid-search notifications delivered to the event sink.
#[derive(Debug)]
pub enum SearchEvent<'a> {
    /// A candidate passed validation.
    Accepted {
        scenario: &'a Scenario,
        /// Running solution number, seeded samples included.
        solution: usize,
        attempts: u64,
    },
    /// Heartbeat while nothing random has been accepted yet.
    Progress { attempts: u64 },
}

/// Final tally of one search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    /// Accepted random samples, in acceptance order.
    pub accepted: Vec<Scenario>,
    /// Attempts consumed (every candidate counts, accepted or not).
    pub attempts: u64,
    /// Seeded samples counted toward the target.
    pub seeded: usize,
    pub outcome: SearchOutcome,
}

impl SearchReport {
    /// Seeded plus accepted samples.
    pub fn total_found(&self) -> usize {
        self.seeded + self.accepted.len()
    }
}

/// Run the search loop.
///
/// Each iteration draws one candidate and re-runs the validator on it;
/// acceptance is never inferred from generator bookkeeping. Valid candidates
/// are retained and announced through `on_event`; invalid ones are discarded
/// silently. Terminates as soon as the target is met or the attempt budget
/// is spent, whichever comes first.
pub fn run_search<G, E>(cfg: SearchConfig, mut candidate: G, mut on_event: E) -> SearchReport
where
    G: FnMut() -> Scenario,
    E: FnMut(&SearchEvent<'_>),
{
    let mut accepted: Vec<Scenario> = Vec::new();
    let mut attempts: u64 = 0;

    while cfg.seeded + accepted.len() < cfg.target_total && attempts < cfg.max_attempts {
        attempts += 1;
        let s = candidate();
        if is_valid(&s) {
            on_event(&SearchEvent::Accepted {
                scenario: &s,
                solution: cfg.seeded + accepted.len() + 1,
                attempts,
            });
            accepted.push(s);
        } else if cfg.progress_every > 0
            && attempts % cfg.progress_every == 0
            && accepted.is_empty()
        {
            on_event(&SearchEvent::Progress { attempts });
        }
    }

    let outcome = if cfg.seeded + accepted.len() >= cfg.target_total {
        SearchOutcome::FoundEnough
    } else {
        SearchOutcome::Exhausted
    };
    SearchReport {
        accepted,
        attempts,
        seeded: cfg.seeded,
        outcome,
    }
}
