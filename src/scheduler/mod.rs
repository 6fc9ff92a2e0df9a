//! Dispatch loop and schedule metrics.
//!
//! `Dispatcher` turns a ranked candidate order into a single-CPU timeline;
//! `ScheduleSummary` derives the timing and energy metrics from it.
//! `simulate` wires the full pipeline for one run.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod dispatch;
mod metrics;

pub use dispatch::Dispatcher;
pub use metrics::{InvariantError, ProcessResult, ScheduleSummary};

use serde::Serialize;

use crate::models::Timeline;
use crate::ranking::{self, RankingRule};
use crate::registry::Registry;

/// Timeline and summary of one completed run.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    /// The dispatched schedule.
    pub timeline: Timeline,
    /// Derived timing and energy metrics.
    pub summary: ScheduleSummary,
}

/// Runs the full pipeline: rank, dispatch, derive metrics.
pub fn simulate(registry: &Registry, rule: &dyn RankingRule) -> Result<Outcome, InvariantError> {
    let ranked = ranking::rank(registry.processes(), rule);
    let timeline = Dispatcher::new().run(ranked);
    let summary = ScheduleSummary::calculate(&timeline, registry.processes())?;

    Ok(Outcome { timeline, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessAttrs;
    use crate::ranking::rules::EnergyAware;

    fn sample_registry() -> Registry {
        Registry::from_rows(vec![
            ProcessAttrs::new(0, 5, 1, 3),
            ProcessAttrs::new(1, 3, 2, 1),
            ProcessAttrs::new(2, 2, 1, 2),
        ])
        .unwrap()
    }

    #[test]
    fn test_simulate_documented_example() {
        let registry = sample_registry();
        let outcome = simulate(&registry, &EnergyAware).unwrap();

        let starts: Vec<(u32, i64, i64)> = outcome
            .timeline
            .slots
            .iter()
            .map(|s| (s.process_id, s.start, s.end))
            .collect();
        assert_eq!(starts, vec![(1, 0, 5), (2, 5, 8), (3, 8, 10)]);
        assert_eq!(outcome.summary.total_energy, 22);
    }

    #[test]
    fn test_simulate_is_deterministic() {
        let registry = sample_registry();
        let first = simulate(&registry, &EnergyAware).unwrap();
        let second = simulate(&registry, &EnergyAware).unwrap();

        assert_eq!(first.timeline, second.timeline);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn test_simulate_empty_registry() {
        let registry = Registry::from_rows(Vec::new()).unwrap();
        let outcome = simulate(&registry, &EnergyAware).unwrap();

        assert!(outcome.timeline.is_empty());
        assert_eq!(outcome.summary.total_energy, 0);
        assert_eq!(outcome.summary.makespan, 0);
    }
}
