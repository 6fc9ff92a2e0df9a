//! Ranking rules and the candidate execution order.
//!
//! A rule assigns each process an integer score; the ranking stage sorts the
//! whole set ascending by score with a stable sort, so equal scores keep
//! their input order. The result is the *candidate* order only — arrival
//! feasibility is resolved later by the dispatch loop. Keeping the energy
//! preference separate from feasibility keeps each rule a pure function of
//! the process attributes.
//!
//! # Score Convention
//! **Lower score = dispatched earlier** among eligible processes.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod rules;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// A scoring rule for the ranking stage.
///
/// # Score Convention
/// Lower score = higher dispatch preference. Scores are pure functions of
/// the process attributes; timing state never feeds back into them.
pub trait RankingRule: Send + Sync + Debug {
    /// Rule name (e.g. "ENERGY", "SPT").
    fn name(&self) -> &'static str;

    /// Scores a process; lower runs earlier.
    fn score(&self, process: &Process) -> i64;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// A process together with its rank score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedProcess {
    /// The scored process.
    pub process: Process,
    /// Score assigned by the active rule.
    pub score: i64,
}

/// Ranks processes ascending by score.
///
/// The sort is stable: processes with equal scores keep their relative
/// input order, which makes the whole pipeline deterministic.
pub fn rank(processes: &[Process], rule: &dyn RankingRule) -> Vec<RankedProcess> {
    let mut ranked: Vec<RankedProcess> = processes
        .iter()
        .map(|&process| RankedProcess {
            score: rule.score(&process),
            process,
        })
        .collect();

    ranked.sort_by_key(|rp| rp.score);
    ranked
}
