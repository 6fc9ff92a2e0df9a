//! Built-in ranking rules.
//!
//! All rules return lower scores for processes that should run earlier.
//! `EnergyAware` is the simulator's default policy; the others replicate
//! classic non-preemptive disciplines on the same dispatch loop.
//!
//! # References
//! - Smith (1956) — SPT optimality for mean flow time on a single machine
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use super::RankingRule;
use crate::models::Process;

/// Energy-aware rule: `burst_time * power_hint`.
///
/// Prefers short, low-draw bursts; a long high-draw burst is pushed to the
/// back of the candidate order. The priority field is not consulted —
/// it is a display-only attribute under this policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnergyAware;

impl RankingRule for EnergyAware {
    fn name(&self) -> &'static str {
        "ENERGY"
    }

    fn score(&self, process: &Process) -> i64 {
        process.burst_time * process.power_hint
    }

    fn description(&self) -> &'static str {
        "Energy-aware (burst time x power hint)"
    }
}

/// Shortest burst first (non-preemptive SJF).
#[derive(Debug, Clone, Copy, Default)]
pub struct Spt;

impl RankingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn score(&self, process: &Process) -> i64 {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Earliest arrival first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl RankingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn score(&self, process: &Process) -> i64 {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First-Come First-Served"
    }
}

/// Lowest priority value first.
///
/// Unlike the default rule this one does read the priority field: a smaller
/// value means a more urgent process, as in the classic non-preemptive
/// priority discipline.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityFirst;

impl RankingRule for PriorityFirst {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn score(&self, process: &Process) -> i64 {
        i64::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Priority (lowest value first)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessAttrs;
    use crate::ranking::rank;

    fn make_process(id: u32, arrival: i64, burst: i64, priority: i32, power_hint: i64) -> Process {
        Process::new(id, ProcessAttrs::new(arrival, burst, priority, power_hint))
    }

    #[test]
    fn test_energy_aware_formula() {
        let p = make_process(1, 0, 5, 9, 3);
        assert_eq!(EnergyAware.score(&p), 15);
        // Priority never enters the score.
        let q = make_process(2, 0, 5, -40, 3);
        assert_eq!(EnergyAware.score(&q), 15);
    }

    #[test]
    fn test_spt_orders_by_burst() {
        let processes = vec![
            make_process(1, 0, 5, 0, 1),
            make_process(2, 0, 1, 0, 3),
            make_process(3, 0, 3, 0, 2),
        ];
        let order: Vec<u32> = rank(&processes, &Spt)
            .iter()
            .map(|rp| rp.process.id)
            .collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_fcfs_orders_by_arrival() {
        let processes = vec![
            make_process(1, 4, 2, 0, 1),
            make_process(2, 0, 9, 0, 3),
            make_process(3, 2, 1, 0, 2),
        ];
        let order: Vec<u32> = rank(&processes, &Fcfs)
            .iter()
            .map(|rp| rp.process.id)
            .collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_priority_lowest_value_first() {
        let processes = vec![
            make_process(1, 0, 2, 3, 1),
            make_process(2, 0, 2, 1, 1),
            make_process(3, 0, 2, 2, 1),
        ];
        let order: Vec<u32> = rank(&processes, &PriorityFirst)
            .iter()
            .map(|rp| rp.process.id)
            .collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(EnergyAware.name(), "ENERGY");
        assert_eq!(Spt.name(), "SPT");
        assert_eq!(Fcfs.name(), "FCFS");
        assert_eq!(PriorityFirst.name(), "PRIORITY");
    }
}
