//! Schedule metrics.
//!
//! Derives per-process timing and energy figures from a completed timeline.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion (CT) | End of the process's slot |
//! | Turnaround (TAT) | CT - arrival |
//! | Waiting (WT) | TAT - burst |
//! | Energy | burst * power hint |
//!
//! A turnaround below the burst time (equivalently a negative wait) cannot
//! happen with a correct dispatcher; it is reported as an `InvariantError`
//! instead of being folded into the output.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Process, Timeline};

/// Internal invariant violation detected while deriving metrics.
///
/// Either the timeline lost a process or it produced a slot implying a
/// negative wait. Both point at a dispatcher defect, not at user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError {
    /// No slot was recorded for the process.
    MissingSlot {
        /// The process without a slot.
        process_id: u32,
    },
    /// Turnaround time fell below burst time.
    NegativeWait {
        /// The affected process.
        process_id: u32,
        /// Computed turnaround time.
        turnaround: i64,
        /// The process burst time.
        burst: i64,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::MissingSlot { process_id } => {
                write!(f, "internal defect: no slot recorded for process P{process_id}")
            }
            InvariantError::NegativeWait {
                process_id,
                turnaround,
                burst,
            } => write!(
                f,
                "internal defect: process P{process_id} turnaround {turnaround} below burst {burst}"
            ),
        }
    }
}

impl std::error::Error for InvariantError {}

/// Per-process timing and energy results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process id.
    pub process_id: u32,
    /// Arrival time (ticks).
    pub arrival_time: i64,
    /// Burst time (ticks).
    pub burst_time: i64,
    /// Display-only priority field.
    pub priority: i32,
    /// Power draw class.
    pub power_hint: i64,
    /// End of the process's slot.
    pub completion_time: i64,
    /// Completion minus arrival.
    pub turnaround_time: i64,
    /// Turnaround minus burst.
    pub waiting_time: i64,
    /// `burst_time * power_hint`.
    pub energy: i64,
}

/// Aggregated results for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Per-process results in id order.
    pub results: Vec<ProcessResult>,
    /// Sum of per-process energy.
    pub total_energy: i64,
    /// Mean turnaround time; 0.0 for an empty run.
    pub avg_turnaround: f64,
    /// Mean waiting time; 0.0 for an empty run.
    pub avg_waiting: f64,
    /// Latest slot end.
    pub makespan: i64,
    /// Dispatch transitions between distinct slots.
    pub context_switches: usize,
    /// Ticks the CPU spent running.
    pub busy_time: i64,
    /// Ticks the CPU sat idle waiting for arrivals.
    pub idle_time: i64,
}

impl ScheduleSummary {
    /// Derives the summary from a completed timeline.
    ///
    /// `processes` must be the registered set in id order; the results come
    /// out in the same order. Fails only on internal invariant violations.
    pub fn calculate(
        timeline: &Timeline,
        processes: &[Process],
    ) -> Result<Self, InvariantError> {
        let mut results = Vec::with_capacity(processes.len());
        let mut total_energy: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut total_waiting: i64 = 0;

        for process in processes {
            let slot = timeline
                .slot_for(process.id)
                .ok_or(InvariantError::MissingSlot {
                    process_id: process.id,
                })?;

            let completion_time = slot.end;
            let turnaround_time = completion_time - process.arrival_time;
            if turnaround_time < process.burst_time {
                return Err(InvariantError::NegativeWait {
                    process_id: process.id,
                    turnaround: turnaround_time,
                    burst: process.burst_time,
                });
            }
            let waiting_time = turnaround_time - process.burst_time;
            let energy = process.energy();

            total_energy += energy;
            total_turnaround += turnaround_time;
            total_waiting += waiting_time;

            results.push(ProcessResult {
                process_id: process.id,
                arrival_time: process.arrival_time,
                burst_time: process.burst_time,
                priority: process.priority,
                power_hint: process.power_hint,
                completion_time,
                turnaround_time,
                waiting_time,
                energy,
            });
        }

        let count = results.len();
        let (avg_turnaround, avg_waiting) = if count == 0 {
            (0.0, 0.0)
        } else {
            (
                total_turnaround as f64 / count as f64,
                total_waiting as f64 / count as f64,
            )
        };

        Ok(Self {
            results,
            total_energy,
            avg_turnaround,
            avg_waiting,
            makespan: timeline.makespan(),
            context_switches: timeline.context_switches(),
            busy_time: timeline.busy_time(),
            idle_time: timeline.idle_time(),
        })
    }
}
