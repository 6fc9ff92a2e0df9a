//! Process model.
//!
//! A process is the unit of dispatch: it becomes eligible at its arrival
//! time, occupies the CPU for its full burst once selected, and carries a
//! power hint classifying its relative draw.
//!
//! All times are integer ticks relative to a scheduling epoch (t=0).

use serde::{Deserialize, Serialize};

/// Raw input attributes for one process, before id assignment.
///
/// This is the shape of one input row (`AT BT PR PH`). Attribute ranges are
/// enforced by the registry, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessAttrs {
    /// Time the process becomes eligible for dispatch (ticks).
    pub arrival_time: i64,
    /// Required CPU time (ticks). Must be positive.
    pub burst_time: i64,
    /// Scheduling priority. Not consulted by the default ranking rule;
    /// accepted and displayed as-is.
    pub priority: i32,
    /// Relative power draw class, 1 (low) to 3 (high).
    pub power_hint: i64,
}

impl ProcessAttrs {
    /// Creates an attribute row.
    pub fn new(arrival_time: i64, burst_time: i64, priority: i32, power_hint: i64) -> Self {
        Self {
            arrival_time,
            burst_time,
            priority,
            power_hint,
        }
    }
}

/// A registered process.
///
/// Immutable after registry construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique id, assigned by input order starting at 1.
    pub id: u32,
    /// Time the process becomes eligible for dispatch (ticks).
    pub arrival_time: i64,
    /// Required CPU time (ticks).
    pub burst_time: i64,
    /// Display-only priority field.
    pub priority: i32,
    /// Relative power draw class, 1 (low) to 3 (high).
    pub power_hint: i64,
}

impl Process {
    /// Creates a process from an id and its input attributes.
    pub fn new(id: u32, attrs: ProcessAttrs) -> Self {
        Self {
            id,
            arrival_time: attrs.arrival_time,
            burst_time: attrs.burst_time,
            priority: attrs.priority,
            power_hint: attrs.power_hint,
        }
    }

    /// Energy drawn over the full burst: `burst_time * power_hint`.
    #[inline]
    pub fn energy(&self) -> i64 {
        self.burst_time * self.power_hint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_from_attrs() {
        let p = Process::new(1, ProcessAttrs::new(2, 5, 7, 3));
        assert_eq!(p.id, 1);
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.burst_time, 5);
        assert_eq!(p.priority, 7);
        assert_eq!(p.power_hint, 3);
    }

    #[test]
    fn test_process_energy() {
        let p = Process::new(1, ProcessAttrs::new(0, 5, 1, 3));
        assert_eq!(p.energy(), 15);

        let q = Process::new(2, ProcessAttrs::new(1, 3, 2, 1));
        assert_eq!(q.energy(), 3);
    }
}
