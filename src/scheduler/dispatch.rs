//! Non-preemptive dispatch loop.
//!
//! # Algorithm
//!
//! 1. Keep the ranked candidate order as the remaining pool.
//! 2. At each step dispatch the first remaining process whose arrival time
//!    is not after the cursor; it runs its full burst.
//! 3. If nothing has arrived, record an idle gap and advance the cursor to
//!    the earliest remaining arrival.
//!
//! The cursor starts at 0, so a schedule whose first arrival is late begins
//! with an idle gap. Each dispatch removes one process from the pool, so
//! the loop terminates after exactly one slot per process.
//!
//! # Complexity
//! O(n^2) over the process count; n stays small in a teaching simulator.

use crate::models::{IdleGap, Slot, Timeline};
use crate::ranking::RankedProcess;

/// Single-CPU non-preemptive dispatcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher;

impl Dispatcher {
    /// Creates a dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Builds the timeline for a ranked candidate order.
    ///
    /// The ranked order acts as the selection priority among processes that
    /// have already arrived; scores are never re-evaluated mid-run. A
    /// process is never dispatched before its arrival time.
    pub fn run(&self, ranked: Vec<RankedProcess>) -> Timeline {
        let mut timeline = Timeline::new();
        let mut remaining = ranked;
        let mut now: i64 = 0;

        while !remaining.is_empty() {
            let eligible = remaining
                .iter()
                .position(|rp| rp.process.arrival_time <= now);

            if let Some(pos) = eligible {
                let rp = remaining.remove(pos);
                let end = now + rp.process.burst_time;
                timeline.add_slot(Slot::new(rp.process.id, now, end));
                now = end;
            } else if let Some(next) = remaining.iter().map(|rp| rp.process.arrival_time).min() {
                // No eligible process, so every remaining arrival is in the
                // future and the gap is non-empty.
                timeline.add_gap(IdleGap::new(now, next));
                now = next;
            }
        }

        timeline
    }
}
