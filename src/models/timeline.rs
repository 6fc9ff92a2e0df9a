//! Timeline (Gantt chart) model.
//!
//! The dispatch loop produces an ordered sequence of busy slots and explicit
//! idle gaps over a single CPU. Slots never overlap, and slots and gaps
//! together tile the span from t=0 to the makespan without holes.

use serde::{Deserialize, Serialize};

/// One dispatched burst on the CPU.
///
/// The slot covers `[start, end)`; its width equals the process burst time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Id of the dispatched process.
    pub process_id: u32,
    /// Start time (ticks).
    pub start: i64,
    /// End time (ticks).
    pub end: i64,
}

impl Slot {
    /// Creates a slot.
    pub fn new(process_id: u32, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Slot width (end - start) in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// A span during which no process was eligible to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleGap {
    /// Start time (ticks).
    pub start: i64,
    /// End time (ticks).
    pub end: i64,
}

impl IdleGap {
    /// Creates an idle gap.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Gap width (end - start) in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// A chronological Gantt chart item: a dispatched slot or an idle gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineEntry {
    /// A process occupying the CPU.
    Run(Slot),
    /// The CPU waiting for the next arrival.
    Idle(IdleGap),
}

impl TimelineEntry {
    /// Start of the underlying span.
    pub fn start(&self) -> i64 {
        match self {
            TimelineEntry::Run(slot) => slot.start,
            TimelineEntry::Idle(gap) => gap.start,
        }
    }
}

/// A completed single-CPU schedule.
///
/// Both lists are kept in chronological order by the dispatch loop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Dispatched slots, ordered by start time.
    pub slots: Vec<Slot>,
    /// Idle gaps, ordered by start time.
    pub gaps: Vec<IdleGap>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot.
    pub fn add_slot(&mut self, slot: Slot) {
        self.slots.push(slot);
    }

    /// Appends an idle gap.
    pub fn add_gap(&mut self, gap: IdleGap) {
        self.gaps.push(gap);
    }

    /// Makespan: latest slot end, or 0 for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.slots.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total ticks the CPU spent running.
    pub fn busy_time(&self) -> i64 {
        self.slots.iter().map(Slot::duration).sum()
    }

    /// Total ticks the CPU sat idle between arrivals.
    pub fn idle_time(&self) -> i64 {
        self.gaps.iter().map(IdleGap::duration).sum()
    }

    /// Dispatch transitions between distinct slots.
    pub fn context_switches(&self) -> usize {
        self.slots.len().saturating_sub(1)
    }

    /// Finds the slot for a given process.
    pub fn slot_for(&self, process_id: u32) -> Option<&Slot> {
        self.slots.iter().find(|s| s.process_id == process_id)
    }

    /// Number of dispatched slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether nothing was dispatched.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots and gaps interleaved in chronological order.
    pub fn entries(&self) -> Vec<TimelineEntry> {
        let mut entries: Vec<TimelineEntry> = self
            .slots
            .iter()
            .copied()
            .map(TimelineEntry::Run)
            .chain(self.gaps.iter().copied().map(TimelineEntry::Idle))
            .collect();
        entries.sort_by_key(TimelineEntry::start);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.add_gap(IdleGap::new(0, 2));
        t.add_slot(Slot::new(1, 2, 5));
        t.add_slot(Slot::new(2, 5, 9));
        t
    }

    #[test]
    fn test_makespan() {
        let t = sample_timeline();
        assert_eq!(t.makespan(), 9);
    }

    #[test]
    fn test_busy_and_idle_time() {
        let t = sample_timeline();
        assert_eq!(t.busy_time(), 7);
        assert_eq!(t.idle_time(), 2);
        assert_eq!(t.busy_time() + t.idle_time(), t.makespan());
    }

    #[test]
    fn test_context_switches() {
        let t = sample_timeline();
        assert_eq!(t.context_switches(), 1);
        assert_eq!(Timeline::new().context_switches(), 0);
    }

    #[test]
    fn test_slot_for() {
        let t = sample_timeline();
        let slot = t.slot_for(2).unwrap();
        assert_eq!(slot.start, 5);
        assert!(t.slot_for(99).is_none());
    }

    #[test]
    fn test_entries_chronological() {
        let t = sample_timeline();
        let entries = t.entries();
        assert_eq!(entries.len(), 3);
        assert!(matches!(entries[0], TimelineEntry::Idle(g) if g.start == 0 && g.end == 2));
        assert!(matches!(entries[1], TimelineEntry::Run(s) if s.process_id == 1));
        assert!(matches!(entries[2], TimelineEntry::Run(s) if s.process_id == 2));
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.busy_time(), 0);
        assert_eq!(t.idle_time(), 0);
        assert!(t.entries().is_empty());
    }

    #[test]
    fn test_slot_duration() {
        let s = Slot::new(1, 2, 5);
        assert_eq!(s.duration(), 3);
        let g = IdleGap::new(0, 2);
        assert_eq!(g.duration(), 2);
    }
}
