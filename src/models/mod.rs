//! Domain models for the simulator.
//!
//! Provides the core data types for one scheduling run: the immutable
//! process set on the input side, and the timeline (Gantt chart) on the
//! output side. Everything in between is derived exactly once and read-only
//! thereafter.

mod process;
mod timeline;

pub use process::{Process, ProcessAttrs};
pub use timeline::{IdleGap, Slot, Timeline, TimelineEntry};
