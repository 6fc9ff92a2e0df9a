//! Report rendering.
//!
//! Produces the textual run report: the Gantt line, the per-process table,
//! and the totals. Idle gaps are rendered in the Gantt line as
//! `[idle:<start>-<end>]`. The JSON mode serializes the full outcome
//! instead of formatting it.

use crate::models::{Timeline, TimelineEntry};
use crate::scheduler::{Outcome, ScheduleSummary};

/// Renders the Gantt chart line.
///
/// One bracketed token per slot or idle gap, in chronological order.
pub fn gantt_line(timeline: &Timeline) -> String {
    let tokens: Vec<String> = timeline
        .entries()
        .iter()
        .map(|entry| match entry {
            TimelineEntry::Run(slot) => {
                format!("[P{}:{}-{}]", slot.process_id, slot.start, slot.end)
            }
            TimelineEntry::Idle(gap) => format!("[idle:{}-{}]", gap.start, gap.end),
        })
        .collect();
    tokens.join(" ")
}

/// Renders the per-process table, one row per process in id order.
pub fn metrics_table(summary: &ScheduleSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4}\n",
        "PID", "AT", "BT", "PR", "PH", "CT", "TAT", "WT"
    ));
    for r in &summary.results {
        out.push_str(&format!(
            "{:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4}\n",
            r.process_id,
            r.arrival_time,
            r.burst_time,
            r.priority,
            r.power_hint,
            r.completion_time,
            r.turnaround_time,
            r.waiting_time,
        ));
    }
    out
}

/// Renders the full text report, ending with a newline.
pub fn render_text(outcome: &Outcome) -> String {
    let summary = &outcome.summary;
    let mut out = String::new();

    out.push_str(&gantt_line(&outcome.timeline));
    out.push('\n');
    out.push_str(&metrics_table(summary));
    out.push_str(&format!("Total Energy Used = {}\n", summary.total_energy));
    out.push_str(&format!(
        "Average Turnaround Time = {:.2}\n",
        summary.avg_turnaround
    ));
    out.push_str(&format!(
        "Average Waiting Time = {:.2}\n",
        summary.avg_waiting
    ));
    out.push_str(&format!(
        "Makespan = {}, Context Switches = {}\n",
        summary.makespan, summary.context_switches
    ));
    out
}

/// Renders the outcome as a pretty-printed JSON document.
pub fn render_json(outcome: &Outcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}
