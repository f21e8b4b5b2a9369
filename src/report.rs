//! Plain-text rendering of runs and metrics.
//!
//! A read-only presentation layer over `RunResult` and `Metrics`: a
//! per-process timing table, a character Gantt timeline, and a comparison
//! summary. Nothing here feeds back into the engine.

use std::fmt;

use crate::models::RunResult;
use crate::scheduler::{Comparison, Metrics};

const EXEC_CELL: &str = "███";
const IDLE_CELL: &str = "   ";

/// Widest timeline drawn, in ticks. Longer runs get a one-line notice.
pub const MAX_TIMELINE_TICKS: i64 = 500;

/// Per-process timing table followed by the two averages.
///
/// Start is the first time the process ran; End is its completion.
pub fn render_table(result: &RunResult, metrics: &Metrics) -> String {
    TableView { result, metrics }.to_string()
}

/// Character timeline: one row per process, one cell per tick.
///
/// Rows follow `metrics.per_process` (input order). Each tick costs three
/// characters per row, so runs with a makespan above
/// [`MAX_TIMELINE_TICKS`] are summarized instead of drawn.
pub fn render_gantt(result: &RunResult, metrics: &Metrics) -> String {
    GanttView { result, metrics }.to_string()
}

/// Summary naming the best algorithm for each average.
pub fn render_comparison(comparison: &Comparison) -> String {
    ComparisonView(comparison).to_string()
}

struct TableView<'a> {
    result: &'a RunResult,
    metrics: &'a Metrics,
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = "Process ID | Arrival Time | Burst Time | Start Time | End Time | Waiting Time | Turnaround Time";
        let algorithm = self.result.algorithm;
        let mode = if algorithm.is_preemptive() { " (preemptive)" } else { "" };
        writeln!(f, "{algorithm} Scheduling{mode}:")?;
        writeln!(f, "{header}")?;
        writeln!(f, "{}", "-".repeat(header.len()))?;
        for m in &self.metrics.per_process {
            writeln!(
                f,
                "{:^10} | {:^12} | {:^10} | {:^10} | {:^8} | {:^12} | {:^15}",
                m.pid, m.arrival, m.burst, m.first_start, m.completion, m.waiting, m.turnaround
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Average Waiting Time: {:.2}", self.metrics.avg_waiting)?;
        writeln!(f, "Average Turnaround Time: {:.2}", self.metrics.avg_turnaround)
    }
}

struct GanttView<'a> {
    result: &'a RunResult,
    metrics: &'a Metrics,
}

impl fmt::Display for GanttView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let makespan = self.result.makespan();
        writeln!(f, "{} Timeline", self.result.algorithm)?;
        if makespan > MAX_TIMELINE_TICKS {
            return writeln!(
                f,
                "(not drawn: makespan {makespan} exceeds {MAX_TIMELINE_TICKS} ticks)"
            );
        }

        let label_width = self
            .metrics
            .per_process
            .iter()
            .map(|m| m.pid.len())
            .max()
            .unwrap_or(0)
            .max(4)
            + 3;

        write!(f, "{:<label_width$}", "Time:")?;
        for t in 0..makespan {
            write!(f, "{t:3}")?;
        }
        writeln!(f)?;
        let rule_width = label_width + 3 * makespan.max(0) as usize;
        writeln!(f, "{}", "-".repeat(rule_width))?;

        for m in &self.metrics.per_process {
            let intervals = self.result.intervals_for(&m.pid);
            let last_tick = intervals.iter().map(|i| i.end()).max().unwrap_or(0);
            write!(f, "{:<label_width$}", format!("{}:", m.pid))?;
            // Trailing idle cells are dropped
            for t in 0..last_tick {
                let running = intervals.iter().any(|i| i.contains(t));
                f.write_str(if running { EXEC_CELL } else { IDLE_CELL })?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "Legend:")?;
        writeln!(f, "{EXEC_CELL} - Process executing")?;
        writeln!(f, "{IDLE_CELL} - Process waiting or completed")
    }
}

struct ComparisonView<'a>(&'a Comparison);

impl fmt::Display for ComparisonView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comparison = self.0;
        writeln!(f, "Algorithm Comparison Summary")?;
        for e in &comparison.entries {
            writeln!(
                f,
                "{:<5} avg waiting {:>8.2}  avg turnaround {:>8.2}",
                e.algorithm.short_name(),
                e.metrics.avg_waiting,
                e.metrics.avg_turnaround
            )?;
        }
        if let Some(best) = comparison.best_by_waiting() {
            writeln!(
                f,
                "Best for Waiting Time: {} (Average: {:.2})",
                best.algorithm.short_name(),
                best.metrics.avg_waiting
            )?;
        }
        if let Some(best) = comparison.best_by_turnaround() {
            writeln!(
                f,
                "Best for Turnaround Time: {} (Average: {:.2})",
                best.algorithm.short_name(),
                best.metrics.avg_turnaround
            )?;
        }
        Ok(())
    }
}
