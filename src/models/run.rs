//! Run result (solution) model.
//!
//! A run is the chronologically ordered sequence of execution intervals a
//! scheduler emits for one process set, plus each process's completion time.
//!
//! # Invariants
//! - Intervals are ordered by `start` and never overlap (single processor).
//! - For each pid, interval durations sum to the process's burst.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Algorithm;

/// One contiguous slice of CPU time given to a process.
///
/// Covers the half-open range `[start, start + duration)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process that ran.
    pub pid: String,
    /// Start tick.
    pub start: i64,
    /// Length in ticks (always positive).
    pub duration: i64,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(pid: impl Into<String>, start: i64, duration: i64) -> Self {
        Self {
            pid: pid.into(),
            start,
            duration,
        }
    }

    /// End tick (exclusive).
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + self.duration
    }

    /// Whether tick `t` falls inside `[start, end)`.
    #[inline]
    pub fn contains(&self, t: i64) -> bool {
        self.start <= t && t < self.end()
    }

    /// Whether two intervals share any tick.
    pub fn overlaps(&self, other: &ExecutionInterval) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

/// Output of a single scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Algorithm that produced this run.
    pub algorithm: Algorithm,
    /// Intervals in global execution order.
    pub intervals: Vec<ExecutionInterval>,
    /// Completion time per pid (end of its final interval).
    pub completion: HashMap<String, i64>,
}

impl RunResult {
    /// Creates an empty run.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            intervals: Vec::new(),
            completion: HashMap::new(),
        }
    }

    /// Appends an interval at the end of the timeline.
    pub(crate) fn push(&mut self, pid: &str, start: i64, duration: i64) {
        debug_assert!(duration > 0, "empty interval for {pid}");
        debug_assert!(
            self.intervals.last().map_or(true, |last| last.end() <= start),
            "interval for {pid} at {start} overlaps its predecessor"
        );
        log::trace!(
            "{}: {} runs {}..{}",
            self.algorithm.short_name(),
            pid,
            start,
            start + duration
        );
        self.intervals.push(ExecutionInterval::new(pid, start, duration));
    }

    /// Records that `pid` finished at `time`.
    pub(crate) fn complete(&mut self, pid: &str, time: i64) {
        self.completion.insert(pid.to_string(), time);
    }

    /// All intervals for a given pid, in start order.
    pub fn intervals_for(&self, pid: &str) -> Vec<&ExecutionInterval> {
        self.intervals.iter().filter(|i| i.pid == pid).collect()
    }

    /// Completion time for a pid.
    pub fn completion_time(&self, pid: &str) -> Option<i64> {
        self.completion.get(pid).copied()
    }

    /// First tick at which `pid` was on the CPU.
    pub fn first_start(&self, pid: &str) -> Option<i64> {
        self.intervals
            .iter()
            .find(|i| i.pid == pid)
            .map(|i| i.start)
    }

    /// Makespan: end of the last interval.
    pub fn makespan(&self) -> i64 {
        self.intervals.last().map(|i| i.end()).unwrap_or(0)
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.intervals.iter().map(|i| i.duration).sum()
    }

    /// Total ticks the CPU sat idle between t=0 and the makespan.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Number of times the CPU moved from one process to a different one.
    pub fn context_switches(&self) -> usize {
        self.intervals
            .windows(2)
            .filter(|w| w[0].pid != w[1].pid)
            .count()
    }

    /// Number of intervals.
    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    /// Pid running at tick `t`, if any.
    pub fn running_at(&self, t: i64) -> Option<&str> {
        self.intervals
            .iter()
            .find(|i| i.contains(t))
            .map(|i| i.pid.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_run() -> RunResult {
        let mut r = RunResult::new(Algorithm::RoundRobin);
        r.push("A", 1, 2);
        r.push("B", 3, 2);
        r.push("A", 5, 1);
        r.complete("B", 5);
        r.complete("A", 6);
        r.push("C", 8, 2);
        r.complete("C", 10);
        r
    }

    #[test]
    fn test_interval_bounds() {
        let i = ExecutionInterval::new("A", 4, 3);
        assert_eq!(i.end(), 7);
        assert!(i.contains(4));
        assert!(i.contains(6));
        assert!(!i.contains(7));
        assert!(!i.contains(3));
    }

    #[test]
    fn test_interval_overlap() {
        let a = ExecutionInterval::new("A", 0, 5);
        let b = ExecutionInterval::new("B", 5, 3);
        let c = ExecutionInterval::new("C", 4, 2);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn test_run_queries() {
        let r = sample_run();
        assert_eq!(r.interval_count(), 4);
        assert_eq!(r.intervals_for("A").len(), 2);
        assert_eq!(r.completion_time("A"), Some(6));
        assert_eq!(r.completion_time("Z"), None);
        assert_eq!(r.first_start("B"), Some(3));
        assert_eq!(r.makespan(), 10);
        assert_eq!(r.busy_time(), 7);
        assert_eq!(r.idle_time(), 3); // [0,1) and [6,8)
        assert_eq!(r.context_switches(), 3);
        assert_eq!(r.running_at(5), Some("A"));
        assert_eq!(r.running_at(7), None);
    }

    #[test]
    fn test_empty_run() {
        let r = RunResult::new(Algorithm::Fcfs);
        assert_eq!(r.makespan(), 0);
        assert_eq!(r.busy_time(), 0);
        assert_eq!(r.context_switches(), 0);
    }
}
