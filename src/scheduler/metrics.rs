//! Run performance metrics.
//!
//! Computes per-process timing and aggregate indicators from a completed
//! run and its input processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | End of the process's last interval |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |
//! | Throughput | processes / makespan |
//! | CPU Utilization | busy time / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{ExecutionInterval, Process, RunResult};
use crate::validation::validate_processes;

/// A scheduler produced output that contradicts its input.
///
/// Never caused by user input: it means an algorithm broke an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A process in the input set has no interval in the run.
    MissingIntervals(String),
    /// The run contains an interval for a pid not in the input set.
    UnknownProcess(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::MissingIntervals(pid) => {
                write!(f, "process '{pid}' has no execution interval")
            }
            DomainError::UnknownProcess(pid) => {
                write!(f, "interval references unknown process '{pid}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// Timing of a single process within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub pid: String,
    pub arrival: i64,
    pub burst: i64,
    /// Start of the first interval.
    pub first_start: i64,
    /// End of the last interval.
    pub completion: i64,
    pub turnaround: i64,
    pub waiting: i64,
    pub response: i64,
}

/// Run performance indicators.
///
/// `per_process` follows the order of the input process set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metrics {
    pub per_process: Vec<ProcessMetrics>,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub avg_response: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Completed processes per tick over the makespan.
    pub throughput: f64,
    /// Fraction of `[0, makespan)` the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    pub context_switches: usize,
}

impl Metrics {
    /// Computes metrics from the original process set and a run over it.
    ///
    /// # Errors
    /// - `Validation` if `processes` is not a valid process set (empty,
    ///   duplicate IDs, bad times).
    /// - `DomainError` if the run and the process set disagree on which
    ///   processes exist.
    pub fn calculate(processes: &[Process], result: &RunResult) -> Result<Self> {
        validate_processes(processes)?;
        let known: HashSet<&str> = processes.iter().map(|p| p.id()).collect();
        let mut by_pid: HashMap<&str, (i64, i64)> = HashMap::new();

        for interval in &result.intervals {
            let pid = interval.pid.as_str();
            if !known.contains(pid) {
                return Err(DomainError::UnknownProcess(interval.pid.clone()).into());
            }
            let span = by_pid.entry(pid).or_insert((interval.start, interval.end()));
            *span = merge_span(*span, interval);
        }

        let mut per_process = Vec::with_capacity(processes.len());
        for p in processes {
            let &(first_start, completion) = by_pid
                .get(p.id())
                .ok_or_else(|| DomainError::MissingIntervals(p.id().to_string()))?;
            let turnaround = completion - p.arrival();
            per_process.push(ProcessMetrics {
                pid: p.id().to_string(),
                arrival: p.arrival(),
                burst: p.burst(),
                first_start,
                completion,
                turnaround,
                waiting: turnaround - p.burst(),
                response: first_start - p.arrival(),
            });
        }

        let makespan = result.makespan();
        let (throughput, cpu_utilization) = if makespan > 0 {
            (
                per_process.len() as f64 / makespan as f64,
                result.busy_time() as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            avg_waiting: mean(per_process.iter().map(|m| m.waiting)),
            avg_turnaround: mean(per_process.iter().map(|m| m.turnaround)),
            avg_response: mean(per_process.iter().map(|m| m.response)),
            per_process,
            makespan,
            throughput,
            cpu_utilization,
            context_switches: result.context_switches(),
        })
    }

    /// Metrics for one process.
    pub fn for_process(&self, pid: &str) -> Option<&ProcessMetrics> {
        self.per_process.iter().find(|m| m.pid == pid)
    }

    /// Sum of waiting times across all processes, saturating at `i64::MAX`.
    pub fn total_waiting(&self) -> i64 {
        self.per_process
            .iter()
            .fold(0, |acc, m| acc.saturating_add(m.waiting))
    }

    /// Sum of turnaround times across all processes, saturating at `i64::MAX`.
    pub fn total_turnaround(&self) -> i64 {
        self.per_process
            .iter()
            .fold(0, |acc, m| acc.saturating_add(m.turnaround))
    }

    /// Largest waiting time of any single process.
    pub fn max_waiting(&self) -> i64 {
        self.per_process.iter().map(|m| m.waiting).max().unwrap_or(0)
    }
}

/// Computes metrics for `result` over the original `processes`.
pub fn compute_metrics(processes: &[Process], result: &RunResult) -> Result<Metrics> {
    Metrics::calculate(processes, result)
}

/// Widens `(first_start, completion)` to cover `interval`.
///
/// Intervals never overlap, so the latest end is the end of the
/// last-ordered interval.
fn merge_span((first, last_end): (i64, i64), interval: &ExecutionInterval) -> (i64, i64) {
    (first.min(interval.start), last_end.max(interval.end()))
}

fn mean(values: impl Iterator<Item = i64>) -> f64 {
    // Sums of i64 ticks can exceed i64::MAX
    let (sum, count) = values.fold((0i128, 0usize), |(s, c), v| (s + i128::from(v), c + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Algorithm;
    use crate::scheduler::{run_fcfs, run_round_robin, run_sjf};
    use crate::validation::ValidationErrorKind;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ]
    }

    #[test]
    fn test_fcfs_metrics() {
        let processes = sample_processes();
        let m = compute_metrics(&processes, &run_fcfs(&processes).unwrap()).unwrap();

        let waits: Vec<i64> = m.per_process.iter().map(|p| p.waiting).collect();
        assert_eq!(waits, vec![0, 4, 6]);
        assert!((m.avg_waiting - 10.0 / 3.0).abs() < 1e-10);
        // Turnaround: 5, 7, 14
        assert!((m.avg_turnaround - 26.0 / 3.0).abs() < 1e-10);
        assert_eq!(m.makespan, 16);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_metrics_match_fcfs_here() {
        let processes = sample_processes();
        let fcfs = compute_metrics(&processes, &run_fcfs(&processes).unwrap()).unwrap();
        let sjf = compute_metrics(&processes, &run_sjf(&processes).unwrap()).unwrap();
        assert_eq!(fcfs.per_process, sjf.per_process);
    }

    #[test]
    fn test_round_robin_metrics() {
        let processes = sample_processes();
        let m = compute_metrics(&processes, &run_round_robin(&processes, 2).unwrap()).unwrap();

        let p1 = m.for_process("P1").unwrap();
        let p2 = m.for_process("P2").unwrap();
        let p3 = m.for_process("P3").unwrap();
        assert_eq!((p1.completion, p1.turnaround, p1.waiting), (12, 12, 7));
        assert_eq!((p2.completion, p2.turnaround, p2.waiting), (9, 8, 5));
        assert_eq!((p3.completion, p3.turnaround, p3.waiting), (16, 14, 6));
        assert_eq!((p1.response, p2.response, p3.response), (0, 1, 2));
        assert_eq!(m.total_waiting(), 18);
        assert_eq!(m.total_turnaround(), 34);
        assert_eq!(m.max_waiting(), 7);
        assert!((m.avg_waiting - 6.0).abs() < 1e-10);
        assert_eq!(m.context_switches, 7);
    }

    #[test]
    fn test_waiting_uses_total_burst_not_last_slice() {
        let processes = vec![Process::new("A", 0, 3), Process::new("B", 0, 3)];
        let m = compute_metrics(&processes, &run_round_robin(&processes, 2).unwrap()).unwrap();
        // A: 0-2, B: 2-4, A: 4-5, B: 5-6
        assert_eq!(m.for_process("A").unwrap().waiting, 2);
        assert_eq!(m.for_process("B").unwrap().waiting, 3);
    }

    #[test]
    fn test_idle_cpu_utilization() {
        let processes = vec![Process::new("P1", 0, 2), Process::new("P2", 6, 2)];
        let m = compute_metrics(&processes, &run_fcfs(&processes).unwrap()).unwrap();
        assert_eq!(m.makespan, 8);
        assert!((m.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((m.throughput - 0.25).abs() < 1e-10);
        assert!((m.avg_waiting - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_missing_intervals() {
        let processes = sample_processes();
        let mut run = RunResult::new(Algorithm::Fcfs);
        run.push("P1", 0, 5);
        run.push("P2", 5, 3);

        let err = compute_metrics(&processes, &run).unwrap_err();
        assert_eq!(
            err,
            crate::Error::Domain(DomainError::MissingIntervals("P3".into()))
        );
    }

    #[test]
    fn test_unknown_process() {
        let processes = vec![Process::new("P1", 0, 1)];
        let mut run = RunResult::new(Algorithm::Fcfs);
        run.push("P1", 0, 1);
        run.push("ghost", 1, 1);

        let err = compute_metrics(&processes, &run).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Domain(DomainError::UnknownProcess(ref pid)) if pid == "ghost"
        ));
    }

    #[test]
    fn test_duplicate_pid_rejected() {
        let run = run_fcfs(&[Process::new("P1", 0, 2)]).unwrap();
        let processes = vec![Process::new("P1", 0, 2), Process::new("P1", 5, 2)];

        let err = compute_metrics(&processes, &run).unwrap_err();
        assert!(err
            .validation_errors()
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_empty_process_set_rejected() {
        let run = run_fcfs(&[Process::new("P1", 0, 2)]).unwrap();

        let err = compute_metrics(&[], &run).unwrap_err();
        assert_eq!(err.validation_errors().len(), 1);
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::EmptyProcessSet
        );
    }

    #[test]
    fn test_averages_near_time_limit() {
        let processes = vec![
            Process::new("A", 0, i64::MAX / 2),
            Process::new("B", 0, i64::MAX / 2),
        ];
        let m = compute_metrics(&processes, &run_fcfs(&processes).unwrap()).unwrap();
        // Turnarounds MAX/2 and MAX-1 would overflow an i64 sum
        assert!(m.avg_turnaround > 0.0);
        assert_eq!(m.total_turnaround(), i64::MAX);
    }

    #[test]
    fn test_metrics_serialize() {
        let processes = sample_processes();
        let m = compute_metrics(&processes, &run_fcfs(&processes).unwrap()).unwrap();
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["per_process"][1]["waiting"], 4);
        assert_eq!(json["makespan"], 16);
    }
}
