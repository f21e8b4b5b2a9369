//! Side-by-side comparison of the scheduling algorithms.
//!
//! Runs each requested algorithm over the same process set and ranks them
//! by average waiting and turnaround time.

use serde::{Deserialize, Serialize};

use super::{scheduler_for, Metrics};
use crate::error::Result;
use crate::models::{Algorithm, Process, RunResult};

/// One algorithm's run and its metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub algorithm: Algorithm,
    pub result: RunResult,
    pub metrics: Metrics,
}

/// Results of running several algorithms on one process set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    /// Entries in the order the algorithms were requested.
    pub entries: Vec<ComparisonEntry>,
}

impl Comparison {
    /// Runs FCFS, SJF and Round-Robin over `processes`.
    ///
    /// # Example
    ///
    /// ```
    /// use cpu_sched::models::{Algorithm, Process};
    /// use cpu_sched::scheduler::Comparison;
    ///
    /// let processes = vec![
    ///     Process::new("P1", 0, 5),
    ///     Process::new("P2", 1, 3),
    ///     Process::new("P3", 2, 8),
    /// ];
    /// let cmp = Comparison::run(&processes, 2).unwrap();
    /// assert_eq!(cmp.best_by_waiting().unwrap().algorithm, Algorithm::Fcfs);
    /// ```
    pub fn run(processes: &[Process], quantum: i64) -> Result<Self> {
        Self::run_algorithms(processes, &Algorithm::ALL, quantum)
    }

    /// Runs the given algorithms over `processes`.
    ///
    /// Each scheduler reads the same borrowed slice and builds its own
    /// working pools, so no run can observe another's state.
    pub fn run_algorithms(
        processes: &[Process],
        algorithms: &[Algorithm],
        quantum: i64,
    ) -> Result<Self> {
        let mut entries = Vec::with_capacity(algorithms.len());
        for &algorithm in algorithms {
            let result = scheduler_for(algorithm, quantum).run(processes)?;
            let metrics = Metrics::calculate(processes, &result)?;
            log::info!(
                "{}: avg waiting {:.2}, avg turnaround {:.2}",
                algorithm.short_name(),
                metrics.avg_waiting,
                metrics.avg_turnaround
            );
            entries.push(ComparisonEntry {
                algorithm,
                result,
                metrics,
            });
        }
        Ok(Self { entries })
    }

    /// Entry with the lowest average waiting time (earliest entry on ties).
    pub fn best_by_waiting(&self) -> Option<&ComparisonEntry> {
        self.best_by(|e| e.metrics.avg_waiting)
    }

    /// Entry with the lowest average turnaround time (earliest entry on ties).
    pub fn best_by_turnaround(&self) -> Option<&ComparisonEntry> {
        self.best_by(|e| e.metrics.avg_turnaround)
    }

    /// Entry for a specific algorithm.
    pub fn entry(&self, algorithm: Algorithm) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|e| e.algorithm == algorithm)
    }

    fn best_by(&self, key: impl Fn(&ComparisonEntry) -> f64) -> Option<&ComparisonEntry> {
        let mut best: Option<&ComparisonEntry> = None;
        for entry in &self.entries {
            match best {
                Some(b) if key(entry) >= key(b) - 1e-9 => {}
                _ => best = Some(entry),
            }
        }
        best
    }
}
