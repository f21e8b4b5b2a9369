//! CPU schedulers and run metrics.
//!
//! Provides the three classic single-processor disciplines and the
//! waiting/turnaround metrics derived from their output.
//!
//! # Algorithms
//!
//! | Scheduler | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | `Fcfs` | No | Earliest arrival (stable) |
//! | `Sjf` | No | Shortest burst among arrived processes |
//! | `RoundRobin` | Yes | FIFO ready queue, fixed quantum |
//!
//! Every scheduler is a pure function of its input: it validates the
//! process set, builds its own index-based working pools, and returns a
//! fresh `RunResult`. Idle gaps are skipped by jumping the clock straight
//! to the next arrival.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod compare;
mod fcfs;
mod metrics;
mod round_robin;
mod sjf;

pub use compare::{Comparison, ComparisonEntry};
pub use fcfs::Fcfs;
pub use metrics::{compute_metrics, DomainError, Metrics, ProcessMetrics};
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

use std::fmt::Debug;

use crate::error::Result;
use crate::models::{Algorithm, Process, RunResult};

/// A single-processor scheduling discipline.
///
/// Implementations must not depend on anything but the process slice (and
/// their own configuration), so independent runs can proceed side by side.
pub trait Scheduler: Send + Sync + Debug {
    /// Which algorithm this scheduler implements.
    fn algorithm(&self) -> Algorithm;

    /// Simulates the process set and returns the execution timeline.
    ///
    /// Fails with `Error::Validation` before doing any work if the input
    /// is malformed.
    fn run(&self, processes: &[Process]) -> Result<RunResult>;
}

/// Runs First-Come, First-Serve over `processes`.
pub fn run_fcfs(processes: &[Process]) -> Result<RunResult> {
    Fcfs.run(processes)
}

/// Runs non-preemptive Shortest Job First over `processes`.
pub fn run_sjf(processes: &[Process]) -> Result<RunResult> {
    Sjf.run(processes)
}

/// Runs Round-Robin with the given time quantum over `processes`.
pub fn run_round_robin(processes: &[Process], quantum: i64) -> Result<RunResult> {
    RoundRobin::new(quantum).run(processes)
}

/// Builds the scheduler for `algorithm`. `quantum` is only used by Round-Robin.
pub fn scheduler_for(algorithm: Algorithm, quantum: i64) -> Box<dyn Scheduler> {
    match algorithm {
        Algorithm::Fcfs => Box::new(Fcfs),
        Algorithm::Sjf => Box::new(Sjf),
        Algorithm::RoundRobin => Box::new(RoundRobin::new(quantum)),
    }
}

/// Input indices ordered by arrival time, ties kept in input order.
fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    // sort_by_key is stable
    order.sort_by_key(|&i| processes[i].arrival());
    order
}
