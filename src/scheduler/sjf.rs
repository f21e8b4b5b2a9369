//! Shortest Job First scheduler (non-preemptive).
//!
//! # Algorithm
//!
//! Event-driven over two pools:
//! - *pending*: not yet arrived, ordered by arrival;
//! - *ready*: arrived and unstarted, a min-heap on `(burst, arrival, input index)`.
//!
//! At each decision point, admit every pending process with `arrival <= clock`.
//! If the ready pool is non-empty, run its minimum to completion; otherwise
//! jump the clock to the next arrival.
//!
//! Selection is greedy over arrived processes only, so a short job that
//! arrives later never displaces one already running.
//!
//! # Complexity
//! O(n log n).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{arrival_order, Scheduler};
use crate::error::Result;
use crate::models::{Algorithm, Process, RunResult};
use crate::validation::validate_processes;

/// Shortest Job First (non-preemptive).
///
/// Ties on burst go to the earlier arrival, then to input order.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{Scheduler, Sjf};
///
/// let processes = vec![
///     Process::new("long", 0, 6),
///     Process::new("mid", 1, 4),
///     Process::new("short", 2, 1),
/// ];
/// let run = Sjf.run(&processes).unwrap();
/// let order: Vec<&str> = run.intervals.iter().map(|i| i.pid.as_str()).collect();
/// assert_eq!(order, ["long", "short", "mid"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Scheduler for Sjf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn run(&self, processes: &[Process]) -> Result<RunResult> {
        validate_processes(processes)?;
        log::debug!("SJF: scheduling {} processes", processes.len());

        let mut run = RunResult::new(Algorithm::Sjf);
        let pending = arrival_order(processes);
        let mut next = 0;
        let mut ready: BinaryHeap<Reverse<(i64, i64, usize)>> = BinaryHeap::new();
        let mut clock = 0;

        loop {
            while next < pending.len() && processes[pending[next]].arrival() <= clock {
                let idx = pending[next];
                let p = &processes[idx];
                ready.push(Reverse((p.burst(), p.arrival(), idx)));
                next += 1;
            }

            match ready.pop() {
                Some(Reverse((burst, _, idx))) => {
                    let p = &processes[idx];
                    run.push(p.id(), clock, burst);
                    clock += burst;
                    run.complete(p.id(), clock);
                }
                None if next < pending.len() => {
                    let arrival = processes[pending[next]].arrival();
                    log::debug!("SJF: CPU idle {clock}..{arrival}");
                    clock = arrival;
                }
                None => break,
            }
        }

        log::debug!("SJF: finished at t={clock}");
        Ok(run)
    }
}
