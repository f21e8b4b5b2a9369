//! Round-Robin scheduler (preemptive, fixed quantum).
//!
//! # Algorithm
//!
//! State: remaining work per process, a FIFO ready queue, and the pending
//! (not yet arrived) processes in arrival order. The clock starts at the
//! earliest arrival.
//!
//! 1. Admit every pending process with `arrival <= clock`, in arrival order.
//! 2. If the queue is empty, jump the clock to the next arrival.
//! 3. Otherwise pop the front, run it for `min(quantum, remaining)`.
//! 4. Admit processes that arrived up to and including the new clock.
//! 5. Re-queue the process at the back if it still has work; otherwise
//!    record its completion.
//!
//! Step 4 precedes step 5: a process arriving at the instant a slice ends
//! enters the queue ahead of the preempted one.
//!
//! # Complexity
//! O(n log n + total_burst / quantum).

use std::collections::VecDeque;

use super::{arrival_order, Scheduler};
use crate::error::Result;
use crate::models::{Algorithm, Process, RunResult};
use crate::validation::{validate_processes, validate_quantum};

/// Round-Robin with a fixed time quantum.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{RoundRobin, Scheduler};
///
/// let processes = vec![Process::new("P1", 0, 3), Process::new("P2", 0, 2)];
/// let run = RoundRobin::new(2).run(&processes).unwrap();
/// let slices: Vec<(&str, i64, i64)> = run
///     .intervals
///     .iter()
///     .map(|i| (i.pid.as_str(), i.start, i.duration))
///     .collect();
/// assert_eq!(slices, [("P1", 0, 2), ("P2", 2, 2), ("P1", 4, 1)]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round-Robin scheduler. The quantum is validated at run time.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// Time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

/// Index-based view of the not-yet-arrived processes.
struct Arrivals<'a> {
    processes: &'a [Process],
    order: Vec<usize>,
    next: usize,
}

impl<'a> Arrivals<'a> {
    fn new(processes: &'a [Process]) -> Self {
        Self {
            processes,
            order: arrival_order(processes),
            next: 0,
        }
    }

    /// Moves every process with `arrival <= clock` into `queue`.
    fn admit(&mut self, clock: i64, queue: &mut VecDeque<usize>) {
        while let Some(&idx) = self.order.get(self.next) {
            if self.processes[idx].arrival() > clock {
                break;
            }
            queue.push_back(idx);
            self.next += 1;
        }
    }

    fn next_arrival(&self) -> Option<i64> {
        self.order
            .get(self.next)
            .map(|&idx| self.processes[idx].arrival())
    }
}

impl Scheduler for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn run(&self, processes: &[Process]) -> Result<RunResult> {
        let mut errors = Vec::new();
        if let Err(mut e) = validate_processes(processes) {
            errors.append(&mut e);
        }
        if let Err(mut e) = validate_quantum(self.quantum) {
            errors.append(&mut e);
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }
        log::debug!(
            "RR: scheduling {} processes, quantum={}",
            processes.len(),
            self.quantum
        );

        let mut run = RunResult::new(Algorithm::RoundRobin);
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst()).collect();
        let mut arrivals = Arrivals::new(processes);
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(processes.len());
        let mut clock = arrivals.next_arrival().unwrap_or(0);

        loop {
            arrivals.admit(clock, &mut queue);

            let Some(idx) = queue.pop_front() else {
                match arrivals.next_arrival() {
                    Some(arrival) => {
                        log::debug!("RR: CPU idle {clock}..{arrival}");
                        clock = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let p = &processes[idx];
            let slice = self.quantum.min(remaining[idx]);
            run.push(p.id(), clock, slice);
            remaining[idx] -= slice;
            clock += slice;

            // Newcomers first, then the preempted process
            arrivals.admit(clock, &mut queue);
            if remaining[idx] > 0 {
                queue.push_back(idx);
            } else {
                run.complete(p.id(), clock);
            }
        }

        log::debug!(
            "RR: finished at t={clock} after {} slices",
            run.interval_count()
        );
        Ok(run)
    }
}
