//! First-Come, First-Serve scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival (equal arrivals keep input order).
//! 2. For each process, advance the clock to its arrival if the CPU is idle.
//! 3. Run it to completion in one interval.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.

use super::{arrival_order, Scheduler};
use crate::error::Result;
use crate::models::{Algorithm, Process, RunResult};
use crate::validation::validate_processes;

/// First-Come, First-Serve (non-preemptive).
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{Fcfs, Scheduler};
///
/// let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let run = Fcfs.run(&processes).unwrap();
/// assert_eq!(run.completion_time("P2"), Some(8));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn run(&self, processes: &[Process]) -> Result<RunResult> {
        validate_processes(processes)?;
        log::debug!("FCFS: scheduling {} processes", processes.len());

        let mut run = RunResult::new(Algorithm::Fcfs);
        let mut clock = 0;

        for idx in arrival_order(processes) {
            let p = &processes[idx];
            if clock < p.arrival() {
                log::debug!("FCFS: CPU idle {}..{}", clock, p.arrival());
                clock = p.arrival();
            }
            run.push(p.id(), clock, p.burst());
            clock += p.burst();
            run.complete(p.id(), clock);
        }

        log::debug!("FCFS: finished at t={clock}");
        Ok(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionInterval;

    #[test]
    fn test_textbook_example() {
        let processes = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ];
        let run = Fcfs.run(&processes).unwrap();
        assert_eq!(
            run.intervals,
            vec![
                ExecutionInterval::new("P1", 0, 5),
                ExecutionInterval::new("P2", 5, 3),
                ExecutionInterval::new("P3", 8, 8),
            ]
        );
        assert_eq!(run.completion_time("P3"), Some(16));
    }

    #[test]
    fn test_unsorted_input() {
        let processes = vec![
            Process::new("late", 10, 2),
            Process::new("early", 0, 4),
        ];
        let run = Fcfs.run(&processes).unwrap();
        assert_eq!(run.intervals[0].pid, "early");
        assert_eq!(run.intervals[1].pid, "late");
    }

    #[test]
    fn test_equal_arrivals_keep_input_order() {
        let processes = vec![
            Process::new("B", 0, 9),
            Process::new("A", 0, 1),
            Process::new("C", 0, 4),
        ];
        let run = Fcfs.run(&processes).unwrap();
        let order: Vec<&str> = run.intervals.iter().map(|i| i.pid.as_str()).collect();
        // Not alphabetical, not by burst: input order
        assert_eq!(order, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_idle_gap() {
        let processes = vec![Process::new("P1", 0, 2), Process::new("P2", 6, 3)];
        let run = Fcfs.run(&processes).unwrap();
        assert_eq!(run.intervals[1].start, 6);
        assert_eq!(run.idle_time(), 4);
        assert_eq!(run.makespan(), 9);
    }

    #[test]
    fn test_first_arrival_after_zero() {
        let processes = vec![Process::new("P1", 3, 2)];
        let run = Fcfs.run(&processes).unwrap();
        assert_eq!(run.intervals, vec![ExecutionInterval::new("P1", 3, 2)]);
    }

    #[test]
    fn test_start_order_follows_arrival() {
        let processes = vec![
            Process::new("P1", 7, 1),
            Process::new("P2", 2, 3),
            Process::new("P3", 4, 2),
            Process::new("P4", 2, 1),
        ];
        let run = Fcfs.run(&processes).unwrap();
        let order: Vec<&str> = run.intervals.iter().map(|i| i.pid.as_str()).collect();
        assert_eq!(order, vec!["P2", "P4", "P3", "P1"]);
        assert_eq!(run.interval_count(), processes.len());
    }
}
