//! Random process-set generation.
//!
//! Produces reproducible workloads for demos and property tests. The same
//! seed always yields the same processes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::models::Process;

/// Builder for seeded random process sets.
///
/// # Example
///
/// ```
/// use cpu_sched::workload::WorkloadGenerator;
///
/// let processes = WorkloadGenerator::new(5)
///     .with_burst_range(2, 4)
///     .with_seed(7)
///     .generate();
/// assert_eq!(processes.len(), 5);
/// assert!(processes.iter().all(|p| (2..=4).contains(&p.burst())));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    min_arrival: i64,
    max_arrival: i64,
    min_burst: i64,
    max_burst: i64,
    seed: u64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes (arrivals 0..=10, bursts 1..=10).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            min_arrival: 0,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            seed: 0,
        }
    }

    /// Sets the inclusive arrival range. Negative bounds are clamped to 0.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        self.min_arrival = min.max(0);
        self.max_arrival = max.max(self.min_arrival);
        self
    }

    /// Sets the inclusive burst range. Bounds below 1 are clamped to 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst = min.max(1);
        self.max_burst = max.max(self.min_burst);
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates processes named `P1..Pn`, in generation (not arrival) order.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        self.generate_with(&mut rng)
    }

    /// Generates processes using a caller-supplied RNG.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|i| {
                Process::new(
                    format!("P{i}"),
                    rng.random_range(self.min_arrival..=self.max_arrival),
                    rng.random_range(self.min_burst..=self.max_burst),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;

    #[test]
    fn test_deterministic() {
        let a = WorkloadGenerator::new(8).with_seed(42).generate();
        let b = WorkloadGenerator::new(8).with_seed(42).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ranges_respected() {
        let processes = WorkloadGenerator::new(50)
            .with_arrival_range(5, 9)
            .with_burst_range(3, 3)
            .with_seed(1)
            .generate();
        for p in &processes {
            assert!((5..=9).contains(&p.arrival()));
            assert_eq!(p.burst(), 3);
        }
    }

    #[test]
    fn test_generated_sets_are_valid() {
        for seed in 0..20 {
            let processes = WorkloadGenerator::new(10)
                .with_arrival_range(-5, 3)
                .with_burst_range(0, 4)
                .with_seed(seed)
                .generate();
            assert!(validate_processes(&processes).is_ok());
        }
    }

    #[test]
    fn test_ids() {
        let processes = WorkloadGenerator::new(3).generate();
        let ids: Vec<&str> = processes.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_zero_count() {
        assert!(WorkloadGenerator::new(0).generate().is_empty());
    }
}
