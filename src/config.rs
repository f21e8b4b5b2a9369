//! Simulation configuration.
//!
//! A `SimulationConfig` bundles everything one comparison run needs: the
//! process set, the Round-Robin quantum, and which algorithms to run.
//! It can be built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "processes": [
//!     { "id": "P1", "arrival": 0, "burst": 5 },
//!     { "id": "P2", "arrival": 1, "burst": 3 }
//!   ],
//!   "quantum": 2,
//!   "algorithms": ["fcfs", "round_robin"]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Algorithm, Process};
use crate::scheduler::Comparison;
use crate::validation::{validate_process_count, validate_processes, validate_quantum};

/// Default Round-Robin time quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

fn default_algorithms() -> Vec<Algorithm> {
    Algorithm::ALL.to_vec()
}

/// Input container for a simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Round-Robin time quantum.
    #[serde(default = "default_quantum")]
    pub quantum: i64,
    /// Algorithms to run, in report order.
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<Algorithm>,
    /// Upper bound on the number of processes. `None` = unbounded.
    #[serde(default)]
    pub max_processes: Option<usize>,
}

impl SimulationConfig {
    /// Creates a config for `processes` with default quantum and all algorithms.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            quantum: DEFAULT_QUANTUM,
            algorithms: default_algorithms(),
            max_processes: None,
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Restricts the run to the given algorithms.
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Caps the number of processes.
    pub fn with_max_processes(mut self, max: usize) -> Self {
        self.max_processes = Some(max);
        self
    }

    /// Parses a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Checks the whole config, collecting every problem.
    ///
    /// The quantum is only checked when Round-Robin is requested.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if let Err(mut e) = validate_processes(&self.processes) {
            errors.append(&mut e);
        }
        if let Some(max) = self.max_processes {
            if let Err(mut e) = validate_process_count(&self.processes, max) {
                errors.append(&mut e);
            }
        }
        if self.algorithms.contains(&Algorithm::RoundRobin) {
            if let Err(mut e) = validate_quantum(self.quantum) {
                errors.append(&mut e);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors))
        }
    }

    /// Validates and runs every configured algorithm.
    pub fn run(&self) -> Result<Comparison> {
        self.validate()?;
        Comparison::run_algorithms(&self.processes, &self.algorithms, self.quantum)
    }
}
