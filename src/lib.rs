//! CPU-scheduling simulator.
//!
//! Simulates classic single-processor scheduling disciplines over a static
//! process set and reports when each process ran and how long it waited.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ExecutionInterval`, `RunResult`, `Algorithm`
//! - **`scheduler`**: `Fcfs`, `Sjf`, `RoundRobin`, run `Metrics`, and `Comparison`
//! - **`validation`**: Input integrity checks (empty sets, duplicate IDs, bad times)
//! - **`config`**: JSON-loadable `SimulationConfig`
//! - **`workload`**: Seeded random process sets
//! - **`report`**: Plain-text tables and timelines
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::scheduler::{compute_metrics, run_round_robin};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//!     Process::new("P3", 2, 8),
//! ];
//! let run = run_round_robin(&processes, 2).unwrap();
//! let metrics = compute_metrics(&processes, &run).unwrap();
//! assert_eq!(metrics.for_process("P1").unwrap().waiting, 7);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Error, Result};
