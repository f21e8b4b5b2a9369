//! Process model.
//!
//! A process is the unit of work handed to a scheduler: an identifier,
//! the time it becomes eligible to run, and the CPU time it needs.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, ValidationErrorKind};

/// A process to be scheduled.
///
/// Immutable once constructed: fields are only reachable through accessors,
/// and schedulers take `&[Process]` so the caller's set is never reordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    id: String,
    arrival: i64,
    burst: i64,
}

impl Process {
    /// Creates a process without checking invariants.
    ///
    /// Schedulers validate their whole input set before running, so an
    /// invalid process built here is rejected at run time.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
        }
    }

    /// Creates a process, rejecting an empty id, a negative arrival or a
    /// non-positive burst.
    pub fn try_new(id: impl Into<String>, arrival: i64, burst: i64) -> Result<Self, ValidationError> {
        let process = Self::new(id, arrival, burst);
        if process.id.is_empty() {
            return Err(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Process ID must not be empty",
            ));
        }
        if process.arrival < 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    process.id, process.arrival
                ),
            ));
        }
        if process.burst <= 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    process.id, process.burst
                ),
            ));
        }
        Ok(process)
    }

    /// Unique process identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Time at which the process becomes eligible to run.
    pub fn arrival(&self) -> i64 {
        self.arrival
    }

    /// Total CPU time required.
    pub fn burst(&self) -> i64 {
        self.burst
    }
}
