//! Input validation for process sets.
//!
//! Checks structural integrity of a process set before scheduling. Detects:
//! - Empty process sets
//! - Empty or duplicate IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive Round-Robin quanta
//! - Process sets whose schedule would run past `i64::MAX`
//!
//! All problems are collected, not just the first one, so a caller can
//! report every bad field in one pass.

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessSet,
    /// A process has an empty ID.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has burst time <= 0.
    NonPositiveBurst,
    /// A process has arrival time < 0.
    NegativeArrival,
    /// Round-Robin quantum <= 0.
    NonPositiveQuantum,
    /// More processes than the configured limit.
    TooManyProcesses,
    /// Latest arrival plus total burst does not fit in an `i64` tick.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. No empty IDs
/// 3. No duplicate IDs
/// 4. All arrival times >= 0
/// 5. All burst times > 0
/// 6. Latest arrival + sum of bursts fits in `i64`
///
/// No schedule of the set can end later than the latest arrival plus the
/// total burst, so passing check 6 keeps every clock value in range.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process set is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if p.id().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Process ID must not be empty",
            ));
        } else if !ids.insert(p.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id()),
            ));
        }

        if p.arrival() < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id(),
                    p.arrival()
                ),
            ));
        }

        if p.burst() <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id(),
                    p.burst()
                ),
            ));
        }
    }

    if schedule_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time exceeds the representable range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any completion time, or `None` on overflow.
fn schedule_horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes.iter().map(|p| p.arrival().max(0)).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |t, p| t.checked_add(p.burst().max(0)))
}

/// Validates a Round-Robin time quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum > 0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be positive, got {quantum}"),
        )])
    }
}

/// Validates that a process set does not exceed `max` entries.
pub fn validate_process_count(processes: &[Process], max: usize) -> ValidationResult {
    if processes.len() <= max {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::TooManyProcesses,
            format!(
                "{} processes supplied, at most {max} allowed",
                processes.len()
            ),
        )])
    }
}
