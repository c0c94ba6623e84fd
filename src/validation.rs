//! Input validation for process rows.
//!
//! Turns the raw rows of the process table into `ProcessRecord`s. Checks run
//! row by row in input order and stop at the first failure; no partial
//! result is ever returned.
//!
//! Per row:
//! 1. Non-empty PID
//! 2. Rows with neither time entered are skipped
//! 3. Both times entered
//! 4. Both times are integers
//! 5. `arrival >= 0`, `burst >= 1`
//! 6. Both times `<= max_time_unit`
//! 7. PID not used by an earlier row
//!
//! At least one row must survive.

use std::collections::HashSet;
use std::num::IntErrorKind;

use thiserror::Error;
use tracing::debug;

use crate::config::MAX_TIME_UNIT;
use crate::models::{ProcessInput, ProcessRecord};

/// Validation result.
pub type ValidationResult = Result<Vec<ProcessRecord>, ValidationError>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process id, when the row has one.
    pub process_id: Option<String>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// PID is empty after trimming.
    EmptyId,
    /// Exactly one of arrival/burst is entered.
    IncompleteFields,
    /// A time field is not an integer.
    NotANumber,
    /// Negative arrival or non-positive burst.
    OutOfRange,
    /// A time exceeds the configured limit.
    TooLarge,
    /// Two rows share a PID.
    DuplicateId,
    /// No row defines a process.
    NoProcesses,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, process_id: Option<&str>, message: impl Into<String>) -> Self {
        let err = Self {
            kind,
            process_id: process_id.map(str::to_string),
            message: message.into(),
        };
        debug!(kind = ?err.kind, process_id = ?err.process_id, "validation failed");
        err
    }

    fn for_process(kind: ValidationErrorKind, id: &str, detail: impl AsRef<str>) -> Self {
        Self::new(kind, Some(id), format!("Process {id}: {}", detail.as_ref()))
    }
}

/// Outcome of parsing one time field.
enum Parsed {
    Value(i64),
    NotANumber,
    Overflow(ValidationErrorKind),
}

fn parse_time(text: &str) -> Parsed {
    match text.trim().parse::<i64>() {
        Ok(v) => Parsed::Value(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Parsed::Overflow(ValidationErrorKind::TooLarge),
            IntErrorKind::NegOverflow => Parsed::Overflow(ValidationErrorKind::OutOfRange),
            _ => Parsed::NotANumber,
        },
    }
}

/// Validates process rows against the default limit (`MAX_TIME_UNIT`).
pub fn validate_processes(inputs: &[ProcessInput]) -> ValidationResult {
    validate_processes_with_limit(inputs, MAX_TIME_UNIT)
}

/// Validates process rows against `max_time_unit`.
///
/// # Returns
/// Records in input order (not yet arrival-sorted) with trimmed ids, or the
/// first error encountered.
pub fn validate_processes_with_limit(inputs: &[ProcessInput], max_time_unit: i64) -> ValidationResult {
    use ValidationErrorKind::*;

    let mut records = Vec::with_capacity(inputs.len());
    let mut seen: HashSet<&str> = HashSet::new();

    for (row, input) in inputs.iter().enumerate() {
        let id = input.id.trim();
        if id.is_empty() {
            return Err(ValidationError::new(
                EmptyId,
                None,
                format!("Process at row {}: PID cannot be empty.", row + 1),
            ));
        }

        if input.is_blank() {
            debug!(process_id = id, "skipping row without times");
            continue;
        }

        if input.arrival_unset() || input.burst_unset() {
            return Err(ValidationError::for_process(
                IncompleteFields,
                id,
                "Arrival Time and Burst Time must both be filled.",
            ));
        }

        let too_large = || {
            ValidationError::for_process(
                TooLarge,
                id,
                format!("Value too large. Times must be ≤ {max_time_unit}."),
            )
        };
        let out_of_range = || {
            ValidationError::for_process(
                OutOfRange,
                id,
                "Arrival Time must be ≥ 0 and Burst Time must be ≥ 1.",
            )
        };

        let (arrival, burst) = match (parse_time(&input.arrival), parse_time(&input.burst)) {
            (Parsed::Value(a), Parsed::Value(b)) => (a, b),
            (Parsed::NotANumber, _) | (_, Parsed::NotANumber) => {
                return Err(ValidationError::for_process(
                    NotANumber,
                    id,
                    "Arrival Time and Burst Time must be valid numbers.",
                ));
            }
            (Parsed::Overflow(OutOfRange), _) | (_, Parsed::Overflow(OutOfRange)) => {
                return Err(out_of_range());
            }
            _ => return Err(too_large()),
        };

        if arrival < 0 || burst <= 0 {
            return Err(out_of_range());
        }
        if arrival > max_time_unit || burst > max_time_unit {
            return Err(too_large());
        }

        if !seen.insert(id) {
            return Err(ValidationError::for_process(
                DuplicateId,
                id,
                "PID is already used by another process.",
            ));
        }

        records.push(ProcessRecord::new(id, arrival, burst));
    }

    if records.is_empty() {
        return Err(ValidationError::new(
            NoProcesses,
            None,
            "Please define at least one process.",
        ));
    }

    Ok(records)
}
