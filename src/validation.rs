//! Input validation for process attributes.
//!
//! Checks every input row before the registry accepts the set. Detects:
//! - Non-positive burst times
//! - Negative arrival times
//! - Power hints outside the supported classes
//!
//! All rows are checked and all violations reported together; out-of-range
//! values are rejected, never clamped.

use std::fmt;
use std::ops::RangeInclusive;

use crate::models::ProcessAttrs;

/// Power draw classes accepted by the simulator.
pub const POWER_HINT_RANGE: RangeInclusive<i64> = 1..=3;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description naming the offending process.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Arrival time is negative.
    NegativeArrival,
    /// Power hint outside the accepted classes.
    PowerHintOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
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

/// Validates the input rows for one run.
///
/// `rows` are in input order; the process named in each message uses the
/// 1-based id the registry would assign.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_rows(rows: &[ProcessAttrs]) -> ValidationResult {
    let mut errors = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let pid = index + 1;

        if row.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process P{pid} has non-positive burst time: {}",
                    row.burst_time
                ),
            ));
        }

        if row.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process P{pid} has negative arrival time: {}",
                    row.arrival_time
                ),
            ));
        }

        if !POWER_HINT_RANGE.contains(&row.power_hint) {
            errors.push(ValidationError::new(
                ValidationErrorKind::PowerHintOutOfRange,
                format!(
                    "Process P{pid} has power hint {} outside {}..={}",
                    row.power_hint,
                    POWER_HINT_RANGE.start(),
                    POWER_HINT_RANGE.end()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
