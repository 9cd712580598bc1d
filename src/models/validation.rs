//! Per-field validation reporting for request inputs.
//!
//! Inputs are validated in full before any persistence begins; every failed
//! check is collected as a `FieldViolation` so callers see all problems in
//! one response rather than the first one hit during traversal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One failed check on a named input field.
///
/// Nested fields use an index path, e.g. `exercise_logs[1].set_logs[0].rpe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Accumulator for field violations.
#[derive(Debug, Default)]
pub struct Violations {
    items: Vec<FieldViolation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.items.push(FieldViolation::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `Ok(())` when no violation was recorded.
    pub fn into_result(self) -> Result<(), Vec<FieldViolation>> {
        if self.items.is_empty() {
            Ok(())
        } else {
            Err(self.items)
        }
    }
}
