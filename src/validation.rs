//! Schedule data integrity validation.
//!
//! Checks an externally assembled schedule before the engine runs over
//! it. An assignment referencing a nonexistent faculty or room would
//! make any conflict/no-conflict verdict misleading, so the engine
//! fails fast on these instead of computing one. Detects:
//! - Duplicate IDs (assignments, faculty, rooms)
//! - Orphaned faculty/room references
//! - Degenerate time slots (non-positive span)
//!
//! All issues are accumulated and reported together.

use std::collections::HashSet;

use crate::models::{Assignment, Faculty, Room};

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
    /// Two entities share the same ID.
    DuplicateId,
    /// An assignment references a faculty member that doesn't exist.
    UnknownFaculty,
    /// An assignment references a room that doesn't exist.
    UnknownRoom,
    /// A time slot has zero or negative span.
    EmptyTimeSlot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a schedule against its reference data.
///
/// Checks:
/// 1. No duplicate faculty IDs
/// 2. No duplicate room IDs
/// 3. No duplicate assignment IDs
/// 4. Every assignment's faculty reference resolves
/// 5. Every assignment's room reference resolves
/// 6. Every assignment's time slot has positive span
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_schedule(
    assignments: &[Assignment],
    faculties: &[Faculty],
    rooms: &[Room],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut faculty_ids = HashSet::new();
    for f in faculties {
        if !faculty_ids.insert(f.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate faculty ID: {}", f.id),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    let mut assignment_ids = HashSet::new();
    for a in assignments {
        if !assignment_ids.insert(a.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate assignment ID: {}", a.id),
            ));
        }

        if !faculty_ids.contains(a.faculty_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownFaculty,
                format!(
                    "Assignment '{}' references unknown faculty '{}'",
                    a.id, a.faculty_id
                ),
            ));
        }

        if !room_ids.contains(a.room_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownRoom,
                format!(
                    "Assignment '{}' references unknown room '{}'",
                    a.id, a.room_id
                ),
            ));
        }

        if a.time_slot.duration_min() <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTimeSlot,
                format!(
                    "Assignment '{}' has a time slot with non-positive span ({})",
                    a.id, a.time_slot
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
