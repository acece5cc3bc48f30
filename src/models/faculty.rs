//! Faculty model.
//!
//! Faculty records are administrative reference data, managed
//! independently of the schedule. The weekly teaching load is *not*
//! stored here: it is a materialized view over the assignment set and
//! is recomputed on demand (see `load::compute_faculty_load`), so it
//! can never go stale against the schedule.

use serde::{Deserialize, Serialize};

/// A faculty member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique faculty identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Department name.
    pub department: String,
    /// Maximum weekly teaching load in hours (soft constraint).
    pub max_weekly_load_hours: i64,
    /// Subjects this faculty member teaches.
    pub subjects: Vec<String>,
    /// Employment status.
    pub status: FacultyStatus,
}

/// Faculty employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacultyStatus {
    Active,
    Inactive,
}

impl Faculty {
    /// Creates a new active faculty member.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            department: String::new(),
            max_weekly_load_hours: 0,
            subjects: Vec::new(),
            status: FacultyStatus::Active,
        }
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the maximum weekly load in hours.
    pub fn with_max_load(mut self, hours: i64) -> Self {
        self.max_weekly_load_hours = hours;
        self
    }

    /// Adds a taught subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    /// Sets the employment status.
    pub fn with_status(mut self, status: FacultyStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether this faculty member teaches the given subject.
    pub fn teaches(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }

    /// Whether this faculty member is active.
    pub fn is_active(&self) -> bool {
        self.status == FacultyStatus::Active
    }
}
