//! Faculty load accounting.
//!
//! The weekly teaching load is a materialized view over the assignment
//! set: the sum of assignment durations referencing a faculty id. It is
//! recomputed on every call and never persisted, so it cannot go stale
//! against the schedule. Exceeding the declared maximum is a soft
//! constraint: it raises the `overloaded` flag but never demotes an
//! assignment to conflict status.

use tracing::warn;

use crate::models::{Assignment, Faculty};

/// Derived weekly load for one faculty member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Faculty this report describes.
    pub faculty_id: String,
    /// Sum of assignment durations, in minutes.
    pub current_load_min: i64,
    /// Declared maximum weekly load, in minutes.
    pub max_load_min: i64,
    /// Whether the current load strictly exceeds the maximum.
    pub overloaded: bool,
}

impl LoadReport {
    /// Current load in hours.
    pub fn current_load_hours(&self) -> f64 {
        self.current_load_min as f64 / 60.0
    }

    /// Remaining capacity in minutes (zero when overloaded).
    pub fn headroom_min(&self) -> i64 {
        (self.max_load_min - self.current_load_min).max(0)
    }
}

/// Computes the weekly load of one faculty member over an assignment set.
///
/// Pure aggregation: sums the slot-derived duration of every assignment
/// whose `faculty_id` matches. `overloaded` uses a strict comparison
/// (a load exactly at the maximum is fine).
pub fn compute_faculty_load(faculty: &Faculty, assignments: &[Assignment]) -> LoadReport {
    let current_load_min: i64 = assignments
        .iter()
        .filter(|a| a.faculty_id == faculty.id)
        .map(|a| a.duration_min())
        .sum();

    let max_load_min = faculty.max_weekly_load_hours * 60;
    let overloaded = current_load_min > max_load_min;
    if overloaded {
        warn!(
            faculty_id = %faculty.id,
            current_load_min,
            max_load_min,
            "faculty over declared weekly load"
        );
    }

    LoadReport {
        faculty_id: faculty.id.clone(),
        current_load_min,
        max_load_min,
        overloaded,
    }
}

/// Computes load reports for every faculty member, in input order.
pub fn load_reports(faculties: &[Faculty], assignments: &[Assignment]) -> Vec<LoadReport> {
    faculties
        .iter()
        .map(|f| compute_faculty_load(f, assignments))
        .collect()
}
