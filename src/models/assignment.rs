//! Assignment model.
//!
//! An assignment is one scheduled class occurrence: a subject taught by
//! a faculty member, in a room, for a student batch, at a fixed weekly
//! day/time slot.
//!
//! `status` and `conflict_reason` are display state derived by the
//! conflict engine: administrative input may set Approved or Pending,
//! but the engine recomputes both fields on every pass.

use serde::{Deserialize, Serialize};

use super::{TimeSlot, Weekday};

/// One scheduled class occurrence in the weekly timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique assignment identifier.
    pub id: String,
    /// Subject name (e.g. "Data Structures").
    pub subject: String,
    /// Teaching faculty member (Faculty id).
    pub faculty_id: String,
    /// Assigned room (Room id).
    pub room_id: String,
    /// Student group identifier (e.g. "CS-A").
    pub batch: String,
    /// Day of the week.
    pub day: Weekday,
    /// Time slot on that day.
    pub time_slot: TimeSlot,
    /// Derived display status.
    pub status: AssignmentStatus,
    /// Why this assignment conflicts. Set only when `status` is `Conflict`.
    pub conflict_reason: Option<String>,
}

/// Display status of an assignment.
///
/// `Approved` and `Pending` are administrative; `Conflict` is assigned
/// by the engine and takes priority over both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentStatus {
    /// Confirmed by the scheduler.
    Approved,
    /// Awaiting scheduler confirmation.
    Pending,
    /// Violates a hard constraint (room/faculty/batch double-booking).
    Conflict,
}

impl Assignment {
    /// Creates a new pending assignment.
    pub fn new(
        id: impl Into<String>,
        subject: impl Into<String>,
        faculty_id: impl Into<String>,
        room_id: impl Into<String>,
        batch: impl Into<String>,
        day: Weekday,
        time_slot: TimeSlot,
    ) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            faculty_id: faculty_id.into(),
            room_id: room_id.into(),
            batch: batch.into(),
            day,
            time_slot,
            status: AssignmentStatus::Pending,
            conflict_reason: None,
        }
    }

    /// Sets the administrative status.
    pub fn with_status(mut self, status: AssignmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Class duration in minutes, derived from the time slot span.
    #[inline]
    pub fn duration_min(&self) -> i64 {
        self.time_slot.duration_min()
    }

    /// Whether this assignment occupies the given grid cell.
    pub fn occupies(&self, day: Weekday, time_slot: TimeSlot) -> bool {
        self.day == day && self.time_slot == time_slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_builder() {
        let a = Assignment::new(
            "A1",
            "Data Structures",
            "F1",
            "LH-101",
            "CS-A",
            Weekday::Monday,
            TimeSlot::hour(9),
        );

        assert_eq!(a.id, "A1");
        assert_eq!(a.subject, "Data Structures");
        assert_eq!(a.faculty_id, "F1");
        assert_eq!(a.room_id, "LH-101");
        assert_eq!(a.batch, "CS-A");
        assert_eq!(a.status, AssignmentStatus::Pending);
        assert!(a.conflict_reason.is_none());
        assert_eq!(a.duration_min(), 60);
    }

    #[test]
    fn test_assignment_with_status() {
        let a = Assignment::new(
            "A1",
            "Algorithms",
            "F1",
            "LH-101",
            "CS-A",
            Weekday::Tuesday,
            TimeSlot::hour(10),
        )
        .with_status(AssignmentStatus::Approved);
        assert_eq!(a.status, AssignmentStatus::Approved);
    }

    #[test]
    fn test_assignment_occupies() {
        let a = Assignment::new(
            "A1",
            "Algorithms",
            "F1",
            "LH-101",
            "CS-A",
            Weekday::Tuesday,
            TimeSlot::hour(10),
        );
        assert!(a.occupies(Weekday::Tuesday, TimeSlot::hour(10)));
        assert!(!a.occupies(Weekday::Tuesday, TimeSlot::hour(11)));
        assert!(!a.occupies(Weekday::Wednesday, TimeSlot::hour(10)));
    }

    #[test]
    fn test_assignment_serde_roundtrip() {
        let a = Assignment::new(
            "A1",
            "Web Development",
            "F3",
            "LAB-CS-01",
            "CS-B",
            Weekday::Monday,
            TimeSlot::hour(10),
        );
        let json = serde_json::to_string(&a).unwrap();
        let back: Assignment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
