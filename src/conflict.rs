//! Hard-constraint conflict detection over the weekly timetable.
//!
//! Two distinct assignments conflict when they share any of the three
//! composite keys at the same grid cell:
//!
//! - (day, time slot, room): room double-booked
//! - (day, time slot, faculty): faculty double-booked
//! - (day, time slot, batch): batch double-booked
//!
//! Detection is three hash-aggregation passes, O(n) total. Output is
//! deterministic: dimensions are always reported in room, faculty,
//! batch order, so repeated runs over the same input are byte-identical
//! (callers cache and diff the annotated schedule).

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::models::{Assignment, AssignmentStatus, TimeSlot, Weekday};

/// A hard-constraint dimension an assignment can conflict on.
///
/// Ordering is the fixed reporting order for combined reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConflictDimension {
    /// Two assignments share a room at the same day/slot.
    Room,
    /// One faculty member is booked twice at the same day/slot.
    Faculty,
    /// One student batch is booked twice at the same day/slot.
    Batch,
}

impl ConflictDimension {
    /// All dimensions in reporting order.
    pub const ALL: [ConflictDimension; 3] = [
        ConflictDimension::Room,
        ConflictDimension::Faculty,
        ConflictDimension::Batch,
    ];

    /// Human-readable reason fragment for this dimension.
    pub fn reason(&self) -> &'static str {
        match self {
            ConflictDimension::Room => "Room double-booked",
            ConflictDimension::Faculty => "Faculty double-booked",
            ConflictDimension::Batch => "Batch double-booked",
        }
    }

    fn key_of<'a>(&self, a: &'a Assignment) -> &'a str {
        match self {
            ConflictDimension::Room => &a.room_id,
            ConflictDimension::Faculty => &a.faculty_id,
            ConflictDimension::Batch => &a.batch,
        }
    }
}

/// Headline counts over an annotated assignment set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScheduleStats {
    /// Total assignments.
    pub total: usize,
    /// Assignments with approved status.
    pub approved: usize,
    /// Assignments awaiting approval.
    pub pending: usize,
    /// Assignments violating a hard constraint.
    pub conflicts: usize,
}

/// Recomputes conflict status over an assignment set.
///
/// Input `status` is treated as administrative intent only: a
/// conflict-free assignment keeps its Approved/Pending status (a stale
/// input `Conflict` normalizes to Pending), while any assignment in a
/// conflicting group is demoted to `Conflict` with a combined reason
/// listing every violated dimension. Input order is preserved; calling
/// twice yields identical output.
pub fn compute_conflicts(assignments: &[Assignment]) -> Vec<Assignment> {
    // violated[i][d] = assignment i conflicts on dimension d
    let mut violated = vec![[false; 3]; assignments.len()];

    for (d, dim) in ConflictDimension::ALL.iter().enumerate() {
        let mut groups: HashMap<(Weekday, TimeSlot, &str), Vec<usize>> = HashMap::new();
        for (i, a) in assignments.iter().enumerate() {
            groups
                .entry((a.day, a.time_slot, dim.key_of(a)))
                .or_default()
                .push(i);
        }
        for members in groups.values() {
            if members.len() > 1 {
                for &i in members {
                    violated[i][d] = true;
                }
            }
        }
    }

    let out: Vec<Assignment> = assignments
        .iter()
        .zip(&violated)
        .map(|(a, flags)| {
            let mut a = a.clone();
            if flags.iter().any(|&v| v) {
                a.status = AssignmentStatus::Conflict;
                a.conflict_reason = Some(combined_reason(flags));
            } else {
                // Conflict is never an administrative input state.
                if a.status == AssignmentStatus::Conflict {
                    a.status = AssignmentStatus::Pending;
                }
                a.conflict_reason = None;
            }
            a
        })
        .collect();

    let conflicts = out
        .iter()
        .filter(|a| a.status == AssignmentStatus::Conflict)
        .count();
    debug!(total = out.len(), conflicts, "conflict pass complete");

    out
}

/// Ids of all assignments that would be flagged as conflicting.
///
/// Sorted set, used by change-request screening to diff before/after
/// conflict membership.
pub fn conflicting_ids(assignments: &[Assignment]) -> BTreeSet<String> {
    compute_conflicts(assignments)
        .into_iter()
        .filter(|a| a.status == AssignmentStatus::Conflict)
        .map(|a| a.id)
        .collect()
}

/// Computes headline counts over an already-annotated assignment set.
pub fn schedule_stats(assignments: &[Assignment]) -> ScheduleStats {
    let mut stats = ScheduleStats {
        total: assignments.len(),
        ..Default::default()
    };
    for a in assignments {
        match a.status {
            AssignmentStatus::Approved => stats.approved += 1,
            AssignmentStatus::Pending => stats.pending += 1,
            AssignmentStatus::Conflict => stats.conflicts += 1,
        }
    }
    stats
}

fn combined_reason(flags: &[bool; 3]) -> String {
    let parts: Vec<&str> = ConflictDimension::ALL
        .iter()
        .zip(flags)
        .filter(|(_, &v)| v)
        .map(|(dim, _)| dim.reason())
        .collect();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignment;

    fn assignment(
        id: &str,
        faculty: &str,
        room: &str,
        batch: &str,
        day: Weekday,
        hour: i64,
    ) -> Assignment {
        Assignment::new(id, "Subject", faculty, room, batch, day, TimeSlot::hour(hour))
    }

    #[test]
    fn test_no_conflicts_keeps_admin_status() {
        let input = vec![
            assignment("A", "F1", "LH-101", "CS-A", Weekday::Monday, 9)
                .with_status(AssignmentStatus::Approved),
            assignment("B", "F2", "LH-102", "CS-B", Weekday::Monday, 9),
        ];
        let out = compute_conflicts(&input);
        assert_eq!(out[0].status, AssignmentStatus::Approved);
        assert_eq!(out[1].status, AssignmentStatus::Pending);
        assert!(out.iter().all(|a| a.conflict_reason.is_none()));
    }

    #[test]
    fn test_room_double_booking_flags_both() {
        let input = vec![
            assignment("A", "F1", "LH-101", "CS-A", Weekday::Monday, 10),
            assignment("B", "F2", "LH-101", "CS-B", Weekday::Monday, 10),
            assignment("C", "F3", "SR-205", "CS-C", Weekday::Monday, 10),
        ];
        let out = compute_conflicts(&input);
        assert_eq!(out[0].status, AssignmentStatus::Conflict);
        assert_eq!(out[1].status, AssignmentStatus::Conflict);
        assert_eq!(out[0].conflict_reason.as_deref(), Some("Room double-booked"));
        assert_eq!(out[1].conflict_reason.as_deref(), Some("Room double-booked"));
        // Bystander untouched
        assert_eq!(out[2].status, AssignmentStatus::Pending);
        assert!(out[2].conflict_reason.is_none());
    }

    #[test]
    fn test_same_room_different_cell_is_fine() {
        let input = vec![
            assignment("A", "F1", "LH-101", "CS-A", Weekday::Monday, 9),
            assignment("B", "F2", "LH-101", "CS-B", Weekday::Monday, 10),
            assignment("C", "F3", "LH-101", "CS-C", Weekday::Tuesday, 9),
        ];
        let out = compute_conflicts(&input);
        assert!(out.iter().all(|a| a.status == AssignmentStatus::Pending));
    }

    #[test]
    fn test_combined_reason_ordering() {
        // A conflicts with B on room and with C on faculty; reason lists
        // room before faculty regardless of detection order.
        let input = vec![
            assignment("A", "F-smith", "LH-101", "CS-A", Weekday::Monday, 10),
            assignment("B", "F-brown", "LH-101", "CS-B", Weekday::Monday, 10),
            assignment("C", "F-smith", "SR-205", "CS-C", Weekday::Monday, 10),
        ];
        let out = compute_conflicts(&input);
        assert_eq!(
            out[0].conflict_reason.as_deref(),
            Some("Room double-booked; Faculty double-booked")
        );
        assert_eq!(out[1].conflict_reason.as_deref(), Some("Room double-booked"));
        assert_eq!(out[2].conflict_reason.as_deref(), Some("Faculty double-booked"));
        assert!(out.iter().all(|a| a.status == AssignmentStatus::Conflict));
    }

    #[test]
    fn test_batch_double_booking() {
        let input = vec![
            assignment("A", "F1", "LH-101", "CS-A", Weekday::Friday, 14),
            assignment("B", "F2", "SR-205", "CS-A", Weekday::Friday, 14),
        ];
        let out = compute_conflicts(&input);
        assert_eq!(out[0].conflict_reason.as_deref(), Some("Batch double-booked"));
        assert_eq!(out[1].conflict_reason.as_deref(), Some("Batch double-booked"));
    }

    #[test]
    fn test_idempotence() {
        let input = vec![
            assignment("A", "F1", "LH-101", "CS-A", Weekday::Monday, 10)
                .with_status(AssignmentStatus::Approved),
            assignment("B", "F2", "LH-101", "CS-B", Weekday::Monday, 10),
            assignment("C", "F3", "SR-205", "CS-C", Weekday::Tuesday, 11),
        ];
        let once = compute_conflicts(&input);
        let twice = compute_conflicts(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_stale_conflict_status_normalizes_to_pending() {
        let input = vec![
            assignment("A", "F1", "LH-101", "CS-A", Weekday::Monday, 9)
                .with_status(AssignmentStatus::Conflict),
        ];
        let out = compute_conflicts(&input);
        assert_eq!(out[0].status, AssignmentStatus::Pending);
        assert!(out[0].conflict_reason.is_none());
    }

    #[test]
    fn test_conflict_overrides_approved_status() {
        let input = vec![
            assignment("A", "F1", "LH-101", "CS-A", Weekday::Monday, 9)
                .with_status(AssignmentStatus::Approved),
            assignment("B", "F2", "LH-101", "CS-B", Weekday::Monday, 9)
                .with_status(AssignmentStatus::Approved),
        ];
        let out = compute_conflicts(&input);
        assert!(out.iter().all(|a| a.status == AssignmentStatus::Conflict));
    }

    #[test]
    fn test_three_way_group_flags_all() {
        let input = vec![
            assignment("A", "F1", "LH-101", "CS-A", Weekday::Monday, 9),
            assignment("B", "F2", "LH-101", "CS-B", Weekday::Monday, 9),
            assignment("C", "F3", "LH-101", "CS-C", Weekday::Monday, 9),
        ];
        let out = compute_conflicts(&input);
        assert!(out.iter().all(|a| a.status == AssignmentStatus::Conflict));
    }

    #[test]
    fn test_conflicting_ids_sorted() {
        let input = vec![
            assignment("Z", "F1", "LH-101", "CS-A", Weekday::Monday, 9),
            assignment("A", "F2", "LH-101", "CS-B", Weekday::Monday, 9),
        ];
        let ids: Vec<String> = conflicting_ids(&input).into_iter().collect();
        assert_eq!(ids, vec!["A".to_string(), "Z".to_string()]);
    }

    #[test]
    fn test_schedule_stats() {
        let input = vec![
            assignment("A", "F1", "LH-101", "CS-A", Weekday::Monday, 9)
                .with_status(AssignmentStatus::Approved),
            assignment("B", "F2", "LH-102", "CS-B", Weekday::Monday, 9),
            assignment("C", "F3", "LH-103", "CS-C", Weekday::Monday, 10),
            assignment("D", "F3", "LH-104", "CS-D", Weekday::Monday, 10),
        ];
        let stats = schedule_stats(&compute_conflicts(&input));
        assert_eq!(stats.total, 4);
        assert_eq!(stats.approved, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.conflicts, 2); // C and D share faculty F3
    }

    #[test]
    fn test_empty_input() {
        assert!(compute_conflicts(&[]).is_empty());
        assert_eq!(schedule_stats(&[]), ScheduleStats::default());
    }
}
