//! Change request model.
//!
//! A change request is a faculty-initiated proposal against one existing
//! assignment: either a cancellation or a swap to a new day/time (and
//! optionally a new room). Requests are never auto-approved; the
//! scheduler resolves them, and resolution is terminal:
//!
//! ```text
//! Pending -> Approved
//! Pending -> Rejected
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{TimeSlot, Weekday};

/// A swap or cancellation proposal against one assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRequest {
    /// Unique request identifier.
    pub id: String,
    /// Requesting faculty member (Faculty id).
    pub faculty_id: String,
    /// Kind of change proposed.
    pub kind: ChangeKind,
    /// The assignment this request targets.
    pub assignment_id: String,
    /// Proposed destination. Required for `Swap`, ignored for `Cancel`.
    pub to_slot: Option<SlotTarget>,
    /// Free-text justification.
    pub reason: String,
    /// Resolution state.
    pub status: RequestStatus,
}

/// Kind of change a request proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    /// Relocate the assignment to a new day/time (and optionally room).
    Swap,
    /// Remove the assignment from the schedule.
    Cancel,
}

/// Resolution state of a change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Awaiting scheduler resolution.
    Pending,
    /// Accepted; the proposed change was applied. Terminal.
    Approved,
    /// Declined; the schedule is unchanged. Terminal.
    Rejected,
}

/// Proposed destination cell for a swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotTarget {
    /// Destination day.
    pub day: Weekday,
    /// Destination time slot.
    pub time_slot: TimeSlot,
    /// Destination room. `None` keeps the assignment's current room.
    pub room_id: Option<String>,
}

/// Attempted transition out of a terminal request state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("request is already {from:?}; only pending requests can be resolved")]
pub struct InvalidTransition {
    /// The terminal state the request was in.
    pub from: RequestStatus,
}

impl ChangeRequest {
    /// Creates a pending swap request.
    pub fn swap(
        id: impl Into<String>,
        faculty_id: impl Into<String>,
        assignment_id: impl Into<String>,
        to_slot: SlotTarget,
    ) -> Self {
        Self {
            id: id.into(),
            faculty_id: faculty_id.into(),
            kind: ChangeKind::Swap,
            assignment_id: assignment_id.into(),
            to_slot: Some(to_slot),
            reason: String::new(),
            status: RequestStatus::Pending,
        }
    }

    /// Creates a pending cancellation request.
    pub fn cancel(
        id: impl Into<String>,
        faculty_id: impl Into<String>,
        assignment_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            faculty_id: faculty_id.into(),
            kind: ChangeKind::Cancel,
            assignment_id: assignment_id.into(),
            to_slot: None,
            reason: String::new(),
            status: RequestStatus::Pending,
        }
    }

    /// Sets the justification text.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Whether this request is still awaiting resolution.
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Marks the request approved. Fails unless the request is pending.
    pub fn approve(&mut self) -> Result<(), InvalidTransition> {
        self.transition(RequestStatus::Approved)
    }

    /// Marks the request rejected. Fails unless the request is pending.
    pub fn reject(&mut self) -> Result<(), InvalidTransition> {
        self.transition(RequestStatus::Rejected)
    }

    fn transition(&mut self, to: RequestStatus) -> Result<(), InvalidTransition> {
        if self.status != RequestStatus::Pending {
            return Err(InvalidTransition { from: self.status });
        }
        self.status = to;
        Ok(())
    }
}
