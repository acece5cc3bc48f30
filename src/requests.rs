//! Change request processing.
//!
//! Applies a faculty swap/cancel proposal to an assignment set and
//! screens the result: a change that would introduce a conflict that
//! did not exist before is rejected with the offending assignment ids,
//! and the approval workflow decides whether to override. The processor
//! never resolves the request itself; resolution stays with the caller.

use thiserror::Error;
use tracing::{debug, warn};

use crate::conflict::{compute_conflicts, conflicting_ids};
use crate::models::{Assignment, ChangeKind, ChangeRequest};

/// Why a change request could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangeError {
    /// The targeted assignment no longer exists.
    #[error("assignment not found: {id}")]
    NotFound { id: String },

    /// A swap request carried no destination slot.
    #[error("swap request {id} has no destination slot")]
    MissingTarget { id: String },

    /// The relocation introduces conflicts that did not exist before.
    #[error("change introduces new conflicts involving: {}", ids.join(", "))]
    NewConflicts {
        /// Newly conflicting assignment ids, sorted.
        ids: Vec<String>,
    },
}

/// Applies a change request to an assignment set.
///
/// - `Cancel` removes exactly the targeted assignment.
/// - `Swap` relocates the targeted assignment to the request's
///   destination day/time, keeping the current room when the target
///   names none.
///
/// The result is always re-annotated by [`compute_conflicts`]. A swap
/// whose result contains a conflict that was not present in the input
/// fails with [`ChangeError::NewConflicts`]; pre-existing conflicts do
/// not block a change. Returns the candidate assignment set on success;
/// installing it (and resolving the request) is the caller's decision.
pub fn apply_change_request(
    assignments: &[Assignment],
    request: &ChangeRequest,
) -> Result<Vec<Assignment>, ChangeError> {
    let candidate = build_candidate(assignments, request)?;

    let before = conflicting_ids(assignments);
    let after = conflicting_ids(&candidate);
    let new: Vec<String> = after.difference(&before).cloned().collect();
    if !new.is_empty() {
        warn!(
            request_id = %request.id,
            assignment_id = %request.assignment_id,
            conflicting = ?new,
            "change request rejected"
        );
        return Err(ChangeError::NewConflicts { ids: new });
    }

    debug!(
        request_id = %request.id,
        kind = ?request.kind,
        assignment_id = %request.assignment_id,
        "change request applied"
    );
    Ok(compute_conflicts(&candidate))
}

/// Applies a change request without new-conflict screening.
///
/// Used by the approval workflow to override a rejected swap: the
/// change is applied even if it double-books, and the resulting
/// conflicts are annotated for display. `NotFound` and `MissingTarget`
/// still apply.
pub fn force_apply(
    assignments: &[Assignment],
    request: &ChangeRequest,
) -> Result<Vec<Assignment>, ChangeError> {
    let candidate = build_candidate(assignments, request)?;
    warn!(
        request_id = %request.id,
        assignment_id = %request.assignment_id,
        "change request force-applied without conflict screening"
    );
    Ok(compute_conflicts(&candidate))
}

fn build_candidate(
    assignments: &[Assignment],
    request: &ChangeRequest,
) -> Result<Vec<Assignment>, ChangeError> {
    let index = assignments
        .iter()
        .position(|a| a.id == request.assignment_id)
        .ok_or_else(|| ChangeError::NotFound {
            id: request.assignment_id.clone(),
        })?;

    match request.kind {
        ChangeKind::Cancel => {
            let mut rest = assignments.to_vec();
            rest.remove(index);
            Ok(rest)
        }
        ChangeKind::Swap => {
            let target = request
                .to_slot
                .as_ref()
                .ok_or_else(|| ChangeError::MissingTarget {
                    id: request.id.clone(),
                })?;

            let mut moved = assignments.to_vec();
            let a = &mut moved[index];
            a.day = target.day;
            a.time_slot = target.time_slot;
            if let Some(room_id) = &target.room_id {
                a.room_id = room_id.clone();
            }
            Ok(moved)
        }
    }
}
