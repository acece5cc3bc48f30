//! In-memory schedule store.
//!
//! Single source of truth for the timetable: owns the faculty and room
//! reference data, the assignment set, and pending change requests. All
//! reads and writes go through store methods; conflict annotations are
//! refreshed after every mutation of the assignment set, so readers
//! never observe a torn intermediate state.
//!
//! The store is single-threaded by design. Embedding callers serialize
//! mutations (one "apply change and recompute" transaction at a time);
//! the engine functions themselves are pure and carry no internal state.
//!
//! Referential integrity is fail-fast: assignments referencing unknown
//! faculty/room ids or carrying a time slot with no positive span are
//! rejected at insert, and reference data still referenced by an
//! assignment cannot be deleted (reject-on-reference, not cascade).
//!
//! `Room::is_available` and `FacultyStatus` are advisory display state,
//! as on the administrative dashboard: the store does not gate
//! scheduling on them, so a class can be placed in a closed room or
//! kept for inactive faculty while the administrator reconciles.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::conflict::{compute_conflicts, schedule_stats, ScheduleStats};
use crate::load::{compute_faculty_load, LoadReport};
use crate::models::{
    Assignment, ChangeRequest, Faculty, InvalidTransition, RequestStatus, Room, TimeSlot, Weekday,
};
use crate::requests::{apply_change_request, force_apply, ChangeError};

/// A store operation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An entity with this id already exists.
    #[error("duplicate {entity} id: {id}")]
    DuplicateId { entity: &'static str, id: String },

    /// A lookup target does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// An assignment references reference data that does not exist.
    #[error("assignment references unknown {entity}: {id}")]
    UnknownReference { entity: &'static str, id: String },

    /// An assignment's time slot has no positive span.
    #[error("assignment {id} has a time slot with non-positive span")]
    InvalidSlot { id: String },

    /// Reference data is still referenced by the schedule.
    #[error("{entity} {id} is still referenced by {count} assignment(s)")]
    StillReferenced {
        entity: &'static str,
        id: String,
        count: usize,
    },

    /// A change request could not be applied.
    #[error(transparent)]
    Change(#[from] ChangeError),

    /// A change request was already resolved.
    #[error(transparent)]
    Transition(#[from] InvalidTransition),
}

/// Owned, authoritative in-memory timetable state.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    faculties: HashMap<String, Faculty>,
    rooms: HashMap<String, Room>,
    assignments: Vec<Assignment>,
    requests: HashMap<String, ChangeRequest>,
}

impl ScheduleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Reference data -------------------------------------------------

    /// Adds a faculty member.
    pub fn add_faculty(&mut self, faculty: Faculty) -> Result<(), StoreError> {
        if self.faculties.contains_key(&faculty.id) {
            return Err(StoreError::DuplicateId {
                entity: "faculty",
                id: faculty.id,
            });
        }
        debug!(faculty_id = %faculty.id, "faculty added");
        self.faculties.insert(faculty.id.clone(), faculty);
        Ok(())
    }

    /// Replaces an existing faculty record.
    pub fn update_faculty(&mut self, faculty: Faculty) -> Result<(), StoreError> {
        if !self.faculties.contains_key(&faculty.id) {
            return Err(StoreError::NotFound {
                entity: "faculty",
                id: faculty.id,
            });
        }
        self.faculties.insert(faculty.id.clone(), faculty);
        Ok(())
    }

    /// Removes a faculty member.
    ///
    /// Rejected while any assignment references the id: retire the
    /// assignments first.
    pub fn remove_faculty(&mut self, id: &str) -> Result<Faculty, StoreError> {
        // Assignments only ever reference known faculty, so a nonzero
        // count implies the record exists.
        let count = self
            .assignments
            .iter()
            .filter(|a| a.faculty_id == id)
            .count();
        if count > 0 {
            return Err(StoreError::StillReferenced {
                entity: "faculty",
                id: id.to_string(),
                count,
            });
        }
        self.faculties
            .remove(id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "faculty",
                id: id.to_string(),
            })
    }

    /// Looks up a faculty member.
    pub fn faculty(&self, id: &str) -> Option<&Faculty> {
        self.faculties.get(id)
    }

    /// All faculty members, sorted by id.
    pub fn faculties(&self) -> Vec<&Faculty> {
        let mut all: Vec<&Faculty> = self.faculties.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Adds a room.
    pub fn add_room(&mut self, room: Room) -> Result<(), StoreError> {
        if self.rooms.contains_key(&room.id) {
            return Err(StoreError::DuplicateId {
                entity: "room",
                id: room.id,
            });
        }
        debug!(room_id = %room.id, "room added");
        self.rooms.insert(room.id.clone(), room);
        Ok(())
    }

    /// Replaces an existing room record.
    pub fn update_room(&mut self, room: Room) -> Result<(), StoreError> {
        if !self.rooms.contains_key(&room.id) {
            return Err(StoreError::NotFound {
                entity: "room",
                id: room.id,
            });
        }
        self.rooms.insert(room.id.clone(), room);
        Ok(())
    }

    /// Removes a room. Rejected while any assignment references the id.
    pub fn remove_room(&mut self, id: &str) -> Result<Room, StoreError> {
        let count = self.assignments.iter().filter(|a| a.room_id == id).count();
        if count > 0 {
            return Err(StoreError::StillReferenced {
                entity: "room",
                id: id.to_string(),
                count,
            });
        }
        self.rooms.remove(id).ok_or_else(|| StoreError::NotFound {
            entity: "room",
            id: id.to_string(),
        })
    }

    /// Looks up a room.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// All rooms, sorted by id.
    pub fn rooms(&self) -> Vec<&Room> {
        let mut all: Vec<&Room> = self.rooms.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    // --- Assignments ----------------------------------------------------

    /// Adds an assignment and refreshes conflict annotations.
    ///
    /// Fails fast on duplicate ids, on references to unknown faculty or
    /// rooms, and on time slots with non-positive span: a verdict or
    /// load computed over such records would be misleading. Room
    /// availability and faculty employment status are not gated here
    /// (see the module docs).
    pub fn add_assignment(&mut self, assignment: Assignment) -> Result<(), StoreError> {
        if self.assignments.iter().any(|a| a.id == assignment.id) {
            return Err(StoreError::DuplicateId {
                entity: "assignment",
                id: assignment.id,
            });
        }
        if !self.faculties.contains_key(&assignment.faculty_id) {
            return Err(StoreError::UnknownReference {
                entity: "faculty",
                id: assignment.faculty_id,
            });
        }
        if !self.rooms.contains_key(&assignment.room_id) {
            return Err(StoreError::UnknownReference {
                entity: "room",
                id: assignment.room_id,
            });
        }
        if assignment.time_slot.duration_min() <= 0 {
            return Err(StoreError::InvalidSlot { id: assignment.id });
        }
        debug!(assignment_id = %assignment.id, "assignment added");
        self.assignments.push(assignment);
        self.refresh();
        Ok(())
    }

    /// Removes an assignment and refreshes conflict annotations.
    pub fn remove_assignment(&mut self, id: &str) -> Result<Assignment, StoreError> {
        let index = self
            .assignments
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "assignment",
                id: id.to_string(),
            })?;
        let removed = self.assignments.remove(index);
        self.refresh();
        Ok(removed)
    }

    /// Looks up an assignment.
    pub fn assignment(&self, id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    /// The full annotated assignment set, in insertion order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Assignments occupying a given grid cell.
    pub fn assignments_for(&self, day: Weekday, time_slot: TimeSlot) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.occupies(day, time_slot))
            .collect()
    }

    /// Headline status counts over the current schedule.
    pub fn stats(&self) -> ScheduleStats {
        schedule_stats(&self.assignments)
    }

    /// Weekly load report for one faculty member.
    pub fn faculty_load(&self, id: &str) -> Result<LoadReport, StoreError> {
        let faculty = self.faculties.get(id).ok_or_else(|| StoreError::NotFound {
            entity: "faculty",
            id: id.to_string(),
        })?;
        Ok(compute_faculty_load(faculty, &self.assignments))
    }

    /// Load reports for every faculty member, sorted by faculty id.
    pub fn load_reports(&self) -> Vec<LoadReport> {
        self.faculties()
            .into_iter()
            .map(|f| compute_faculty_load(f, &self.assignments))
            .collect()
    }

    // --- Change requests ------------------------------------------------

    /// Submits a pending change request.
    pub fn submit_request(&mut self, request: ChangeRequest) -> Result<(), StoreError> {
        if self.requests.contains_key(&request.id) {
            return Err(StoreError::DuplicateId {
                entity: "request",
                id: request.id,
            });
        }
        if !self.faculties.contains_key(&request.faculty_id) {
            return Err(StoreError::UnknownReference {
                entity: "faculty",
                id: request.faculty_id,
            });
        }
        debug!(request_id = %request.id, kind = ?request.kind, "change request submitted");
        self.requests.insert(request.id.clone(), request);
        Ok(())
    }

    /// Looks up a change request.
    pub fn request(&self, id: &str) -> Option<&ChangeRequest> {
        self.requests.get(id)
    }

    /// All change requests, sorted by id.
    pub fn requests(&self) -> Vec<&ChangeRequest> {
        let mut all: Vec<&ChangeRequest> = self.requests.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Resolves a pending change request.
    ///
    /// Approval applies the request to the schedule and installs the
    /// result; a change that would introduce new conflicts fails with
    /// the offending ids and leaves both the schedule and the request
    /// untouched, so the scheduler can re-decide (or override with
    /// [`ScheduleStore::resolve_request_forced`]). Rejection leaves the
    /// schedule untouched. Both resolutions are terminal.
    pub fn resolve_request(&mut self, id: &str, approve: bool) -> Result<RequestStatus, StoreError> {
        self.resolve(id, approve, false)
    }

    /// Approves a pending change request, overriding conflict screening.
    ///
    /// The explicit override path for the approval workflow: the change
    /// is installed even if it double-books, and the resulting conflicts
    /// stay annotated on the schedule.
    pub fn resolve_request_forced(&mut self, id: &str) -> Result<RequestStatus, StoreError> {
        self.resolve(id, true, true)
    }

    fn resolve(&mut self, id: &str, approve: bool, force: bool) -> Result<RequestStatus, StoreError> {
        let request = self
            .requests
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "request",
                id: id.to_string(),
            })?;

        if !approve {
            request.reject()?;
            return Ok(RequestStatus::Rejected);
        }

        // Apply against a snapshot first; the request transitions only
        // once the new assignment set is known to be installable.
        let next = if force {
            force_apply(&self.assignments, request)?
        } else {
            apply_change_request(&self.assignments, request)?
        };
        request.approve()?;
        self.assignments = next;
        debug!(request_id = %id, "change request approved and applied");
        Ok(RequestStatus::Approved)
    }

    fn refresh(&mut self) {
        self.assignments = compute_conflicts(&self.assignments);
    }
}
