//! Timetabling domain models.
//!
//! Core data types for the weekly class schedule: assignments on the
//! day/slot grid, faculty and room reference data, and faculty change
//! requests.
//!
//! Faculty and rooms are administrative reference data with independent
//! lifecycles; assignments reference them by id. Derived state (conflict
//! status, faculty load) is never stored on the reference records; it
//! is recomputed from the assignment set by the engine modules.

mod assignment;
mod faculty;
mod request;
mod room;
mod slot;

pub use assignment::{Assignment, AssignmentStatus};
pub use faculty::{Faculty, FacultyStatus};
pub use request::{ChangeKind, ChangeRequest, InvalidTransition, RequestStatus, SlotTarget};
pub use room::{Room, RoomType};
pub use slot::{TimeSlot, Weekday};
