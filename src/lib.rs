//! Timetable conflict and load engine for university class scheduling.
//!
//! Given a weekly set of class assignments (subject, faculty, room,
//! batch, day, time slot), this crate detects hard-constraint conflicts
//! (room, faculty, and batch double-bookings), accounts faculty teaching
//! load against declared weekly maximums, and processes swap/cancel
//! change requests under scheduler approval. It validates and annotates
//! schedules; it does not generate them. A timetable optimizer is an
//! external collaborator that feeds candidate schedules back through
//! [`conflict::compute_conflicts`].
//!
//! # Modules
//!
//! - **`models`**: Domain types, `Assignment`, `Faculty`, `Room`,
//!   `ChangeRequest`, and the `Weekday`/`TimeSlot` grid
//! - **`conflict`**: Hard-constraint conflict detection and schedule stats
//! - **`load`**: Derived faculty load accounting (soft constraint)
//! - **`requests`**: Swap/cancel request application and screening
//! - **`validation`**: Data integrity checks (duplicate IDs, orphaned references)
//! - **`store`**: Owned in-memory schedule store with referential integrity
//!
//! # Determinism
//!
//! The engine functions are pure and total over well-formed input:
//! identical input produces byte-identical output (conflict reasons use
//! a fixed room, faculty, batch dimension order), so callers can cache
//! and diff annotated schedules.

pub mod conflict;
pub mod load;
pub mod models;
pub mod requests;
pub mod store;
pub mod validation;

pub use conflict::{compute_conflicts, schedule_stats, ConflictDimension, ScheduleStats};
pub use load::{compute_faculty_load, load_reports, LoadReport};
pub use requests::{apply_change_request, force_apply, ChangeError};
pub use store::{ScheduleStore, StoreError};
