//! Room model.
//!
//! Rooms are administrative reference data: capacity, type, and fitted
//! equipment. Availability is a flat flag (e.g. closed for maintenance);
//! per-slot occupancy is determined by the schedule itself.

use serde::{Deserialize, Serialize};

/// A teaching room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier (e.g. "LH-101").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Seating capacity.
    pub capacity: i32,
    /// Room classification.
    pub room_type: RoomType,
    /// Fitted equipment (e.g. "Projector", "Computers").
    pub equipment: Vec<String>,
    /// Whether the room is open for scheduling.
    pub is_available: bool,
}

/// Room type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    LectureHall,
    Laboratory,
    SeminarRoom,
    Auditorium,
}

impl Room {
    /// Creates a new available room of the given type.
    pub fn new(id: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity: 0,
            room_type,
            equipment: Vec::new(),
            is_available: true,
        }
    }

    /// Creates a lecture hall.
    pub fn lecture_hall(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::LectureHall)
    }

    /// Creates a laboratory.
    pub fn laboratory(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Laboratory)
    }

    /// Creates a seminar room.
    pub fn seminar_room(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::SeminarRoom)
    }

    /// Creates an auditorium.
    pub fn auditorium(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Auditorium)
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seating capacity.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Adds a piece of equipment.
    pub fn with_equipment(mut self, item: impl Into<String>) -> Self {
        self.equipment.push(item.into());
        self
    }

    /// Sets the availability flag.
    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    /// Whether the room has a given piece of equipment.
    pub fn has_equipment(&self, item: &str) -> bool {
        self.equipment.iter().any(|e| e == item)
    }
}
