//! Weekly time grid: weekdays and time slots.
//!
//! The timetable is a fixed weekly grid. A cell is identified by a
//! `(Weekday, TimeSlot)` pair; slot identity (not overlap) is what the
//! conflict passes key on. Slots carry explicit start/end minutes so
//! durations are always derived from the span rather than assumed to be
//! one hour.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Teaching day of the week, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All teaching days, in timetable column order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Full English name, matching the timetable column headers.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A time slot [start, end) in minutes since midnight.
///
/// Half-open interval: includes start, excludes end. Slots on the
/// reference grid are hourly (`TimeSlot::hour`), but any positive span
/// is valid and load accounting uses the actual span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot start (minutes since midnight, inclusive).
    pub start_min: i64,
    /// Slot end (minutes since midnight, exclusive).
    pub end_min: i64,
}

impl TimeSlot {
    /// Creates a slot from explicit start/end minutes.
    pub fn new(start_min: i64, end_min: i64) -> Self {
        Self { start_min, end_min }
    }

    /// Creates the hourly slot starting at `hour` o'clock (e.g. `hour(9)` = 9:00-10:00).
    pub fn hour(hour: i64) -> Self {
        Self {
            start_min: hour * 60,
            end_min: (hour + 1) * 60,
        }
    }

    /// Slot duration in minutes.
    #[inline]
    pub fn duration_min(&self) -> i64 {
        self.end_min - self.start_min
    }

    /// Whether two slots overlap in time (ignores the day).
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }
}

impl fmt::Display for TimeSlot {
    /// Renders the label form, e.g. `9:00-10:00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}-{}:{:02}",
            self.start_min / 60,
            self.start_min % 60,
            self.end_min / 60,
            self.end_min % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_order_and_names() {
        assert_eq!(Weekday::ALL.len(), 5);
        assert_eq!(Weekday::ALL[0], Weekday::Monday);
        assert_eq!(Weekday::Friday.to_string(), "Friday");
        assert!(Weekday::Monday < Weekday::Friday);
    }

    #[test]
    fn test_hourly_slot() {
        let s = TimeSlot::hour(9);
        assert_eq!(s.start_min, 540);
        assert_eq!(s.end_min, 600);
        assert_eq!(s.duration_min(), 60);
        assert_eq!(s.to_string(), "9:00-10:00");
    }

    #[test]
    fn test_variable_length_slot() {
        let s = TimeSlot::new(13 * 60, 14 * 60 + 30);
        assert_eq!(s.duration_min(), 90);
        assert_eq!(s.to_string(), "13:00-14:30");
    }

    #[test]
    fn test_slot_overlap() {
        let a = TimeSlot::hour(9);
        let b = TimeSlot::new(9 * 60 + 30, 10 * 60 + 30);
        let c = TimeSlot::hour(10);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&c));
        assert!(!a.overlaps(&c)); // Half-open: 10:00 boundary does not overlap
    }

    #[test]
    fn test_slot_identity() {
        assert_eq!(TimeSlot::hour(8), TimeSlot::new(480, 540));
        assert_ne!(TimeSlot::hour(8), TimeSlot::hour(9));
    }
}
