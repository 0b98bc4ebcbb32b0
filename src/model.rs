use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Room identifier — small, unique, stable.
pub type RoomId = i32;

/// Inclusive stay window `[start, end]`. Both boundary days count, so two
/// stays sharing a single day overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "DateSpan start must not be after end");
        Self { start, end }
    }

    /// Inclusive-touch rule: the spans are disjoint only when one ends
    /// strictly before the other begins.
    pub fn overlaps(&self, other: &DateSpan) -> bool {
        !(self.end < other.start || other.end < self.start)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Every calendar day in the window, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A bookable room. The name is display-only and never participates in
/// availability decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: Option<String>,
}

impl Room {
    pub fn new(id: RoomId) -> Self {
        Self { id, name: None }
    }

    pub fn named(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }
}

/// A stay against one room. Requests start unassigned and inactive; the
/// engine assigns a room and activates them, or leaves them untouched when
/// no room is free. Inactive bookings are invisible to availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub room_id: Option<RoomId>,
    pub stay: DateSpan,
    pub is_active: bool,
    /// Free-form guest/reference tag, ignored by all availability logic.
    pub label: Option<String>,
}

impl Booking {
    /// An unassigned booking request for the given stay.
    pub fn request(stay: DateSpan) -> Self {
        Self {
            room_id: None,
            stay,
            is_active: false,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Does this booking keep `room` out of the requested stay?
    pub fn blocks(&self, room: RoomId, stay: &DateSpan) -> bool {
        self.is_active && self.room_id == Some(room) && self.stay.overlaps(stay)
    }

    /// Is `room` taken by this booking on the given day?
    pub fn occupies(&self, room: RoomId, day: NaiveDate) -> bool {
        self.is_active && self.room_id == Some(room) && self.stay.contains(day)
    }
}
