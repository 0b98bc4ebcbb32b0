use chrono::NaiveDate;

use crate::model::{Booking, DateSpan, Room, RoomId};

// ── Availability rules ────────────────────────────────────────────

/// A room is free for the stay iff no active booking for it touches the
/// window under the inclusive-touch rule.
pub fn is_room_free(room: RoomId, stay: &DateSpan, bookings: &[Booking]) -> bool {
    !bookings.iter().any(|b| b.blocks(room, stay))
}

/// First free room in ascending id order — the lowest-numbered free room
/// wins ties. `None` is the normal "no vacancy" outcome.
pub fn find_free_room(rooms: &[Room], stay: &DateSpan, bookings: &[Booking]) -> Option<RoomId> {
    let mut ids: Vec<RoomId> = rooms.iter().map(|r| r.id).collect();
    ids.sort_unstable();
    ids.into_iter().find(|&id| is_room_free(id, stay, bookings))
}

/// Days in the window on which every room in the catalog is taken by an
/// active booking, ascending. An empty catalog has nothing to occupy and
/// never yields a date.
pub fn fully_occupied_dates(
    rooms: &[Room],
    window: &DateSpan,
    bookings: &[Booking],
) -> Vec<NaiveDate> {
    if rooms.is_empty() {
        return Vec::new();
    }
    let active: Vec<&Booking> = bookings.iter().filter(|b| b.is_active).collect();
    window
        .days()
        .filter(|day| {
            rooms
                .iter()
                .all(|room| active.iter().any(|b| b.occupies(room.id, *day)))
        })
        .collect()
}
