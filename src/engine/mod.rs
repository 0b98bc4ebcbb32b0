mod availability;
mod error;
mod mutations;
mod queries;

pub use availability::{find_free_room, fully_occupied_dates, is_room_free};
pub use error::EngineError;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};
use crate::model::{Booking, DateSpan, Room};
use crate::store::{BookingStore, RoomStore};

/// Availability engine. Stateless between calls: every operation evaluates a
/// fresh snapshot loaded from the injected stores, so concurrent external
/// writers are the store layer's problem, not ours.
pub struct Engine {
    bookings: Arc<dyn BookingStore>,
    rooms: Arc<dyn RoomStore>,
    clock: Arc<dyn Clock>,
}

impl Engine {
    pub fn new(
        bookings: Arc<dyn BookingStore>,
        rooms: Arc<dyn RoomStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            bookings,
            rooms,
            clock,
        }
    }

    /// Engine on the real wall clock.
    pub fn with_system_clock(bookings: Arc<dyn BookingStore>, rooms: Arc<dyn RoomStore>) -> Self {
        Self::new(bookings, rooms, Arc::new(SystemClock))
    }

    /// Load booking and room snapshots concurrently. The reads are
    /// independent; both must complete before evaluation proceeds.
    async fn load_snapshot(&self) -> Result<(Vec<Booking>, Vec<Room>), EngineError> {
        let (bookings, rooms) =
            futures::try_join!(self.bookings.get_all(), self.rooms.get_all())
                .map_err(EngineError::Store)?;
        Ok((bookings, rooms))
    }

    /// Reject stays that run backwards or do not start strictly after
    /// "today". Reads the clock exactly once, before any store access.
    fn validate_stay(&self, start: NaiveDate, end: NaiveDate) -> Result<DateSpan, EngineError> {
        if start > end {
            return Err(EngineError::InvalidArgument(
                "stay start date must not be after end date",
            ));
        }
        if start <= self.clock.today() {
            return Err(EngineError::InvalidArgument(
                "stay start date must be in the future",
            ));
        }
        Ok(DateSpan::new(start, end))
    }
}
