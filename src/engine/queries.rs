use std::time::Instant;

use chrono::NaiveDate;
use tracing::debug;

use crate::model::{DateSpan, RoomId};
use crate::observability;

use super::availability;
use super::{Engine, EngineError};

impl Engine {
    /// First free room for the stay, lowest id winning ties. `Ok(None)` is
    /// the normal "no vacancy" outcome, not an error.
    pub async fn find_available_room(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<RoomId>, EngineError> {
        let stay = self.validate_stay(start, end)?;
        let timer = Instant::now();
        let (bookings, rooms) = self.load_snapshot().await?;

        let free = availability::find_free_room(&rooms, &stay, &bookings);
        match free {
            Some(room) => debug!("room {room} free for {stay}"),
            None => debug!("no vacancy for {stay}"),
        }

        metrics::counter!(observability::AVAILABILITY_QUERIES_TOTAL).increment(1);
        metrics::histogram!(observability::QUERY_DURATION_SECONDS)
            .record(timer.elapsed().as_secs_f64());
        Ok(free)
    }

    /// Dates in `[start, end]` on which every room has an active booking,
    /// ascending. Past windows are legal; an inverted window scans nothing.
    pub async fn fully_occupied_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, EngineError> {
        let timer = Instant::now();
        let (bookings, rooms) = self.load_snapshot().await?;

        let dates = if start > end {
            Vec::new()
        } else {
            availability::fully_occupied_dates(&rooms, &DateSpan::new(start, end), &bookings)
        };
        debug!(
            "{} fully occupied days in {start}..{end} across {} rooms",
            dates.len(),
            rooms.len()
        );

        metrics::counter!(observability::OCCUPANCY_QUERIES_TOTAL).increment(1);
        metrics::histogram!(observability::QUERY_DURATION_SECONDS)
            .record(timer.elapsed().as_secs_f64());
        Ok(dates)
    }
}
