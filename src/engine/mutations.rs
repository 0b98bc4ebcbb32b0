use tracing::{debug, info};

use crate::model::Booking;
use crate::observability;

use super::{Engine, EngineError};

impl Engine {
    /// Complete and persist a booking request. Assigns the first free room,
    /// activates the booking and writes a copy through the booking store;
    /// returns `Ok(false)` — writing nothing and leaving the request
    /// untouched — when no room is free. Validation errors from the
    /// availability lookup propagate unchanged.
    pub async fn create_booking(&self, request: &mut Booking) -> Result<bool, EngineError> {
        let found = self
            .find_available_room(request.stay.start, request.stay.end)
            .await?;

        match found {
            Some(room) => {
                request.room_id = Some(room);
                request.is_active = true;
                self.bookings
                    .add(request.clone())
                    .await
                    .map_err(EngineError::Store)?;
                metrics::counter!(observability::BOOKINGS_CREATED_TOTAL).increment(1);
                info!("booked room {room} for {}", request.stay);
                Ok(true)
            }
            None => {
                metrics::counter!(observability::BOOKINGS_REJECTED_TOTAL).increment(1);
                debug!("booking request for {} turned away", request.stay);
                Ok(false)
            }
        }
    }
}
