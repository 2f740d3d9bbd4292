use chrono::NaiveDate;
use tracing::{debug, info};

use super::{HallBoard, LoadOutcome};
use crate::error::AppError;
use crate::models::{BookingRequest, HallId};
use crate::state::BoardState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Booked {
        message: String,
        /// Result of the follow-up refresh; `None` if that load failed.
        reloaded: Option<LoadOutcome>,
    },
    /// The hall already has a booking pending, so its submit control is disabled.
    AlreadyInFlight,
}

impl HallBoard {
    /// Submits a booking for one hall using its attendee input.
    ///
    /// On success the hall list is reloaded exactly once. On failure the list is
    /// left as it is.
    pub async fn book_hall(
        &self,
        hall_id: HallId,
        date: NaiveDate,
        hall_name: &str,
    ) -> Result<BookingOutcome, AppError> {
        let today = self.clock.today();
        let prepared = {
            let mut state = self.state();
            prepare_booking(&mut state, hall_id, date, today)
        };

        let request = match prepared {
            Ok(Some(request)) => request,
            Ok(None) => {
                debug!(hall_id, "Booking already in flight, ignoring submit");
                return Ok(BookingOutcome::AlreadyInFlight);
            }
            Err(err) => return Err(self.reject(err)),
        };

        let in_flight = InFlight {
            board: self,
            hall_id,
        };

        info!(
            hall_id,
            hall = hall_name,
            %date,
            attendees = request.attendees,
            "Submitting booking"
        );
        let result = self.api.book(&request).await;
        drop(in_flight);

        match result {
            Ok(confirmation) => {
                info!(hall_id, hall = hall_name, "Booking confirmed: {}", confirmation.message);
                self.alerts
                    .alert(&format!("✅ Success: {}", confirmation.message));
                let reloaded = self.load_halls().await.ok();
                Ok(BookingOutcome::Booked {
                    message: confirmation.message,
                    reloaded,
                })
            }
            Err(err) => Err(self.report("❌ Booking Failed: ", err)),
        }
    }
}

/// Re-enables a hall's submit control when the booking finishes or its future is dropped.
struct InFlight<'a> {
    board: &'a HallBoard,
    hall_id: HallId,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.board.state().bookings_in_flight.remove(&self.hall_id);
    }
}

/// Builds the request and marks the hall in flight. `Ok(None)` means a booking
/// for this hall is already pending.
fn prepare_booking(
    state: &mut BoardState,
    hall_id: HallId,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<Option<BookingRequest>, AppError> {
    if state.bookings_in_flight.contains(&hall_id) {
        return Ok(None);
    }

    let attendees = state
        .attendee_inputs
        .get(&hall_id)
        .and_then(|raw| parse_attendees(raw))
        .ok_or(AppError::InvalidAttendees)?;

    if date < today {
        return Err(AppError::PastDate {
            selected: date,
            today,
        });
    }

    state.bookings_in_flight.insert(hall_id);
    Ok(Some(BookingRequest {
        hall_id,
        date,
        attendees,
    }))
}

// No capacity check here: the input's max is a hint and the server owns capacity.
fn parse_attendees(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|n| *n >= 1)
}
