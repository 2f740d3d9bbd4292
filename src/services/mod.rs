pub mod availability;
pub mod booking;
pub mod dashboard;

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{error, warn};

use crate::alerts::Alerts;
use crate::api::HallsApi;
use crate::clock::Clock;
use crate::error::AppError;
use crate::models::HallId;
use crate::state::{BoardState, DateField};
use crate::view::{self, View};

pub use availability::LoadOutcome;
pub use booking::BookingOutcome;

/// View model behind the booking page.
///
/// Owns the date field, the per-hall attendee inputs and the last hall list.
/// The rendered page is always `view::render` of this state. Handlers may
/// overlap; the state lock is never held across a request.
pub struct HallBoard {
    api: Arc<dyn HallsApi>,
    alerts: Arc<dyn Alerts>,
    clock: Arc<dyn Clock>,
    state: Mutex<BoardState>,
}

impl HallBoard {
    pub fn new(api: Arc<dyn HallsApi>, alerts: Arc<dyn Alerts>, clock: Arc<dyn Clock>) -> Self {
        Self {
            api,
            alerts,
            clock,
            state: Mutex::new(BoardState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Page load: pin the date field's minimum to today, default it to today
    /// when empty, then load availability.
    pub async fn initialize(&self) -> Result<LoadOutcome, AppError> {
        let today = self.clock.today();
        {
            let mut state = self.state();
            state.date_field.min = Some(today);
            if state.date_field.value.trim().is_empty() {
                state.date_field.value = today.format("%Y-%m-%d").to_string();
            }
        }
        self.load_halls().await
    }

    /// Date change event.
    pub async fn set_date(&self, raw: &str) -> Result<LoadOutcome, AppError> {
        self.state().date_field.value = raw.trim().to_string();
        self.load_halls().await
    }

    pub fn set_attendees(&self, hall_id: HallId, raw: &str) {
        self.state()
            .attendee_inputs
            .insert(hall_id, raw.trim().to_string());
    }

    pub fn date_field(&self) -> DateField {
        self.state().date_field.clone()
    }

    pub fn view(&self) -> View {
        view::render(&self.state())
    }

    /// Surfaces a validation error that blocked a request.
    fn reject(&self, err: AppError) -> AppError {
        warn!("Rejected input: {}", err);
        self.alerts.alert(&err.user_message());
        err
    }

    /// Surfaces and logs a failed request.
    fn report(&self, prefix: &str, err: AppError) -> AppError {
        error!("{}{}", prefix, err);
        self.alerts
            .alert(&format!("{}{}", prefix, err.user_message()));
        err
    }
}
