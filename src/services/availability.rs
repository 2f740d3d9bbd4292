use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::HallBoard;
use crate::error::AppError;
use crate::state::BoardState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The date field was empty; nothing happened.
    Skipped,
    Rendered { halls: usize },
    /// A newer load was issued while this one was in flight; its answer was dropped.
    Stale,
}

impl HallBoard {
    /// Fetches availability for the selected date and re-renders the list.
    ///
    /// The list is only replaced once a response arrives, so a failed request
    /// leaves the previous cards in place.
    pub async fn load_halls(&self) -> Result<LoadOutcome, AppError> {
        let today = self.clock.today();
        let prepared = {
            let mut state = self.state();
            prepare_load(&mut state, today)
        };

        let (date, token) = match prepared {
            Ok(Some(load)) => load,
            Ok(None) => {
                debug!("Date field is empty, skipping hall load");
                return Ok(LoadOutcome::Skipped);
            }
            Err(err) => return Err(self.reject(err)),
        };

        debug!(%date, token, "Requesting hall availability");
        let result = self.api.fetch_halls(date).await;

        let mut state = self.state();
        if !state.is_latest_load(token) {
            match &result {
                Ok(halls) => debug!(%date, token, count = halls.len(), "Discarding stale hall list"),
                Err(err) => warn!(%date, token, "Discarding stale hall load failure: {}", err),
            }
            return Ok(LoadOutcome::Stale);
        }

        match result {
            Ok(halls) => {
                let count = halls.len();
                state.replace_listing(date, halls);
                info!(%date, count, "Rendered hall availability");
                Ok(LoadOutcome::Rendered { halls: count })
            }
            Err(err) => {
                drop(state);
                Err(self.report("Error loading halls: ", err))
            }
        }
    }
}

/// Validates the date field and takes a load token. `Ok(None)` means the field is empty.
fn prepare_load(
    state: &mut BoardState,
    today: NaiveDate,
) -> Result<Option<(NaiveDate, u64)>, AppError> {
    let raw = state.date_field.value.trim().to_string();
    if raw.is_empty() {
        return Ok(None);
    }

    let date = parse_date(&raw)?;
    if date < today {
        state.date_field.value = today.format("%Y-%m-%d").to_string();
        return Err(AppError::PastDate {
            selected: date,
            today,
        });
    }

    Ok(Some((date, state.issue_load_token())))
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(raw.to_string()))
}
