use tracing::info;

use super::HallBoard;
use crate::error::AppError;
use crate::models::BookingRecord;

impl HallBoard {
    /// All bookings, newest date first as the server orders them.
    pub async fn load_bookings(&self) -> Result<Vec<BookingRecord>, AppError> {
        match self.api.fetch_bookings().await {
            Ok(records) => {
                info!(count = records.len(), "Loaded bookings");
                Ok(records)
            }
            Err(err) => Err(self.report("Error loading bookings: ", err)),
        }
    }
}
