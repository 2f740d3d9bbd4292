use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::HallId;

/// Body of `POST /api/book`. Built right before submission and dropped after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub hall_id: HallId,
    pub date: NaiveDate,
    pub attendees: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub message: String,
}

/// One row of the bookings dashboard (`GET /api/bookings`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    #[serde(rename = "Booking_ID")]
    pub booking_id: i64,
    #[serde(rename = "Hall_Name")]
    pub hall_name: String,
    #[serde(rename = "Booking_Date")]
    pub booking_date: String,
    /// The server emits the whole column as floats once any row is null.
    #[serde(rename = "Attendees_Count", default, deserialize_with = "lenient_count")]
    pub attendees: Option<u64>,
    #[serde(rename = "Booked_By")]
    pub booked_by: String,
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n.round() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(attendees: &str) -> BookingRecord {
        let body = format!(
            r#"{{"Booking_ID": 4, "Hall_Name": "Hall A", "Booking_Date": "2024-06-02",
                "Attendees_Count": {}, "Booked_By": "staff1"}}"#,
            attendees
        );
        serde_json::from_str(&body).unwrap()
    }

    #[test]
    fn attendee_count_accepts_integers_floats_and_null() {
        assert_eq!(record("5").attendees, Some(5));
        assert_eq!(record("5.0").attendees, Some(5));
        assert_eq!(record("null").attendees, None);
    }

    #[test]
    fn float_column_decodes_as_a_list() {
        let rows: Vec<BookingRecord> = serde_json::from_str(
            r#"[{"Booking_ID": 1, "Hall_Name": "A", "Booking_Date": "2024-06-02", "Attendees_Count": 3.0, "Booked_By": "x"},
                {"Booking_ID": 2, "Hall_Name": "B", "Booking_Date": "2024-06-01", "Attendees_Count": null, "Booked_By": "y"}]"#,
        )
        .unwrap();
        assert_eq!(rows[0].attendees, Some(3));
        assert_eq!(rows[1].attendees, None);
    }
}
