use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::models::{Hall, HallId};

/// The `bookingDate` input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateField {
    /// Raw text as entered; empty until the page sets it.
    pub value: String,
    pub min: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Listing {
    #[default]
    NotLoaded,
    Loaded { date: NaiveDate, halls: Vec<Hall> },
}

#[derive(Debug, Default)]
pub struct BoardState {
    pub date_field: DateField,
    pub listing: Listing,
    /// Raw attendee input text keyed by hall id.
    pub attendee_inputs: HashMap<HallId, String>,
    /// Token of the most recently issued load.
    pub latest_load: u64,
    /// Halls whose submit control is disabled while a booking is pending.
    pub bookings_in_flight: HashSet<HallId>,
}

impl BoardState {
    pub fn issue_load_token(&mut self) -> u64 {
        self.latest_load += 1;
        self.latest_load
    }

    pub fn is_latest_load(&self, token: u64) -> bool {
        self.latest_load == token
    }

    /// Replaces the rendered list wholesale and resets every attendee input to 1.
    pub fn replace_listing(&mut self, date: NaiveDate, halls: Vec<Hall>) {
        self.attendee_inputs = halls
            .iter()
            .filter(|h| h.available)
            .map(|h| (h.id, "1".to_string()))
            .collect();
        self.listing = Listing::Loaded { date, halls };
    }
}
