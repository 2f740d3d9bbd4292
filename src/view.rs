//! Pure projection of the board state into something a front end can show.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::{BookingRecord, HallId};
use crate::state::{BoardState, Listing};

pub const EMPTY_MESSAGE: &str = "No halls found or unauthorized.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    NotLoaded,
    /// A single informational line in place of cards.
    Info(String),
    Cards(Vec<HallCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HallCard {
    pub hall_id: HallId,
    pub name: String,
    pub capacity: u32,
    pub available: bool,
    /// Present iff the hall is available.
    pub booking: Option<BookingControl>,
}

impl HallCard {
    pub fn class(&self) -> &'static str {
        if self.available {
            "hall-card available"
        } else {
            "hall-card booked"
        }
    }

    pub fn status(&self) -> &'static str {
        if self.available {
            "✅ Available"
        } else {
            "❌ Booked"
        }
    }
}

/// Attendee input plus "Book Now" button for one available hall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingControl {
    pub input_id: String,
    pub min: u32,
    pub max: u32,
    pub value: String,
    /// Date the button books for, fixed when the card was rendered.
    pub date: NaiveDate,
    pub disabled: bool,
}

pub fn attendee_input_id(hall_id: HallId) -> String {
    format!("att_{}", hall_id)
}

pub fn render(state: &BoardState) -> View {
    let (date, halls) = match &state.listing {
        Listing::NotLoaded => return View::NotLoaded,
        Listing::Loaded { date, halls } => (*date, halls),
    };

    if halls.is_empty() {
        return View::Info(EMPTY_MESSAGE.to_string());
    }

    let cards = halls
        .iter()
        .map(|h| HallCard {
            hall_id: h.id,
            name: h.name.clone(),
            capacity: h.capacity,
            available: h.available,
            booking: h.available.then(|| BookingControl {
                input_id: attendee_input_id(h.id),
                min: 1,
                max: h.capacity,
                value: state
                    .attendee_inputs
                    .get(&h.id)
                    .cloned()
                    .unwrap_or_else(|| "1".to_string()),
                date,
                disabled: state.bookings_in_flight.contains(&h.id),
            }),
        })
        .collect();

    View::Cards(cards)
}

impl View {
    /// Markup for the `halls` container.
    pub fn to_html(&self) -> String {
        match self {
            View::NotLoaded => String::new(),
            View::Info(message) => format!("<p class=\"info-msg\">{}</p>", escape_html(message)),
            View::Cards(cards) => {
                let mut out = String::new();
                for card in cards {
                    let _ = write!(
                        out,
                        "<div class=\"{}\">\n  <h3>{}</h3>\n  <p>Capacity: {}</p>\n  <p>Status: <strong>{}</strong></p>\n",
                        card.class(),
                        escape_html(&card.name),
                        card.capacity,
                        card.status()
                    );
                    if let Some(control) = &card.booking {
                        let disabled = if control.disabled { " disabled" } else { "" };
                        let _ = write!(
                            out,
                            "  <input type=\"number\" id=\"{}\" placeholder=\"No. of attendees\" min=\"{}\" max=\"{}\" value=\"{}\">\n  <button data-hall-id=\"{}\" data-date=\"{}\"{}>Book Now</button>\n",
                            control.input_id,
                            control.min,
                            control.max,
                            escape_html(&control.value),
                            card.hall_id,
                            control.date.format("%Y-%m-%d"),
                            disabled
                        );
                    }
                    out.push_str("</div>\n");
                }
                out
            }
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            View::NotLoaded => "(no halls loaded)\n".to_string(),
            View::Info(message) => format!("{}\n", message),
            View::Cards(cards) => {
                let mut out = String::new();
                for card in cards {
                    let _ = write!(
                        out,
                        "#{} {} | Capacity: {} | Status: {}",
                        card.hall_id,
                        card.name,
                        card.capacity,
                        card.status()
                    );
                    if let Some(control) = &card.booking {
                        let _ = write!(
                            out,
                            " | attendees: {} ({}-{})",
                            control.value, control.min, control.max
                        );
                        if control.disabled {
                            out.push_str(" | booking...");
                        } else {
                            let _ = write!(out, " | book {}", card.hall_id);
                        }
                    }
                    out.push('\n');
                }
                out
            }
        }
    }
}

pub fn render_bookings(records: &[BookingRecord]) -> String {
    if records.is_empty() {
        return "No bookings yet.\n".to_string();
    }

    let mut out = format!(
        "{:<6} {:<20} {:<12} {:>9}  {}\n",
        "ID", "Hall", "Date", "Attendees", "Booked by"
    );
    for r in records {
        let _ = writeln!(
            out,
            "{:<6} {:<20} {:<12} {:>9}  {}",
            r.booking_id,
            r.hall_name,
            r.booking_date,
            r.attendees
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            r.booked_by
        );
    }
    out
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
