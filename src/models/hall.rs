use serde::{Deserialize, Serialize};

pub type HallId = i64;

/// A bookable room as reported by `/api/halls` for one date.
///
/// Built fresh from every response and never edited locally; a refresh
/// replaces the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hall {
    pub id: HallId,
    pub name: String,
    pub capacity: u32,
    /// True iff no confirmed booking exists for the queried date.
    pub available: bool,
}
