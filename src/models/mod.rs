pub mod booking;
pub mod hall;

pub use booking::{BookingConfirmation, BookingRecord, BookingRequest};
pub use hall::{Hall, HallId};
