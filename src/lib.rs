pub mod alerts;
pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod view;

pub use error::{AppError, ErrorKind};
pub use services::{BookingOutcome, HallBoard, LoadOutcome};
