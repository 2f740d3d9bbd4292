use chrono::NaiveDate;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("You cannot book a hall for a past date!")]
    PastDate { selected: NaiveDate, today: NaiveDate },

    #[error("Please choose a valid date.")]
    InvalidDate(String),

    #[error("Please enter a valid number of attendees.")]
    InvalidAttendees,

    #[error("Request rejected ({status}): {}", .message.as_deref().unwrap_or("Server error"))]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caught before any request is sent; fixed by re-entering input.
    Validation,
    /// Transport failure or a non-2xx answer from the server.
    Request,
    Config,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::PastDate { .. } | AppError::InvalidDate(_) | AppError::InvalidAttendees => {
                ErrorKind::Validation
            }
            AppError::Rejected { .. } | AppError::Network(_) | AppError::Decode(_) => {
                ErrorKind::Request
            }
            AppError::Config(_) => ErrorKind::Config,
        }
    }

    /// Text shown to the user in an alert.
    ///
    /// Server rejections carry the server's own `error` text when it sent one.
    /// Anything that never produced a readable server answer is a network error.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Rejected { message, .. } => message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Server error".to_string()),
            AppError::Network(_) | AppError::Decode(_) => "Network error.".to_string(),
            other => other.to_string(),
        }
    }
}
