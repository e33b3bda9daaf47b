//! Error types for the Hotelfix client.
//!
//! Domain-specific errors (REST calls, configuration, report export) are aggregated into
//! a single [`Error`] with `#[from]` conversions so service and utility code can propagate
//! them with `?`. The `Display` output of every variant is meant to be shown to the user
//! as-is in a toast.

pub mod api;
pub mod config;
pub mod export;

use thiserror::Error;

use crate::model::ticket::TicketStatus;

pub use api::ApiError;
pub use config::ConfigError;
pub use export::ExportError;

/// Main error type for the Hotelfix client.
#[derive(Error, Debug)]
pub enum Error {
    /// REST call failure (transport, non-2xx status, expired session).
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Configuration error (invalid environment value).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Report export failure (no rows, workbook generation).
    #[error(transparent)]
    ExportError(#[from] ExportError),
    /// The ticket lifecycle doesn't allow the requested status change.
    #[error("A ticket can't move from {from} to {to}")]
    InvalidTransition {
        from: TicketStatus,
        to: TicketStatus,
    },
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// JSON (de)serialization failure for request bodies or stored session data.
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error means the stored session is no longer valid and the user must log in again
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::ApiError(ApiError::Unauthorized))
    }
}
