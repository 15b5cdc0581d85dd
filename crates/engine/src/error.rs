//! The module contains the error the engine can throw.
//!
//! The `Display` text of every validation variant is the exact reason shown
//! to the caller, so the server can forward it unchanged:
//!
//! - [`InvalidInput`] thrown when a required field is empty or malformed.
//! - [`UserNotFound`] thrown when the user has no record in the store.
//! - [`EntryNotFound`] thrown when no entry matches the selector.
//!
//!  [`InvalidInput`]: EngineError::InvalidInput
//!  [`UserNotFound`]: EngineError::UserNotFound
//!  [`EntryNotFound`]: EngineError::EntryNotFound
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input")]
    InvalidInput,
    #[error("user is missing or invalid")]
    UserNotFound,
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("Invalid category")]
    InvalidCategory,
    #[error("Invalid date")]
    InvalidDate,
    #[error("entry not found")]
    EntryNotFound,
    #[error("unsupported date format {0:?}, expected \"%d-%b-%Y\" or \"%Y-%m-%d\"")]
    UnsupportedDateFormat(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    /// Returns `true` for failures of the backing store rather than of the
    /// request itself.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Json(_))
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidInput, Self::InvalidInput)
            | (Self::UserNotFound, Self::UserNotFound)
            | (Self::InvalidAmount, Self::InvalidAmount)
            | (Self::InvalidCategory, Self::InvalidCategory)
            | (Self::InvalidDate, Self::InvalidDate)
            | (Self::EntryNotFound, Self::EntryNotFound) => true,
            (Self::UnsupportedDateFormat(a), Self::UnsupportedDateFormat(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            (Self::Json(a), Self::Json(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
