//! Error types for the date picker.

use thiserror::Error;

use crate::types::PickerType;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The month cannot be represented by the underlying calendar.
    #[error("Date out of range: month {month} of year {year}")]
    DateOutOfRange { month: u32, year: i32 },

    /// The value variant does not match the configured picker type.
    #[error("Value is a {found} value but the picker expects {expected}")]
    TypeMismatch {
        expected: PickerType,
        found: PickerType,
    },

    /// Invalid command-line input.
    #[error("{0}")]
    InvalidArgument(String),
}
