// Rust guideline compliant 2026-10-15

//! Error types for the Stockroom core library.

use thiserror::Error;

/// Result type alias for Stockroom operations that can fail outside validation.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a candidate record is refused by the validator.
///
/// The `Display` text of each variant is the exact message shown to the user
/// in the error line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Name is blank after trimming.
    #[error("Item name must not be empty")]
    EmptyName,

    /// Name matches a live record, ignoring case and surrounding whitespace.
    #[error("Item must not be duplicated")]
    DuplicateName,

    /// Category is blank or not part of the configured set.
    #[error("Please select a category")]
    InvalidCategory,

    /// Price is not a finite number, or is negative.
    #[error("Price must not be less than 0")]
    InvalidPrice,
}

impl Rejection {
    /// Returns a stable snake_case code for machine-readable output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::EmptyName => "empty_name",
            Rejection::DuplicateName => "duplicate_name",
            Rejection::InvalidCategory => "invalid_category",
            Rejection::InvalidPrice => "invalid_price",
        }
    }
}

/// Error types for operations around the engine (configuration, IO).
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value or file.
    #[error("Invalid config: {0}")]
    Config(String),
}
