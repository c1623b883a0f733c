//! Domain errors for the pricing engine.

use std::fmt;

/// Domain-level errors surfaced by validation and catalog lookups.
///
/// Both kinds are detected synchronously before any mutation occurs and are
/// never retried internally. The transport layer owns the translation to
/// status codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Caller-supplied input violates a precondition.
    InvalidData {
        /// Field that failed validation.
        field: String,
        /// Error message.
        message: String,
    },

    /// A referenced symbol has no corresponding instrument.
    NoData {
        /// The unknown symbol.
        symbol: String,
    },
}

impl DomainError {
    /// Invalid caller input for the named field.
    #[must_use]
    pub fn invalid_data(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidData {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Unknown instrument symbol.
    #[must_use]
    pub fn no_data(symbol: impl Into<String>) -> Self {
        Self::NoData {
            symbol: symbol.into(),
        }
    }

    /// Stable error code for transport mappings.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidData { .. } => "INVALID_DATA",
            Self::NoData { .. } => "NO_DATA",
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidData { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::NoData { symbol } => {
                write!(f, "No instrument found for symbol '{symbol}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
