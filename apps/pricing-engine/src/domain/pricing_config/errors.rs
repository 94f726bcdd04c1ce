//! Configuration store error types.

use thiserror::Error;

/// Errors from the pricing configuration store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration write failed validation. The store is left
    /// unchanged; the field path points at the offending value so the
    /// admin UI can highlight a single form field.
    #[error("invalid configuration at '{field_path}': {message}")]
    Validation {
        /// Path of the offending field, e.g.
        /// `compositionRates[2].materialMultipliers[0].priceMultiplier`.
        field_path: String,
        /// Human-readable description of the violation.
        message: String,
    },

    /// No configuration has ever been initialized.
    #[error("no pricing configuration has been initialized")]
    Missing,

    /// The storage layer failed or timed out.
    #[error("pricing configuration unavailable: {message}")]
    Unavailable {
        /// Underlying storage error description.
        message: String,
    },
}

impl ConfigError {
    /// Build a validation error for a field path.
    #[must_use]
    pub fn validation(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field_path: field_path.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Missing => "CONFIGURATION_MISSING",
            Self::Unavailable { .. } => "CONFIGURATION_UNAVAILABLE",
        }
    }
}
