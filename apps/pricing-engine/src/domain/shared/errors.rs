//! Domain errors shared across bounded contexts.

use std::fmt;

/// Domain-level errors that can occur in business logic.
///
/// These errors are independent of infrastructure concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid value for a field.
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// An attribute is not present in a product's enabled option lists.
    OptionNotOffered {
        /// Option kind (e.g. "composition", "material").
        option: String,
        /// The value that is not offered.
        value: String,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::OptionNotOffered { option, value } => {
                write!(f, "Product does not offer {option} '{value}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
