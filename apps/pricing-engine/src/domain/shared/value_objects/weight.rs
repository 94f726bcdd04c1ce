//! Weight value object for metal weight in grams.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// A metal weight in grams.
///
/// A product with no weight (or a non-positive weight) cannot be priced,
/// so construction enforces a strictly positive value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(Decimal);

impl Weight {
    /// Create a new Weight in grams.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidValue`] if the weight is not strictly
    /// positive.
    pub fn new(grams: Decimal) -> Result<Self, DomainError> {
        if grams <= Decimal::ZERO {
            return Err(DomainError::InvalidValue {
                field: "weight".to_string(),
                message: format!("weight must be greater than zero, got {grams}"),
            });
        }
        Ok(Self(grams))
    }

    /// Get the weight in grams.
    #[must_use]
    pub const fn grams(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}g", self.0)
    }
}
