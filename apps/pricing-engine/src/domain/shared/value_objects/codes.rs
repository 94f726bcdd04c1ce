//! Code value objects for catalog attributes.
//!
//! Compositions, materials, and diamond types are identified by free-form
//! codes chosen by the store operator (e.g. "14K", "yellow-gold",
//! "lab-grown"). Codes compare case-insensitively so a storefront sending
//! "14k" resolves the same rate the admin entered as "14K".

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A composition code (metal purity), e.g. "10K", "18K", "platinum".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompositionCode(String);

/// A material code (metal color/finish), e.g. "yellow-gold", "white-gold".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialCode(String);

/// A diamond-type code, e.g. "natural", "lab-grown", or the reserved "none".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiamondTypeCode(String);

/// A ring-size label, e.g. "6.5" or "8".
///
/// The label set is open (custom sizing systems are allowed), but labels
/// stored in the configuration must be numeric with an optional `.5`
/// fraction. Request-side labels are plain lookups and never validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RingSize(String);

macro_rules! code_impl {
    ($name:ident) => {
        impl $name {
            /// Create a new code, trimming surrounding whitespace.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into().trim().to_string())
            }

            /// Get the code string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the code is empty after trimming.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }

            /// Case-insensitive comparison against another code.
            #[must_use]
            pub fn matches(&self, other: &Self) -> bool {
                self.0.trim().eq_ignore_ascii_case(other.0.trim())
            }

            /// Lowercased form, used for duplicate detection.
            #[must_use]
            pub fn normalized(&self) -> String {
                self.0.trim().to_ascii_lowercase()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

code_impl!(CompositionCode);
code_impl!(MaterialCode);
code_impl!(DiamondTypeCode);
code_impl!(RingSize);

impl DiamondTypeCode {
    /// The reserved code for "no diamond", always valid with zero cost.
    pub const NONE: &'static str = "none";

    /// Returns true if this is the reserved "none" type.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0.trim().eq_ignore_ascii_case(Self::NONE)
    }
}

impl RingSize {
    /// Check that the label is a valid size token: a positive number whose
    /// fractional part is either zero or exactly one half.
    #[must_use]
    pub fn is_valid_token(&self) -> bool {
        let Ok(size) = Decimal::from_str(self.0.trim()) else {
            return false;
        };
        if size <= Decimal::ZERO {
            return false;
        }
        let fract = size.fract();
        fract.is_zero() || fract == Decimal::new(5, 1)
    }
}
