//! Calculation-path error types.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::pricing_config::ConfigError;

/// Errors from a price calculation.
///
/// Every variant is recoverable by the caller (re-prompt the user for a
/// valid selection); none is fatal to the process. A resolution failure
/// aborts the whole calculation, so no partial breakdown is ever
/// returned alongside one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// The requested composition does not exist in the configuration.
    #[error("unknown composition '{composition}'")]
    UnknownComposition {
        /// The composition code that failed to resolve.
        composition: String,
    },

    /// The requested composition exists but is disabled.
    #[error("composition '{composition}' is disabled")]
    CompositionDisabled {
        /// The disabled composition code.
        composition: String,
    },

    /// The requested material is not declared for the composition.
    #[error("unknown material '{material}' for composition '{composition}'")]
    UnknownMaterial {
        /// The composition the material was looked up in.
        composition: String,
        /// The material code that failed to resolve.
        material: String,
    },

    /// The requested diamond type does not exist in the configuration.
    #[error("unknown diamond type '{diamond_type}'")]
    UnknownDiamondType {
        /// The diamond-type code that failed to resolve.
        diamond_type: String,
    },

    /// The requested diamond type exists but is disabled.
    #[error("diamond type '{diamond_type}' is disabled")]
    DiamondTypeDisabled {
        /// The disabled diamond-type code.
        diamond_type: String,
    },

    /// A per-carat rule requires a strictly positive carat size.
    #[error("diamond carat must be greater than zero for per-carat pricing, got {carat}")]
    InvalidCarat {
        /// The carat value that was supplied.
        carat: Decimal,
    },

    /// The supplied weight is not strictly positive.
    #[error("weight must be greater than zero, got {weight}")]
    InvalidWeight {
        /// The weight value that was supplied.
        weight: Decimal,
    },

    /// No configuration has ever been initialized.
    #[error("no pricing configuration has been initialized")]
    ConfigurationMissing,

    /// The configuration store failed or timed out.
    #[error("pricing configuration unavailable: {message}")]
    ConfigurationUnavailable {
        /// Underlying storage error description.
        message: String,
    },
}

impl PricingError {
    /// Stable machine-readable code for API responses and admin forms.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownComposition { .. } => "UNKNOWN_COMPOSITION",
            Self::CompositionDisabled { .. } => "COMPOSITION_DISABLED",
            Self::UnknownMaterial { .. } => "UNKNOWN_MATERIAL",
            Self::UnknownDiamondType { .. } => "UNKNOWN_DIAMOND_TYPE",
            Self::DiamondTypeDisabled { .. } => "DIAMOND_TYPE_DISABLED",
            Self::InvalidCarat { .. } => "INVALID_CARAT",
            Self::InvalidWeight { .. } => "INVALID_WEIGHT",
            Self::ConfigurationMissing => "CONFIGURATION_MISSING",
            Self::ConfigurationUnavailable { .. } => "CONFIGURATION_UNAVAILABLE",
        }
    }
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Missing => Self::ConfigurationMissing,
            ConfigError::Unavailable { message } => Self::ConfigurationUnavailable { message },
            // A stored document never fails validation on the read path;
            // treat it as the store being unusable if it somehow does.
            ConfigError::Validation { field_path, message } => Self::ConfigurationUnavailable {
                message: format!("stored configuration invalid at '{field_path}': {message}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn error_codes_are_stable() {
        let err = PricingError::UnknownComposition {
            composition: "9K".to_string(),
        };
        assert_eq!(err.error_code(), "UNKNOWN_COMPOSITION");

        let err = PricingError::InvalidCarat { carat: dec!(0) };
        assert_eq!(err.error_code(), "INVALID_CARAT");
    }

    #[test]
    fn display_names_the_offending_attribute() {
        let err = PricingError::UnknownMaterial {
            composition: "14K".to_string(),
            material: "titanium".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("titanium"));
        assert!(msg.contains("14K"));
    }

    #[test]
    fn config_errors_map_to_pricing_errors() {
        assert_eq!(
            PricingError::from(ConfigError::Missing),
            PricingError::ConfigurationMissing
        );
        let err = PricingError::from(ConfigError::Unavailable {
            message: "timeout".to_string(),
        });
        assert_eq!(err.error_code(), "CONFIGURATION_UNAVAILABLE");
    }
}
