//! Pricing request value object.

use rust_decimal::Decimal;

use crate::domain::price_calculation::errors::PricingError;
use crate::domain::shared::{CompositionCode, DiamondTypeCode, MaterialCode, RingSize, Weight};

/// A single, transient price calculation request: the product's chosen
/// attributes for one render or cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingRequest {
    /// Metal weight in grams.
    pub weight: Weight,
    /// Requested composition; must be enabled in the configuration.
    pub composition: CompositionCode,
    /// Requested material; must belong to the composition's multipliers.
    pub material: MaterialCode,
    /// Requested diamond type; "none" is always valid with zero cost.
    pub diamond_type: DiamondTypeCode,
    /// Diamond carat; required to be positive only for per-carat rules.
    pub diamond_carat: Option<Decimal>,
    /// Optional ring-size label; unknown labels adjust by 0%.
    pub ring_size: Option<RingSize>,
}

impl PricingRequest {
    /// Build a request from raw attribute values.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidWeight`] if the weight is not
    /// strictly positive. Carat is validated later, by the calculation,
    /// because it only matters for per-carat rules.
    pub fn try_new(
        weight_grams: Decimal,
        composition: CompositionCode,
        material: MaterialCode,
        diamond_type: DiamondTypeCode,
        diamond_carat: Option<Decimal>,
        ring_size: Option<RingSize>,
    ) -> Result<Self, PricingError> {
        let weight = Weight::new(weight_grams).map_err(|_| PricingError::InvalidWeight {
            weight: weight_grams,
        })?;
        Ok(Self {
            weight,
            composition,
            material,
            diamond_type,
            diamond_carat,
            ring_size,
        })
    }
}
