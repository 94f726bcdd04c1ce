//! Calculation DTOs for the API boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::price_calculation::{PriceBreakdown, PricingError, PricingRequest};
use crate::domain::shared::{CompositionCode, DiamondTypeCode, MaterialCode, RingSize};

/// Wire form of a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequestDto {
    /// Metal weight in grams.
    pub weight: Decimal,
    /// Composition code, e.g. "14K".
    pub composition: String,
    /// Material code, e.g. "white-gold".
    pub material: String,
    /// Diamond-type code; omitted means "none".
    #[serde(default)]
    pub diamond_type: Option<String>,
    /// Diamond carat, needed only for per-carat rules.
    #[serde(default)]
    pub diamond_carat: Option<Decimal>,
    /// Optional ring-size label.
    #[serde(default)]
    pub ring_size: Option<String>,
}

impl PricingRequestDto {
    /// Convert into the domain request.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidWeight`] for a non-positive weight.
    pub fn into_domain(self) -> Result<PricingRequest, PricingError> {
        let diamond_type = self
            .diamond_type
            .map_or_else(|| DiamondTypeCode::new(DiamondTypeCode::NONE), DiamondTypeCode::new);
        PricingRequest::try_new(
            self.weight,
            CompositionCode::new(self.composition),
            MaterialCode::new(self.material),
            diamond_type,
            self.diamond_carat,
            self.ring_size.map(RingSize::new),
        )
    }
}

/// Wire form of a price breakdown.
///
/// Intermediates keep full precision; `finalPrice` is the 2-dp rounded
/// customer price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdownDto {
    /// Metal cost term.
    pub metal_cost: Decimal,
    /// Diamond cost term.
    pub diamond_cost: Decimal,
    /// Labor and making cost term.
    pub labor_and_making_cost: Decimal,
    /// Subtotal before the ring-size adjustment.
    pub pre_adjustment_subtotal: Decimal,
    /// Signed ring-size adjustment amount.
    pub ring_size_adjustment_amount: Decimal,
    /// Adjusted subtotal.
    pub subtotal: Decimal,
    /// Profit amount.
    pub profit_amount: Decimal,
    /// Final customer price.
    pub final_price: Decimal,
}

impl From<PriceBreakdown> for PriceBreakdownDto {
    fn from(breakdown: PriceBreakdown) -> Self {
        Self {
            metal_cost: breakdown.metal_cost.amount(),
            diamond_cost: breakdown.diamond_cost.amount(),
            labor_and_making_cost: breakdown.labor_and_making_cost.amount(),
            pre_adjustment_subtotal: breakdown.pre_adjustment_subtotal.amount(),
            ring_size_adjustment_amount: breakdown.ring_size_adjustment_amount.amount(),
            subtotal: breakdown.subtotal.amount(),
            profit_amount: breakdown.profit_amount.amount(),
            final_price: breakdown.final_price.amount(),
        }
    }
}
