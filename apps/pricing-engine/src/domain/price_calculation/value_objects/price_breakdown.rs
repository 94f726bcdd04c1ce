//! Price breakdown value object.

use serde::{Deserialize, Serialize};

use crate::domain::shared::Money;

/// The transparent cost breakdown of one calculation.
///
/// Every field is derived, never stored. Intermediates keep full
/// precision for auditability; only `final_price` is rounded (2 dp,
/// round-half-up) for customer display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// weight x price-per-gram x material multiplier.
    pub metal_cost: Money,
    /// Diamond cost per the resolved rule; zero for "none".
    pub diamond_cost: Money,
    /// Sum of the flat and per-gram cost dials.
    pub labor_and_making_cost: Money,
    /// Metal + diamond + labor, before the ring-size adjustment.
    pub pre_adjustment_subtotal: Money,
    /// Signed ring-size adjustment (percentage of the pre-adjustment
    /// subtotal).
    pub ring_size_adjustment_amount: Money,
    /// Pre-adjustment subtotal plus the ring-size adjustment.
    pub subtotal: Money,
    /// Profit margin as a percentage of the subtotal.
    pub profit_amount: Money,
    /// max(subtotal + profit, minimum price), rounded to 2 dp half-up.
    pub final_price: Money,
}
