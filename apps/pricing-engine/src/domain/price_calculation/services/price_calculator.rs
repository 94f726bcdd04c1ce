//! Price Calculation Service
//!
//! Deterministic, pure computation of a price breakdown from a request
//! and a configuration snapshot. No I/O, no hidden state: the same two
//! inputs always produce the same output, so the admin test calculator
//! and the storefront can never disagree on a price.

use rust_decimal::Decimal;

use crate::domain::price_calculation::errors::PricingError;
use crate::domain::price_calculation::value_objects::{PriceBreakdown, PricingRequest};
use crate::domain::pricing_config::{DiamondRule, PricingConfiguration, PricingMethod};
use crate::domain::shared::Money;

/// Price Calculation Service - computes breakdowns against one
/// configuration snapshot.
pub struct PriceCalculator<'a> {
    config: &'a PricingConfiguration,
}

impl<'a> PriceCalculator<'a> {
    /// Create a calculator borrowing a configuration snapshot.
    #[must_use]
    pub const fn new(config: &'a PricingConfiguration) -> Self {
        Self { config }
    }

    /// Compute the full price breakdown for a request.
    ///
    /// The term order is fixed: metal, diamond, labor, ring-size
    /// adjustment (percentage of the pre-adjustment subtotal), then
    /// margin (percentage of the adjusted subtotal), then the floor.
    /// Later terms are percentage-of-subtotal, not percentage-of-final,
    /// so there is no circularity.
    ///
    /// # Errors
    ///
    /// Any resolution failure aborts the whole calculation; no partial
    /// breakdown is ever returned.
    pub fn calculate(&self, request: &PricingRequest) -> Result<PriceBreakdown, PricingError> {
        let metal_cost = self.metal_cost(request)?;
        let diamond_cost = self.diamond_cost(request)?;
        let labor_and_making_cost = self.labor_and_making_cost(request);

        let pre_adjustment_subtotal = metal_cost + diamond_cost + labor_and_making_cost;

        let ring_size_adjustment_amount = match &request.ring_size {
            Some(size) => {
                pre_adjustment_subtotal.percentage(self.config.ring_size_adjustment(size))
            }
            None => Money::ZERO,
        };

        let subtotal = pre_adjustment_subtotal + ring_size_adjustment_amount;

        let costs = self.config.additional_costs();
        let profit_amount = subtotal.percentage(costs.profit_margin_percentage);

        let floor = Money::new(costs.minimum_price);
        let final_price = (subtotal + profit_amount).max(floor).round_half_up();

        Ok(PriceBreakdown {
            metal_cost,
            diamond_cost,
            labor_and_making_cost,
            pre_adjustment_subtotal,
            ring_size_adjustment_amount,
            subtotal,
            profit_amount,
            final_price,
        })
    }

    fn metal_cost(&self, request: &PricingRequest) -> Result<Money, PricingError> {
        let rate = self.config.composition_rate(&request.composition).ok_or(
            PricingError::UnknownComposition {
                composition: request.composition.to_string(),
            },
        )?;
        if !rate.enabled {
            return Err(PricingError::CompositionDisabled {
                composition: request.composition.to_string(),
            });
        }

        let multiplier =
            rate.material_multiplier(&request.material)
                .ok_or(PricingError::UnknownMaterial {
                    composition: request.composition.to_string(),
                    material: request.material.to_string(),
                })?;

        Ok(Money::new(
            request.weight.grams() * rate.price_per_gram * multiplier.price_multiplier,
        ))
    }

    fn diamond_cost(&self, request: &PricingRequest) -> Result<Money, PricingError> {
        // "none" is always valid with zero cost; any supplied carat is
        // ignored, not an error.
        if request.diamond_type.is_none() {
            return Ok(Money::ZERO);
        }

        let rule = self.config.diamond_rule(&request.diamond_type).ok_or(
            PricingError::UnknownDiamondType {
                diamond_type: request.diamond_type.to_string(),
            },
        )?;
        if !rule.enabled {
            return Err(PricingError::DiamondTypeDisabled {
                diamond_type: request.diamond_type.to_string(),
            });
        }

        Self::priced_diamond(rule, request.diamond_carat)
    }

    fn priced_diamond(
        rule: &DiamondRule,
        diamond_carat: Option<Decimal>,
    ) -> Result<Money, PricingError> {
        match rule.pricing_method {
            PricingMethod::Fixed => Ok(Money::new(rule.base_price)),
            PricingMethod::PerCarat => {
                let carat = diamond_carat.unwrap_or(Decimal::ZERO);
                if carat <= Decimal::ZERO {
                    return Err(PricingError::InvalidCarat { carat });
                }
                Ok(Money::new(rule.base_price + rule.price_per_carat * carat))
            }
        }
    }

    fn labor_and_making_cost(&self, request: &PricingRequest) -> Money {
        let costs = self.config.additional_costs();
        Money::new(
            costs.labor_cost
                + costs.labor_cost_per_gram * request.weight.grams()
                + costs.making_charges
                + costs.other_charges,
        )
    }
}
