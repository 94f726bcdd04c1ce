//! Product Option Contract
//!
//! The subset of a product's stored attributes the engine needs as
//! input. Owned by the product catalog, consumed here. The engine only
//! validates selections against the configuration; intersecting a
//! product's enabled lists with the configuration is the caller's job,
//! and these helpers do that intersection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::price_calculation::PricingRequest;
use crate::domain::pricing_config::PricingConfiguration;
use crate::domain::shared::{
    CompositionCode, DiamondTypeCode, DomainError, MaterialCode, RingSize,
};

/// Pricing-relevant attributes of one product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPricingOptions {
    /// Metal weight in grams. A product with no weight cannot be priced
    /// and must be treated as not purchasable until weight is set.
    pub weight: Option<Decimal>,
    /// Compositions the product is offered in.
    #[serde(default)]
    pub compositions: Vec<CompositionCode>,
    /// Materials the product is offered in.
    #[serde(default)]
    pub materials: Vec<MaterialCode>,
    /// Ring sizes the product is offered in.
    #[serde(default)]
    pub ring_sizes: Vec<RingSize>,
    /// Diamond types the product is offered with.
    #[serde(default)]
    pub diamond_types: Vec<DiamondTypeCode>,
    /// Carat of the product's stone, when it has one.
    pub diamond_carat: Option<Decimal>,
}

/// A composition the storefront may offer, with the materials valid
/// for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionChoice {
    /// The composition code.
    pub composition: CompositionCode,
    /// Materials offered by the product and declared for the composition.
    pub materials: Vec<MaterialCode>,
}

/// The intersection of a product's option lists with the
/// configuration-enabled codes: exactly the combinations the engine
/// will accept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSelections {
    /// Offerable compositions with their valid materials.
    pub compositions: Vec<CompositionChoice>,
    /// Offerable diamond types.
    pub diamond_types: Vec<DiamondTypeCode>,
    /// Offerable ring sizes (the label set is open, so all pass through).
    pub ring_sizes: Vec<RingSize>,
}

impl ProductPricingOptions {
    /// Whether the product can be priced at all: weight must be set and
    /// strictly positive.
    #[must_use]
    pub fn is_purchasable(&self) -> bool {
        self.weight.is_some_and(|w| w > Decimal::ZERO)
    }

    /// Intersect this product's option lists with the configuration.
    ///
    /// Compositions survive only if enabled in the configuration and at
    /// least one of the product's materials is declared for them.
    /// Diamond types survive if enabled in the configuration; "none" is
    /// always offerable.
    #[must_use]
    pub fn available_selections(&self, config: &PricingConfiguration) -> AvailableSelections {
        let compositions = self
            .compositions
            .iter()
            .filter_map(|composition| {
                let rate = config.composition_rate(composition)?;
                if !rate.enabled {
                    return None;
                }
                let materials: Vec<MaterialCode> = self
                    .materials
                    .iter()
                    .filter(|m| rate.material_multiplier(m).is_some())
                    .cloned()
                    .collect();
                if materials.is_empty() {
                    return None;
                }
                Some(CompositionChoice {
                    composition: composition.clone(),
                    materials,
                })
            })
            .collect();

        let diamond_types = self
            .diamond_types
            .iter()
            .filter(|dt| {
                dt.is_none() || config.diamond_rule(dt).is_some_and(|rule| rule.enabled)
            })
            .cloned()
            .collect();

        AvailableSelections {
            compositions,
            diamond_types,
            ring_sizes: self.ring_sizes.clone(),
        }
    }

    /// Build a pricing request for a selection, checking the selection
    /// against this product's enabled lists first (the configuration
    /// check happens inside the engine).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidValue`] if the product has no
    /// weight, or [`DomainError::OptionNotOffered`] if the selection is
    /// outside the product's lists.
    pub fn build_request(
        &self,
        composition: &CompositionCode,
        material: &MaterialCode,
        diamond_type: &DiamondTypeCode,
        ring_size: Option<RingSize>,
    ) -> Result<PricingRequest, DomainError> {
        let weight = self.weight.ok_or_else(|| DomainError::InvalidValue {
            field: "weight".to_string(),
            message: "product has no weight set and cannot be priced".to_string(),
        })?;

        if !self.compositions.iter().any(|c| c.matches(composition)) {
            return Err(DomainError::OptionNotOffered {
                option: "composition".to_string(),
                value: composition.to_string(),
            });
        }
        if !self.materials.iter().any(|m| m.matches(material)) {
            return Err(DomainError::OptionNotOffered {
                option: "material".to_string(),
                value: material.to_string(),
            });
        }
        if !diamond_type.is_none()
            && !self.diamond_types.iter().any(|d| d.matches(diamond_type))
        {
            return Err(DomainError::OptionNotOffered {
                option: "diamondType".to_string(),
                value: diamond_type.to_string(),
            });
        }
        if let Some(size) = &ring_size {
            if !self.ring_sizes.iter().any(|s| s.matches(size)) {
                return Err(DomainError::OptionNotOffered {
                    option: "ringSize".to_string(),
                    value: size.to_string(),
                });
            }
        }

        PricingRequest::try_new(
            weight,
            composition.clone(),
            material.clone(),
            diamond_type.clone(),
            self.diamond_carat,
            ring_size,
        )
        .map_err(|_| DomainError::InvalidValue {
            field: "weight".to_string(),
            message: format!("weight must be greater than zero, got {weight}"),
        })
    }
}
