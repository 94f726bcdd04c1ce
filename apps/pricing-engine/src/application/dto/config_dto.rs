//! Configuration DTOs for the API boundary.

use serde::{Deserialize, Serialize};

use crate::domain::pricing_config::{PricingConfiguration, PricingMethod};

/// One composition the option picker may show, with its materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionOptionDto {
    /// Composition code.
    pub composition: String,
    /// Material codes declared for this composition.
    pub materials: Vec<String>,
}

/// One diamond type the option picker may show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiamondOptionDto {
    /// Diamond-type code.
    pub diamond_type: String,
    /// Whether selecting it requires a carat size.
    pub requires_carat: bool,
}

/// The public subset of the configuration needed to render option
/// pickers: which codes are enabled, without raw rates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionCatalogDto {
    /// Enabled compositions with their materials.
    pub compositions: Vec<CompositionOptionDto>,
    /// Enabled diamond types.
    pub diamond_types: Vec<DiamondOptionDto>,
    /// Ring-size labels with explicit adjustments configured. Any other
    /// label is still accepted at 0%.
    pub ring_sizes: Vec<String>,
}

impl From<&PricingConfiguration> for OptionCatalogDto {
    fn from(config: &PricingConfiguration) -> Self {
        let compositions = config
            .composition_rates()
            .iter()
            .filter(|rate| rate.enabled)
            .map(|rate| CompositionOptionDto {
                composition: rate.composition.to_string(),
                materials: rate
                    .material_multipliers
                    .iter()
                    .map(|m| m.material.to_string())
                    .collect(),
            })
            .collect();

        let diamond_types = config
            .diamond_pricing()
            .iter()
            .filter(|rule| rule.enabled)
            .map(|rule| DiamondOptionDto {
                diamond_type: rule.diamond_type.to_string(),
                requires_carat: rule.pricing_method == PricingMethod::PerCarat,
            })
            .collect();

        let ring_sizes = config
            .ring_size_adjustments()
            .keys()
            .map(|size| size.to_string())
            .collect();

        Self {
            compositions,
            diamond_types,
            ring_sizes,
        }
    }
}
