//! Pricing Configuration Aggregate
//!
//! The single, versioned ruleset that turns a product's physical
//! attributes into a retail price. There is exactly one live
//! configuration at a time; replacing it instantly changes prices for
//! every product that uses the affected composition, diamond, or size
//! code.

use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::pricing_config::errors::ConfigError;
use crate::domain::shared::{CompositionCode, DiamondTypeCode, MaterialCode, RingSize, Timestamp};

/// Upper bound for material multipliers, catching fat-finger entry.
const MAX_MATERIAL_MULTIPLIER: Decimal = dec!(5);

/// A per-material price multiplier within a composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialMultiplier {
    /// Material code, e.g. "yellow-gold".
    pub material: MaterialCode,
    /// Multiplier applied to the metal cost, typically 0.9-1.5.
    pub price_multiplier: Decimal,
}

/// Per-gram rate for one composition (metal purity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionRate {
    /// Composition code, e.g. "14K" or "platinum".
    pub composition: CompositionCode,
    /// Price per gram of metal at this purity.
    pub price_per_gram: Decimal,
    /// Whether products may currently be priced at this composition.
    pub enabled: bool,
    /// Multipliers for the materials declared for this composition.
    /// Materials not listed here are unknown for this composition.
    #[serde(default)]
    pub material_multipliers: Vec<MaterialMultiplier>,
}

impl CompositionRate {
    /// Resolve the multiplier for a material within this composition.
    #[must_use]
    pub fn material_multiplier(&self, material: &MaterialCode) -> Option<&MaterialMultiplier> {
        self.material_multipliers
            .iter()
            .find(|m| m.material.matches(material))
    }
}

/// How a diamond rule prices stones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingMethod {
    /// Flat price regardless of carat.
    Fixed,
    /// Base price plus a per-carat rate; requires a carat size.
    PerCarat,
}

impl PricingMethod {
    /// Returns true if this method requires a carat size.
    #[must_use]
    pub const fn is_per_carat(&self) -> bool {
        matches!(self, Self::PerCarat)
    }
}

/// Pricing rule for one diamond type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiamondRule {
    /// Diamond-type code, e.g. "natural" or "lab-grown".
    pub diamond_type: DiamondTypeCode,
    /// Whether this diamond type may currently be selected.
    pub enabled: bool,
    /// Pricing method for this rule.
    pub pricing_method: PricingMethod,
    /// Flat component of the diamond cost.
    #[serde(default)]
    pub base_price: Decimal,
    /// Per-carat rate, used only when the method is per-carat.
    #[serde(default)]
    pub price_per_carat: Decimal,
}

/// Store-wide cost and margin dials.
///
/// The two labor dials (`laborCost` flat and `laborCostPerGram`) and
/// `makingCharges` coexist and are all additive. Dials absent from a
/// stored document deserialize to zero, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalCosts {
    /// Flat labor cost per piece.
    #[serde(default)]
    pub labor_cost: Decimal,
    /// Labor cost per gram of metal.
    #[serde(default)]
    pub labor_cost_per_gram: Decimal,
    /// Flat making charges per piece.
    #[serde(default)]
    pub making_charges: Decimal,
    /// Other flat charges (hallmarking, certification, ...).
    #[serde(default)]
    pub other_charges: Decimal,
    /// Profit margin as a percentage of the subtotal.
    #[serde(default)]
    pub profit_margin_percentage: Decimal,
    /// Price floor applied after margin.
    #[serde(default)]
    pub minimum_price: Decimal,
}

/// The replaceable portion of the configuration: everything except the
/// server-managed version and timestamps. This is the admin PUT body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRuleset {
    /// Ordered composition rates.
    #[serde(default)]
    pub composition_rates: Vec<CompositionRate>,
    /// Ordered diamond pricing rules.
    #[serde(default)]
    pub diamond_pricing: Vec<DiamondRule>,
    /// Ring-size label to signed percentage adjustment. Labels with no
    /// entry default to 0%; absence is not an error.
    #[serde(default)]
    pub ring_size_adjustments: BTreeMap<RingSize, Decimal>,
    /// Cost and margin dials.
    #[serde(default)]
    pub additional_costs: AdditionalCosts,
}

/// The single, versioned pricing configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfiguration {
    /// Monotonically increasing document version, bumped on replace.
    version: u64,
    #[serde(flatten)]
    ruleset: ConfigurationRuleset,
    /// When the document was first seeded.
    created_at: Timestamp,
    /// When the document was last replaced.
    updated_at: Timestamp,
}

impl PricingConfiguration {
    /// Create the first version of a configuration from a ruleset.
    #[must_use]
    pub fn initial(ruleset: ConfigurationRuleset) -> Self {
        let now = Timestamp::now();
        Self {
            version: 1,
            ruleset,
            created_at: now,
            updated_at: now,
        }
    }

    /// Produce the successor document with a replaced ruleset.
    ///
    /// Bumps the version and update timestamp; creation time is kept.
    #[must_use]
    pub fn replaced(&self, ruleset: ConfigurationRuleset) -> Self {
        Self {
            version: self.version + 1,
            ruleset,
            created_at: self.created_at,
            updated_at: Timestamp::now(),
        }
    }

    /// The documented default configuration, seeded at first boot:
    /// standard gold purities enabled at illustrative per-gram rates,
    /// diamond types "none"/"natural"/"lab-grown" enabled, no ring-size
    /// adjustments, margin 0%, minimum price 0.
    #[must_use]
    pub fn default_configuration() -> Self {
        let gold = |code: &str, rate: Decimal| CompositionRate {
            composition: CompositionCode::new(code),
            price_per_gram: rate,
            enabled: true,
            material_multipliers: vec![
                MaterialMultiplier {
                    material: MaterialCode::new("yellow-gold"),
                    price_multiplier: dec!(1.0),
                },
                MaterialMultiplier {
                    material: MaterialCode::new("white-gold"),
                    price_multiplier: dec!(1.1),
                },
                MaterialMultiplier {
                    material: MaterialCode::new("rose-gold"),
                    price_multiplier: dec!(1.05),
                },
            ],
        };

        let ruleset = ConfigurationRuleset {
            composition_rates: vec![
                gold("10K", dec!(30)),
                gold("14K", dec!(42)),
                gold("18K", dec!(55)),
                gold("22K", dec!(68)),
                gold("24K", dec!(75)),
                CompositionRate {
                    composition: CompositionCode::new("platinum"),
                    price_per_gram: dec!(95),
                    enabled: true,
                    material_multipliers: vec![MaterialMultiplier {
                        material: MaterialCode::new("platinum"),
                        price_multiplier: dec!(1.0),
                    }],
                },
            ],
            diamond_pricing: vec![
                DiamondRule {
                    diamond_type: DiamondTypeCode::new("none"),
                    enabled: true,
                    pricing_method: PricingMethod::Fixed,
                    base_price: Decimal::ZERO,
                    price_per_carat: Decimal::ZERO,
                },
                DiamondRule {
                    diamond_type: DiamondTypeCode::new("natural"),
                    enabled: true,
                    pricing_method: PricingMethod::PerCarat,
                    base_price: dec!(100),
                    price_per_carat: dec!(350),
                },
                DiamondRule {
                    diamond_type: DiamondTypeCode::new("lab-grown"),
                    enabled: true,
                    pricing_method: PricingMethod::PerCarat,
                    base_price: dec!(50),
                    price_per_carat: dec!(150),
                },
            ],
            ring_size_adjustments: BTreeMap::new(),
            additional_costs: AdditionalCosts::default(),
        };

        Self::initial(ruleset)
    }

    /// Document version.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// The replaceable ruleset portion of this document.
    #[must_use]
    pub const fn ruleset(&self) -> &ConfigurationRuleset {
        &self.ruleset
    }

    /// Ordered composition rates.
    #[must_use]
    pub fn composition_rates(&self) -> &[CompositionRate] {
        &self.ruleset.composition_rates
    }

    /// Ordered diamond pricing rules.
    #[must_use]
    pub fn diamond_pricing(&self) -> &[DiamondRule] {
        &self.ruleset.diamond_pricing
    }

    /// Ring-size adjustment map.
    #[must_use]
    pub const fn ring_size_adjustments(&self) -> &BTreeMap<RingSize, Decimal> {
        &self.ruleset.ring_size_adjustments
    }

    /// Cost and margin dials.
    #[must_use]
    pub const fn additional_costs(&self) -> &AdditionalCosts {
        &self.ruleset.additional_costs
    }

    /// Seed timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Last replace timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Resolve the rate for a composition code (case-insensitive).
    #[must_use]
    pub fn composition_rate(&self, composition: &CompositionCode) -> Option<&CompositionRate> {
        self.ruleset
            .composition_rates
            .iter()
            .find(|r| r.composition.matches(composition))
    }

    /// Resolve the rule for a diamond-type code (case-insensitive).
    #[must_use]
    pub fn diamond_rule(&self, diamond_type: &DiamondTypeCode) -> Option<&DiamondRule> {
        self.ruleset
            .diamond_pricing
            .iter()
            .find(|r| r.diamond_type.matches(diamond_type))
    }

    /// Percentage adjustment for a ring size. Sizes with no explicit
    /// entry default to 0%.
    #[must_use]
    pub fn ring_size_adjustment(&self, ring_size: &RingSize) -> Decimal {
        self.ruleset
            .ring_size_adjustments
            .iter()
            .find(|(label, _)| label.matches(ring_size))
            .map_or(Decimal::ZERO, |(_, pct)| *pct)
    }

    /// Validate the whole document structurally and semantically.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] with the offending field path
    /// on the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_compositions()?;
        self.validate_diamond_rules()?;
        self.validate_ring_sizes()?;
        self.validate_additional_costs()
    }

    fn validate_compositions(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (i, rate) in self.ruleset.composition_rates.iter().enumerate() {
            let path = format!("compositionRates[{i}]");
            if rate.composition.is_empty() {
                return Err(ConfigError::validation(
                    format!("{path}.composition"),
                    "composition code must not be empty",
                ));
            }
            if !seen.insert(rate.composition.normalized()) {
                return Err(ConfigError::validation(
                    format!("{path}.composition"),
                    format!("duplicate composition code '{}'", rate.composition),
                ));
            }
            ensure_non_negative(rate.price_per_gram, &format!("{path}.pricePerGram"))?;

            let mut seen_materials = HashSet::new();
            for (j, multiplier) in rate.material_multipliers.iter().enumerate() {
                let mpath = format!("{path}.materialMultipliers[{j}]");
                if multiplier.material.is_empty() {
                    return Err(ConfigError::validation(
                        format!("{mpath}.material"),
                        "material code must not be empty",
                    ));
                }
                if !seen_materials.insert(multiplier.material.normalized()) {
                    return Err(ConfigError::validation(
                        format!("{mpath}.material"),
                        format!(
                            "duplicate material code '{}' in composition '{}'",
                            multiplier.material, rate.composition
                        ),
                    ));
                }
                ensure_non_negative(
                    multiplier.price_multiplier,
                    &format!("{mpath}.priceMultiplier"),
                )?;
                if multiplier.price_multiplier > MAX_MATERIAL_MULTIPLIER {
                    return Err(ConfigError::validation(
                        format!("{mpath}.priceMultiplier"),
                        format!(
                            "multiplier {} exceeds the allowed maximum of {MAX_MATERIAL_MULTIPLIER}",
                            multiplier.price_multiplier
                        ),
                    ));
                }
            }
        }
        Ok(())
    }

    fn validate_diamond_rules(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (i, rule) in self.ruleset.diamond_pricing.iter().enumerate() {
            let path = format!("diamondPricing[{i}]");
            if rule.diamond_type.is_empty() {
                return Err(ConfigError::validation(
                    format!("{path}.diamondType"),
                    "diamond-type code must not be empty",
                ));
            }
            if !seen.insert(rule.diamond_type.normalized()) {
                return Err(ConfigError::validation(
                    format!("{path}.diamondType"),
                    format!("duplicate diamond-type code '{}'", rule.diamond_type),
                ));
            }
            ensure_non_negative(rule.base_price, &format!("{path}.basePrice"))?;
            ensure_non_negative(rule.price_per_carat, &format!("{path}.pricePerCarat"))?;
        }
        Ok(())
    }

    fn validate_ring_sizes(&self) -> Result<(), ConfigError> {
        for label in self.ruleset.ring_size_adjustments.keys() {
            if !label.is_valid_token() {
                return Err(ConfigError::validation(
                    format!("ringSizeAdjustments[\"{label}\"]"),
                    "ring-size label must be numeric, optionally with a .5 fraction",
                ));
            }
        }
        Ok(())
    }

    fn validate_additional_costs(&self) -> Result<(), ConfigError> {
        let costs = &self.ruleset.additional_costs;
        ensure_non_negative(costs.labor_cost, "additionalCosts.laborCost")?;
        ensure_non_negative(costs.labor_cost_per_gram, "additionalCosts.laborCostPerGram")?;
        ensure_non_negative(costs.making_charges, "additionalCosts.makingCharges")?;
        ensure_non_negative(costs.other_charges, "additionalCosts.otherCharges")?;
        ensure_non_negative(
            costs.profit_margin_percentage,
            "additionalCosts.profitMarginPercentage",
        )?;
        ensure_non_negative(costs.minimum_price, "additionalCosts.minimumPrice")
    }
}

fn ensure_non_negative(value: Decimal, field_path: &str) -> Result<(), ConfigError> {
    if value < Decimal::ZERO {
        return Err(ConfigError::validation(
            field_path,
            format!("must not be negative, got {value}"),
        ));
    }
    Ok(())
}
