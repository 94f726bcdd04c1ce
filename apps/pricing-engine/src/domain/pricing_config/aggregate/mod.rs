//! Pricing configuration aggregate and its building blocks.

mod pricing_configuration;

pub use pricing_configuration::{
    AdditionalCosts, CompositionRate, ConfigurationRuleset, DiamondRule, MaterialMultiplier,
    PricingConfiguration, PricingMethod,
};
