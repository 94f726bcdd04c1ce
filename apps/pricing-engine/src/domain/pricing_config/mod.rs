//! Pricing Configuration Bounded Context
//!
//! Owns the single, versioned set of pricing rules: metal rates per
//! composition, material multipliers, diamond rules, ring-size
//! adjustments, and store-wide cost/margin dials.
//!
//! # Key Concepts
//!
//! - **Configuration document**: one live document at a time, replaced
//!   whole after validation (replace-or-nothing, no partial writes)
//! - **Validation**: structural and semantic checks with field paths
//! - **Repository**: persistence abstraction implemented in adapters

pub mod aggregate;
pub mod errors;
pub mod repository;

pub use aggregate::{
    AdditionalCosts, CompositionRate, ConfigurationRuleset, DiamondRule, MaterialMultiplier,
    PricingConfiguration, PricingMethod,
};
pub use errors::ConfigError;
pub use repository::ConfigurationRepository;
