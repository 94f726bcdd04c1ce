//! Product Catalog Contract (consumed, not owned)
//!
//! The pricing-relevant slice of a product document, plus the helpers a
//! caller uses to intersect product options with the live configuration
//! before invoking the engine.

pub mod value_objects;

pub use value_objects::{AvailableSelections, CompositionChoice, ProductPricingOptions};
