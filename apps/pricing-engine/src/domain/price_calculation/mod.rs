//! Price Calculation Bounded Context
//!
//! Pure, deterministic pricing: a configuration snapshot plus a
//! product's chosen attributes in, a transparent cost breakdown out.
//!
//! # Key Concepts
//!
//! - **Fixed term order**: metal, diamond, labor, ring-size adjustment,
//!   margin, floor (later terms are percentages of earlier subtotals)
//! - **Abort on resolution failure**: no partial price is ever returned
//! - **Full-precision intermediates**: only the final price is rounded

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::PricingError;
pub use services::PriceCalculator;
pub use value_objects::{PriceBreakdown, PricingRequest};
