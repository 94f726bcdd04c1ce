//! Calculation Value Objects

mod price_breakdown;
mod pricing_request;

pub use price_breakdown::PriceBreakdown;
pub use pricing_request::PricingRequest;
