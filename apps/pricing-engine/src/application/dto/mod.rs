//! Data transfer objects for API boundaries.

mod config_dto;
mod pricing_dto;

pub use config_dto::{CompositionOptionDto, DiamondOptionDto, OptionCatalogDto};
pub use pricing_dto::{PriceBreakdownDto, PricingRequestDto};
