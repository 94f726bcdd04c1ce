//! Product Catalog Value Objects

mod product_options;

pub use product_options::{AvailableSelections, CompositionChoice, ProductPricingOptions};
