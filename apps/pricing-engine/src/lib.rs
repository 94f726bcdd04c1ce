// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::option_if_let_else,
        clippy::default_trait_access,
        clippy::items_after_statements,
        clippy::or_fun_call
    )
)]

//! Pricing Engine - Rust Core Library
//!
//! Dynamic pricing engine for configurable jewelry products.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! The pricing engine follows Clean Architecture principles with Domain-Driven Design:
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, domain services)
//!   - `pricing_config`: the versioned configuration aggregate, validation, store trait
//!   - `price_calculation`: pure price calculator, request/breakdown value objects
//!   - `product_catalog`: per-product option constraints and request assembly
//!
//! - **Application**: Use cases and orchestration
//!   - `use_cases`: `CalculatePrice`, `GetConfiguration`, `UpdateConfiguration`
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `http`: Axum REST controller
//!   - `persistence`: Configuration store (in-memory)

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and DTO definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::price_calculation::{
    PriceBreakdown, PriceCalculator, PricingError, PricingRequest,
};
pub use domain::pricing_config::{
    AdditionalCosts, CompositionRate, ConfigError, ConfigurationRepository, ConfigurationRuleset,
    DiamondRule, MaterialMultiplier, PricingConfiguration, PricingMethod,
};
pub use domain::product_catalog::{AvailableSelections, ProductPricingOptions};
pub use domain::shared::{
    CompositionCode, DiamondTypeCode, DomainError, MaterialCode, Money, RingSize, Timestamp,
    Weight,
};

// Application re-exports
pub use application::dto::{OptionCatalogDto, PriceBreakdownDto, PricingRequestDto};
pub use application::use_cases::{
    CalculatePriceUseCase, GetConfigurationUseCase, UpdateConfigurationUseCase,
};

// Infrastructure re-exports
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::InMemoryConfigurationRepository;
