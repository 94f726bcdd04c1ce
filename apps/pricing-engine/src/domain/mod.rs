//! Domain Layer
//!
//! The innermost layer containing business logic with zero
//! infrastructure dependencies. This layer defines:
//!
//! - **Aggregates**: Consistency boundaries with invariants
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic
//! - **Repository Traits**: Persistence abstractions (implemented in adapters)
//!
//! # Bounded Contexts
//!
//! - [`pricing_config`]: The single validated pricing ruleset
//! - [`price_calculation`]: Pure price breakdown computation
//! - [`product_catalog`]: The consumed product option contract

pub mod price_calculation;
pub mod pricing_config;
pub mod product_catalog;
pub mod shared;
