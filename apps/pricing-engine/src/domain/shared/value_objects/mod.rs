//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod codes;
mod money;
mod timestamp;
mod weight;

pub use codes::{CompositionCode, DiamondTypeCode, MaterialCode, RingSize};
pub use money::Money;
pub use timestamp::Timestamp;
pub use weight::Weight;
