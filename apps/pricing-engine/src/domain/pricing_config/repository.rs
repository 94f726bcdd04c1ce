//! Configuration Repository Trait

use async_trait::async_trait;

use super::aggregate::PricingConfiguration;
use super::errors::ConfigError;

/// Repository trait for the single pricing configuration document.
///
/// Implementations must guarantee read/replace atomicity: a `load` that
/// races a `replace` observes the document either wholly before or
/// wholly after the write, never a partially-applied update. Replaces
/// are serialized relative to each other (last-writer-wins).
#[async_trait]
pub trait ConfigurationRepository: Send + Sync {
    /// Load the current configuration snapshot, if one has been seeded.
    async fn load(&self) -> Result<Option<PricingConfiguration>, ConfigError>;

    /// Atomically replace the configuration document.
    async fn replace(&self, config: &PricingConfiguration) -> Result<(), ConfigError>;
}
