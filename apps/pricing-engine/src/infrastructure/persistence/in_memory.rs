//! In-memory configuration store.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::pricing_config::{
    ConfigError, ConfigurationRepository, PricingConfiguration,
};

/// In-memory implementation of `ConfigurationRepository`.
///
/// The document is held behind an `Arc` and a replace swaps the
/// pointer, so readers always see a whole document and the lock is only
/// ever held for a pointer clone or a pointer assignment. Document
/// copies happen outside the lock on both paths.
#[derive(Debug, Default)]
pub struct InMemoryConfigurationRepository {
    current: RwLock<Option<Arc<PricingConfiguration>>>,
}

impl InMemoryConfigurationRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    /// Whether a configuration document has been stored yet.
    #[must_use]
    pub fn is_seeded(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Remove the stored document (for test setup).
    pub fn clear(&self) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    fn snapshot(&self) -> Option<Arc<PricingConfiguration>> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        guard.clone()
    }
}

#[async_trait]
impl ConfigurationRepository for InMemoryConfigurationRepository {
    async fn load(&self) -> Result<Option<PricingConfiguration>, ConfigError> {
        Ok(self.snapshot().map(|config| (*config).clone()))
    }

    async fn replace(&self, config: &PricingConfiguration) -> Result<(), ConfigError> {
        let next = Arc::new(config.clone());
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(next);
        Ok(())
    }
}
