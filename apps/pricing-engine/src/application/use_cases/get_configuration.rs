//! Get Configuration Use Case

use std::sync::Arc;

use crate::application::dto::OptionCatalogDto;
use crate::domain::pricing_config::{ConfigError, ConfigurationRepository, PricingConfiguration};

/// Use case for reading the current configuration snapshot.
pub struct GetConfigurationUseCase<R>
where
    R: ConfigurationRepository,
{
    repo: Arc<R>,
}

impl<R> GetConfigurationUseCase<R>
where
    R: ConfigurationRepository,
{
    /// Create a new GetConfigurationUseCase.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Load the full configuration document (admin read).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if no configuration has ever
    /// been seeded.
    pub async fn full(&self) -> Result<PricingConfiguration, ConfigError> {
        self.repo.load().await?.ok_or(ConfigError::Missing)
    }

    /// Load the public option-picker subset: enabled codes only, no
    /// raw rates.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::full`].
    pub async fn picker_options(&self) -> Result<OptionCatalogDto, ConfigError> {
        let config = self.full().await?;
        Ok(OptionCatalogDto::from(&config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::InMemoryConfigurationRepository;

    #[tokio::test]
    async fn full_fails_before_first_seed() {
        let repo = Arc::new(InMemoryConfigurationRepository::new());
        let use_case = GetConfigurationUseCase::new(repo);

        let err = use_case.full().await.unwrap_err();
        assert_eq!(err, ConfigError::Missing);
    }

    #[tokio::test]
    async fn full_returns_seeded_snapshot() {
        let repo = Arc::new(InMemoryConfigurationRepository::new());
        let seeded = PricingConfiguration::default_configuration();
        repo.replace(&seeded).await.unwrap();

        let use_case = GetConfigurationUseCase::new(repo);
        let loaded = use_case.full().await.unwrap();
        assert_eq!(loaded, seeded);
    }

    #[tokio::test]
    async fn picker_options_hide_rates() {
        let repo = Arc::new(InMemoryConfigurationRepository::new());
        repo.replace(&PricingConfiguration::default_configuration())
            .await
            .unwrap();

        let use_case = GetConfigurationUseCase::new(repo);
        let catalog = use_case.picker_options().await.unwrap();
        assert!(!catalog.compositions.is_empty());
    }
}
