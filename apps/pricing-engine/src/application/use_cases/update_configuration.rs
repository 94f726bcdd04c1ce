//! Update Configuration Use Case

use std::sync::Arc;

use crate::domain::pricing_config::{
    ConfigError, ConfigurationRepository, ConfigurationRuleset, PricingConfiguration,
};

/// Use case for replacing the configuration after validation.
///
/// Replace-or-nothing: a candidate that fails validation never reaches
/// the repository, so the store is left unchanged on failure.
pub struct UpdateConfigurationUseCase<R>
where
    R: ConfigurationRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateConfigurationUseCase<R>
where
    R: ConfigurationRepository,
{
    /// Create a new UpdateConfigurationUseCase.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate and commit a replacement ruleset, returning the stored
    /// document (with its bumped version).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] with the offending field
    /// path, or a storage error from the repository.
    pub async fn execute(
        &self,
        ruleset: ConfigurationRuleset,
    ) -> Result<PricingConfiguration, ConfigError> {
        let candidate = match self.repo.load().await? {
            Some(current) => current.replaced(ruleset),
            None => PricingConfiguration::initial(ruleset),
        };

        candidate.validate()?;
        self.repo.replace(&candidate).await?;

        tracing::info!(
            version = candidate.version(),
            compositions = candidate.composition_rates().len(),
            diamond_types = candidate.diamond_pricing().len(),
            "Pricing configuration replaced"
        );

        Ok(candidate)
    }
}
