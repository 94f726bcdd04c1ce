//! Calculate Price Use Case
//!
//! The single calculation entry point consumed by the storefront, the
//! cart/checkout pipeline, and the admin test calculator. Prices are
//! never computed anywhere else, so the surfaces cannot disagree.

use std::sync::Arc;

use crate::application::dto::PricingRequestDto;
use crate::domain::price_calculation::{PriceBreakdown, PriceCalculator, PricingError};
use crate::domain::pricing_config::ConfigurationRepository;

/// Use case for computing a price breakdown against the current
/// configuration snapshot.
pub struct CalculatePriceUseCase<R>
where
    R: ConfigurationRepository,
{
    repo: Arc<R>,
}

impl<R> CalculatePriceUseCase<R>
where
    R: ConfigurationRepository,
{
    /// Create a new CalculatePriceUseCase.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Execute the use case.
    ///
    /// Loads a snapshot once, then computes purely against it: a
    /// concurrent configuration write does not retroactively affect a
    /// price already being computed.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] naming the invalid attribute, or a
    /// configuration availability error.
    pub async fn execute(&self, request: PricingRequestDto) -> Result<PriceBreakdown, PricingError> {
        let request = request.into_domain()?;
        let config = self
            .repo
            .load()
            .await?
            .ok_or(PricingError::ConfigurationMissing)?;

        PriceCalculator::new(&config).calculate(&request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing_config::{ConfigError, PricingConfiguration};
    use crate::infrastructure::persistence::InMemoryConfigurationRepository;
    use rust_decimal_macros::dec;

    fn request() -> PricingRequestDto {
        PricingRequestDto {
            weight: dec!(5),
            composition: "14K".to_string(),
            material: "yellow-gold".to_string(),
            diamond_type: Some("none".to_string()),
            diamond_carat: None,
            ring_size: None,
        }
    }

    #[tokio::test]
    async fn calculates_against_seeded_configuration() {
        let repo = Arc::new(InMemoryConfigurationRepository::new());
        repo.replace(&PricingConfiguration::default_configuration())
            .await
            .unwrap();

        let use_case = CalculatePriceUseCase::new(repo);
        let breakdown = use_case.execute(request()).await.unwrap();

        // 5g x $42/g x 1.0 with defaults and no other dials.
        assert_eq!(breakdown.metal_cost.amount(), dec!(210));
        assert_eq!(breakdown.final_price.amount(), dec!(210.00));
    }

    #[tokio::test]
    async fn missing_configuration_is_reported() {
        let repo = Arc::new(InMemoryConfigurationRepository::new());
        let use_case = CalculatePriceUseCase::new(repo);

        let err = use_case.execute(request()).await.unwrap_err();
        assert_eq!(err, PricingError::ConfigurationMissing);
    }

    #[tokio::test]
    async fn repository_failure_maps_to_unavailable() {
        struct FailingRepo;

        #[async_trait::async_trait]
        impl ConfigurationRepository for FailingRepo {
            async fn load(&self) -> Result<Option<PricingConfiguration>, ConfigError> {
                Err(ConfigError::Unavailable {
                    message: "storage timeout".to_string(),
                })
            }

            async fn replace(&self, _config: &PricingConfiguration) -> Result<(), ConfigError> {
                Err(ConfigError::Unavailable {
                    message: "storage timeout".to_string(),
                })
            }
        }

        let use_case = CalculatePriceUseCase::new(Arc::new(FailingRepo));
        let err = use_case.execute(request()).await.unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_UNAVAILABLE");
    }

    #[tokio::test]
    async fn update_does_not_affect_already_returned_price() {
        let repo = Arc::new(InMemoryConfigurationRepository::new());
        repo.replace(&PricingConfiguration::default_configuration())
            .await
            .unwrap();

        let use_case = CalculatePriceUseCase::new(Arc::clone(&repo));
        let before = use_case.execute(request()).await.unwrap();

        let mut ruleset = PricingConfiguration::default_configuration().ruleset().clone();
        ruleset.composition_rates[1].price_per_gram = dec!(60);
        let current = repo.load().await.unwrap().unwrap();
        repo.replace(&current.replaced(ruleset)).await.unwrap();

        // The earlier breakdown is a value, untouched by the write; a
        // fresh calculation sees the new rate.
        assert_eq!(before.metal_cost.amount(), dec!(210));
        let after = use_case.execute(request()).await.unwrap();
        assert_eq!(after.metal_cost.amount(), dec!(300));
    }
}
