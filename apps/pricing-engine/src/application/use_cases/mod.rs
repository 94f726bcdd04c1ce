//! Application Use Cases

mod calculate_price;
mod get_configuration;
mod update_configuration;

pub use calculate_price::CalculatePriceUseCase;
pub use get_configuration::GetConfigurationUseCase;
pub use update_configuration::UpdateConfigurationUseCase;
