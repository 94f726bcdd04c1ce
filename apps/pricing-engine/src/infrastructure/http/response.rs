//! HTTP response DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::price_calculation::PricingError;
use crate::domain::pricing_config::ConfigError;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// API error response.
///
/// `code` is the machine-readable taxonomy code; `fieldPath` is present
/// only for configuration validation failures and points at the single
/// offending value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Offending field path, for validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_path: Option<String>,
}

impl From<&ConfigError> for ApiErrorResponse {
    fn from(err: &ConfigError) -> Self {
        let field_path = match err {
            ConfigError::Validation { field_path, .. } => Some(field_path.clone()),
            ConfigError::Missing | ConfigError::Unavailable { .. } => None,
        };
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            field_path,
        }
    }
}

impl From<&PricingError> for ApiErrorResponse {
    fn from(err: &PricingError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            field_path: None,
        }
    }
}
