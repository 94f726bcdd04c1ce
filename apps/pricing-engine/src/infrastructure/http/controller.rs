//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to application use cases.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};

use crate::application::dto::{PriceBreakdownDto, PricingRequestDto};
use crate::application::use_cases::{
    CalculatePriceUseCase, GetConfigurationUseCase, UpdateConfigurationUseCase,
};
use crate::domain::price_calculation::PricingError;
use crate::domain::pricing_config::{ConfigError, ConfigurationRepository, ConfigurationRuleset};

use super::response::{ApiErrorResponse, HealthResponse};

/// Application state shared across handlers.
pub struct AppState<R>
where
    R: ConfigurationRepository,
{
    /// Use case for reading the configuration.
    pub get_configuration: Arc<GetConfigurationUseCase<R>>,
    /// Use case for replacing the configuration.
    pub update_configuration: Arc<UpdateConfigurationUseCase<R>>,
    /// Use case for calculating prices.
    pub calculate_price: Arc<CalculatePriceUseCase<R>>,
    /// Application version.
    pub version: String,
}

impl<R> Clone for AppState<R>
where
    R: ConfigurationRepository,
{
    fn clone(&self) -> Self {
        Self {
            get_configuration: Arc::clone(&self.get_configuration),
            update_configuration: Arc::clone(&self.update_configuration),
            calculate_price: Arc::clone(&self.calculate_price),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<R>(state: AppState<R>) -> Router
where
    R: ConfigurationRepository + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/configuration", get(get_configuration))
        .route("/api/v1/configuration", put(put_configuration))
        .route("/api/v1/configuration/options", get(get_options))
        .route("/api/v1/calculate", post(calculate))
        .with_state(state)
}

fn config_error_response(err: &ConfigError) -> Response {
    let status = match err {
        ConfigError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ConfigError::Missing | ConfigError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json(ApiErrorResponse::from(err))).into_response()
}

fn pricing_error_response(err: &PricingError) -> Response {
    let status = match err {
        PricingError::ConfigurationMissing | PricingError::ConfigurationUnavailable { .. } => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (status, Json(ApiErrorResponse::from(err))).into_response()
}

/// Health check endpoint.
async fn health_check<R>(State(state): State<AppState<R>>) -> impl IntoResponse
where
    R: ConfigurationRepository,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Full configuration read (admin).
async fn get_configuration<R>(State(state): State<AppState<R>>) -> Response
where
    R: ConfigurationRepository,
{
    match state.get_configuration.full().await {
        Ok(config) => (StatusCode::OK, Json(config)).into_response(),
        Err(err) => config_error_response(&err),
    }
}

/// Option-picker subset read (public).
async fn get_options<R>(State(state): State<AppState<R>>) -> Response
where
    R: ConfigurationRepository,
{
    match state.get_configuration.picker_options().await {
        Ok(catalog) => (StatusCode::OK, Json(catalog)).into_response(),
        Err(err) => config_error_response(&err),
    }
}

/// Validated whole-document replace (admin).
async fn put_configuration<R>(
    State(state): State<AppState<R>>,
    Json(ruleset): Json<ConfigurationRuleset>,
) -> Response
where
    R: ConfigurationRepository,
{
    match state.update_configuration.execute(ruleset).await {
        Ok(stored) => (StatusCode::OK, Json(stored)).into_response(),
        Err(err) => {
            tracing::warn!(code = err.error_code(), "Configuration replace rejected");
            config_error_response(&err)
        }
    }
}

/// Price calculation endpoint (public).
async fn calculate<R>(
    State(state): State<AppState<R>>,
    Json(request): Json<PricingRequestDto>,
) -> Response
where
    R: ConfigurationRepository,
{
    match state.calculate_price.execute(request).await {
        Ok(breakdown) => {
            (StatusCode::OK, Json(PriceBreakdownDto::from(breakdown))).into_response()
        }
        Err(err) => pricing_error_response(&err),
    }
}
