//! HTTP adapter.

mod controller;
mod response;

pub use controller::{AppState, create_router};
pub use response::{ApiErrorResponse, HealthResponse};
