//! Pricing Engine Binary
//!
//! Starts the jewelry pricing engine HTTP server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin pricing-engine
//! ```
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use pricing_engine::application::use_cases::{
    CalculatePriceUseCase, GetConfigurationUseCase, UpdateConfigurationUseCase,
};
use pricing_engine::domain::pricing_config::{ConfigurationRepository, PricingConfiguration};
use pricing_engine::infrastructure::http::{AppState, create_router};
use pricing_engine::infrastructure::persistence::InMemoryConfigurationRepository;
use tokio::net::TcpListener;
use tokio::signal;

/// Default HTTP server port.
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Parsed configuration from environment variables.
struct EngineConfig {
    http_port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting Pricing Engine");

    let config = parse_config();
    tracing::info!(http_port = config.http_port, "Configuration loaded");

    let repo = Arc::new(InMemoryConfigurationRepository::new());
    seed_configuration(&repo).await?;

    let state = AppState {
        get_configuration: Arc::new(GetConfigurationUseCase::new(Arc::clone(&repo))),
        update_configuration: Arc::new(UpdateConfigurationUseCase::new(Arc::clone(&repo))),
        calculate_price: Arc::new(CalculatePriceUseCase::new(Arc::clone(&repo))),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let app = create_router(state);

    let http_addr: SocketAddr = format!("0.0.0.0:{}", config.http_port).parse()?;

    tracing::info!(%http_addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /api/v1/configuration");
    tracing::info!("  PUT  /api/v1/configuration");
    tracing::info!("  GET  /api/v1/configuration/options");
    tracing::info!("  POST /api/v1/calculate");

    let listener = TcpListener::bind(http_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Pricing engine stopped");
    Ok(())
}

/// Seed the documented default configuration if the store is empty, so
/// the engine can serve prices from first boot.
async fn seed_configuration(repo: &Arc<InMemoryConfigurationRepository>) -> anyhow::Result<()> {
    if repo.load().await?.is_none() {
        let config = PricingConfiguration::default_configuration();
        repo.replace(&config).await?;
        tracing::info!(
            version = config.version(),
            compositions = config.composition_rates().len(),
            "Seeded default pricing configuration"
        );
    }
    Ok(())
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses static directive strings that are compile-time constants guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "pricing_engine=info"
                    .parse()
                    .expect("static directive 'pricing_engine=info' is valid"),
            ),
        )
        .init();
}

/// Parse configuration from environment variables.
fn parse_config() -> EngineConfig {
    let http_port: u16 = std::env::var("HTTP_PORT")
        .unwrap_or_else(|_| DEFAULT_HTTP_PORT.to_string())
        .parse()
        .unwrap_or(DEFAULT_HTTP_PORT);

    EngineConfig { http_port }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed. This is intentional because:
/// - Signal handlers are critical for graceful shutdown
/// - Failure to install handlers means the process cannot respond to termination signals
/// - It is better to fail fast during startup than to have an unresponsive process
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
