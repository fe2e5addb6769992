//! HTTP surface of the Tempify weather proxy.
//!
//! Routes:
//! - `GET /weather?city=<name>` relays OpenWeather's current conditions
//! - `GET /health` reports liveness
//!
//! Both sit behind the permissive CORS middleware in [`cors`].

use anyhow::Context;
use axum::{Router, middleware::from_fn, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tempify_core::{Config, WeatherProvider, provider_from_config};

pub mod cors;
pub mod error;
pub mod handlers;

pub const APP_NAME: &str = "Tempify Weather API";

#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// `None` when no API key is configured; weather requests then fail with 500.
    pub provider: Option<Arc<dyn WeatherProvider>>,
}

impl AppState {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider: Some(provider) }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            provider: provider_from_config(config).ok().map(Arc::from),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/weather", get(handlers::weather))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(from_fn(cors::permissive_cors))
        .with_state(state)
}

/// Bind and serve until the process is stopped. Fails only if the listener cannot bind
/// or the server loop errors out.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    log_banner(config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Server failed to start on {addr}"))?;

    let app = build_app(AppState::from_config(config));
    axum::serve(listener, app).await?;

    Ok(())
}

fn log_banner(config: &Config) {
    let port = config.port;
    tracing::info!("{APP_NAME} starting on port {port}");
    tracing::info!("weather endpoint: http://localhost:{port}/weather?city=<city_name>");
    tracing::info!("health check: http://localhost:{port}/health");

    if !config.has_api_key() {
        tracing::warn!(
            "OpenWeather API key is not configured; set {} (get a free key at https://openweathermap.org/api)",
            tempify_core::config::API_KEY_ENV
        );
    }
}
