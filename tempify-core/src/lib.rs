//! Core library for the Tempify weather proxy.
//!
//! This crate defines:
//! - Configuration loading (file, environment)
//! - The OpenWeather client and the translation of its replies
//! - Shared domain models and the error taxonomy
//!
//! It is used by `tempify-server`, but holds no HTTP server code itself.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod translate;

pub use config::Config;
pub use error::WeatherError;
pub use model::{ErrorEnvelope, WeatherPayload, WeatherQuery};
pub use provider::{WeatherProvider, provider_from_config};
