use crate::{Config, WeatherError, WeatherPayload, WeatherQuery, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherPayload, WeatherError>;
}

/// Construct the OpenWeather provider from config.
///
/// Fails with [`WeatherError::ApiKeyNotConfigured`] when the key is unset or
/// still the placeholder, so callers can keep serving and report the problem
/// per request.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    let api_key = config.api_key().ok_or(WeatherError::ApiKeyNotConfigured)?;

    Ok(Box::new(OpenWeatherProvider::with_base_url(
        api_key.to_owned(),
        config.base_url.clone(),
    )))
}
