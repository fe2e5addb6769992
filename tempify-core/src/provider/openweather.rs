use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::{
    error::WeatherError,
    model::{WeatherPayload, WeatherQuery},
    translate::translate,
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Raw reply from OpenWeather before any interpretation.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    /// One GET against the current-weather endpoint, no retries.
    pub async fn fetch(&self, city: &str) -> Result<UpstreamResponse, WeatherError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(WeatherError::Fetch)?;

        let status = res.status();
        tracing::debug!(city, %status, "OpenWeather responded");
        let body = res.bytes().await.map_err(WeatherError::Read)?;

        Ok(UpstreamResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherPayload, WeatherError> {
        let UpstreamResponse { status, body } = self.fetch(query.city()).await?;
        translate(status, &body)
    }
}
