use axum::{
    Json,
    response::{IntoResponse, Response},
};
use tempify_core::WeatherError;

/// HTTP face of [`WeatherError`]: logs the full cause, returns only the envelope.
#[derive(Debug)]
pub struct ApiError(pub WeatherError);

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = err.status();

        match &err {
            WeatherError::MissingCity => tracing::debug!("rejected weather request without city"),
            WeatherError::ApiKeyNotConfigured => {
                tracing::error!("weather request refused: OpenWeather API key is not configured")
            }
            WeatherError::Fetch(cause) => {
                tracing::error!(error = ?cause, "error fetching weather data")
            }
            WeatherError::Read(cause) => {
                tracing::error!(error = ?cause, "error reading weather response body")
            }
            WeatherError::Upstream { status, message } => {
                tracing::warn!(%status, %message, "weather API reported an error")
            }
            WeatherError::UpstreamUnexplained { status } => {
                tracing::warn!(%status, "weather API reported an error without a message")
            }
            WeatherError::Parse(cause) => {
                tracing::error!(error = %cause, "error parsing weather JSON")
            }
        }

        (status, Json(err.envelope())).into_response()
    }
}
