use reqwest::StatusCode;
use thiserror::Error;

use crate::model::ErrorEnvelope;

/// Every way a weather lookup can fail.
///
/// The `Display` output is the message shown to callers; transport and decode
/// causes stay attached as `source` for server-side logging only.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("City parameter is required")]
    MissingCity,

    #[error("API key not configured. Set OPENWEATHER_API_KEY to your OpenWeather API key")]
    ApiKeyNotConfigured,

    #[error("Failed to fetch weather data")]
    Fetch(#[source] reqwest::Error),

    #[error("Failed to read weather data")]
    Read(#[source] reqwest::Error),

    #[error("Weather API error: {message}")]
    Upstream { status: StatusCode, message: String },

    #[error("City not found or invalid request")]
    UpstreamUnexplained { status: StatusCode },

    #[error("Failed to parse weather data")]
    Parse(#[source] serde_json::Error),
}

impl WeatherError {
    /// HTTP status returned to the caller. Upstream failures mirror the provider's code.
    pub fn status(&self) -> StatusCode {
        match self {
            WeatherError::MissingCity => StatusCode::BAD_REQUEST,
            WeatherError::Upstream { status, .. } | WeatherError::UpstreamUnexplained { status } => {
                *status
            }
            WeatherError::ApiKeyNotConfigured
            | WeatherError::Fetch(_)
            | WeatherError::Read(_)
            | WeatherError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope::new(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_and_config_errors_map_to_fixed_statuses() {
        assert_eq!(WeatherError::MissingCity.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            WeatherError::MissingCity.envelope(),
            ErrorEnvelope::new("City parameter is required")
        );
        assert_eq!(
            WeatherError::ApiKeyNotConfigured.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn upstream_errors_mirror_provider_status() {
        let err = WeatherError::Upstream {
            status: StatusCode::NOT_FOUND,
            message: "city not found".into(),
        };
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Weather API error: city not found");

        let err = WeatherError::UpstreamUnexplained { status: StatusCode::UNAUTHORIZED };
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "City not found or invalid request");
    }

    #[test]
    fn parse_error_hides_decoder_detail() {
        let cause = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = WeatherError::Parse(cause);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.envelope().error, "Failed to parse weather data");
        assert!(std::error::Error::source(&err).is_some());
    }
}
