//! Turns a raw OpenWeather reply into either a payload or a [`WeatherError`].
//!
//! Checks run in a fixed order and the first match wins:
//! 1. non-200 status with a `message` → `Weather API error: <message>`
//! 2. non-200 status otherwise → `City not found or invalid request`
//! 3. 200 with an undecodable body → `Failed to parse weather data`
//! 4. 200 with a valid body → the payload
//!
//! Transport and body-read failures never reach this module; the client
//! reports them before a status is available.

use reqwest::StatusCode;

use crate::{
    error::WeatherError,
    model::{ProviderError, WeatherPayload},
};

pub fn translate(status: StatusCode, body: &[u8]) -> Result<WeatherPayload, WeatherError> {
    if status != StatusCode::OK {
        return Err(upstream_error(status, body));
    }

    serde_json::from_slice(body).map_err(WeatherError::Parse)
}

fn upstream_error(status: StatusCode, body: &[u8]) -> WeatherError {
    // A malformed error body is not fatal; it only loses the provider's wording.
    match serde_json::from_slice::<ProviderError>(body) {
        Ok(ProviderError { message: Some(message) }) => WeatherError::Upstream { status, message },
        _ => WeatherError::UpstreamUnexplained { status },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: &str = r#"{
        "weather":[{"id":803,"main":"Clouds","description":"broken clouds","icon":"04d"}],
        "main":{"temp":14.2,"feels_like":13.5,"temp_min":12.9,"temp_max":15.6,"pressure":1012,"humidity":72},
        "visibility":10000,
        "wind":{"speed":4.6,"deg":250},
        "clouds":{"all":75},
        "sys":{"country":"GB","sunrise":1697437800,"sunset":1697476200},
        "name":"London",
        "cod":200
    }"#;

    #[test]
    fn success_passes_payload_through() {
        let payload = translate(StatusCode::OK, LONDON.as_bytes()).expect("valid payload");
        assert_eq!(payload.name, "London");
        assert_eq!(payload.sys.country, "GB");
        assert_eq!(payload.weather[0].description, "broken clouds");
        assert_eq!(payload.main.humidity, 72);
        assert_eq!(payload.cod, 200);
    }

    #[test]
    fn explicit_nulls_decode_to_defaults() {
        let payload = translate(
            StatusCode::OK,
            br#"{"name":"Oslo","visibility":null,"sys":{"country":null},"cod":200}"#,
        )
        .expect("nulls are tolerated");
        assert_eq!(payload.name, "Oslo");
        assert_eq!(payload.visibility, 0);
        assert_eq!(payload.sys.country, "");
    }

    #[test]
    fn provider_message_is_surfaced_with_provider_status() {
        let err = translate(StatusCode::NOT_FOUND, br#"{"cod":"404","message":"city not found"}"#)
            .unwrap_err();
        assert!(matches!(err, WeatherError::Upstream { status, .. } if status == StatusCode::NOT_FOUND));
        assert_eq!(err.to_string(), "Weather API error: city not found");
    }

    #[test]
    fn missing_message_falls_back_to_generic_error() {
        let err = translate(StatusCode::UNAUTHORIZED, br#"{"cod":401}"#).unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "City not found or invalid request");
    }

    #[test]
    fn malformed_error_body_falls_back_to_generic_error() {
        let err = translate(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>").unwrap_err();
        assert!(matches!(
            err,
            WeatherError::UpstreamUnexplained { status } if status == StatusCode::BAD_GATEWAY
        ));
    }

    #[test]
    fn non_string_message_falls_back_to_generic_error() {
        let err = translate(StatusCode::NOT_FOUND, br#"{"message":42}"#).unwrap_err();
        assert!(matches!(err, WeatherError::UpstreamUnexplained { .. }));
    }

    #[test]
    fn non_200_success_codes_are_still_errors() {
        let err = translate(StatusCode::NO_CONTENT, b"").unwrap_err();
        assert_eq!(err.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn malformed_success_body_is_parse_error() {
        let err = translate(StatusCode::OK, b"{\"name\": ").unwrap_err();
        assert!(matches!(err, WeatherError::Parse(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
