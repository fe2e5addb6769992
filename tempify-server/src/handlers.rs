use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tempify_core::{ErrorEnvelope, WeatherError, WeatherPayload, WeatherQuery};

use crate::{APP_NAME, AppState, error::ApiError};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub app: &'static str,
}

pub async fn weather(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<WeatherPayload>, ApiError> {
    // First `city` wins when the key is repeated.
    let city = params
        .ok()
        .and_then(|Query(pairs)| pairs.into_iter().find(|(key, _)| key == "city"))
        .map(|(_, value)| value);
    let query = WeatherQuery::new(city.as_deref()).ok_or(WeatherError::MissingCity)?;

    let provider = state.provider.as_ref().ok_or(WeatherError::ApiKeyNotConfigured)?;

    let payload = provider.current_weather(&query).await?;
    tracing::info!(city = query.city(), "successfully fetched weather");

    Ok(Json(payload))
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        app: APP_NAME,
    })
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorEnvelope::new("Not found"))).into_response()
}
