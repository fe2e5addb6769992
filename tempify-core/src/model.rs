use serde::{Deserialize, Deserializer, Serialize};

/// A validated city lookup. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
}

impl WeatherQuery {
    /// Returns `None` when the city is absent or blank. The value is kept verbatim.
    pub fn new(city: Option<&str>) -> Option<Self> {
        let city = city?;
        if city.trim().is_empty() {
            return None;
        }
        Some(Self { city: city.to_string() })
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Current conditions as reported by OpenWeather, relayed to callers as-is.
///
/// Every field defaults when the provider omits it or sends `null`, so only
/// malformed JSON (or a field of the wrong type) is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub weather: Vec<Condition>,
    #[serde(deserialize_with = "null_as_default")]
    pub main: MainReadings,
    #[serde(deserialize_with = "null_as_default")]
    pub visibility: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub wind: Wind,
    #[serde(deserialize_with = "null_as_default")]
    pub clouds: Clouds,
    #[serde(deserialize_with = "null_as_default")]
    pub sys: SunAndCountry,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cod: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Condition {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub main: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MainReadings {
    #[serde(deserialize_with = "null_as_default")]
    pub temp: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub feels_like: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub temp_min: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub temp_max: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub pressure: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub humidity: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wind {
    #[serde(deserialize_with = "null_as_default")]
    pub speed: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub deg: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clouds {
    #[serde(deserialize_with = "null_as_default")]
    pub all: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunAndCountry {
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sunrise: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub sunset: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Error body returned by OpenWeather on non-200 responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderError {
    #[serde(default)]
    pub message: Option<String>,
}

/// Uniform `{"error": "..."}` body for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
