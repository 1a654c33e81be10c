use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::Config,
    error::LookupError,
    model::{LocationQuery, WeatherReading},
};

use super::WeatherSource;

/// HTTP client for the OpenWeatherMap current-conditions endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherSource {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherSource {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    /// Build a source from config. The credential is copied verbatim; the
    /// placeholder check happens in the driver before any request is sent.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.clone(), config.base_url.clone())
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

/// Error bodies carry an optional human-readable `message` field.
#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

#[async_trait]
impl WeatherSource for OpenWeatherSource {
    async fn current(&self, query: &LocationQuery) -> Result<WeatherReading, LookupError> {
        debug!(city = query.as_str(), "requesting current conditions");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", query.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| LookupError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(provider_error(status.as_u16(), &body));
        }

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::Transport(e.to_string()))?;

        let observed_at = DateTime::<Utc>::from_timestamp(parsed.dt, 0).unwrap_or_else(Utc::now);

        // An empty `weather` array is legal; fall back to a neutral
        // description and no icon.
        let (description, icon) = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| (w.description, w.icon))
            .unwrap_or_else(|| ("N/A".to_string(), String::new()));

        Ok(WeatherReading {
            location_name: parsed.name,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            description,
            icon,
            wind_speed_mps: parsed.wind.speed,
            observed_at,
        })
    }
}

/// Map a non-success response to a provider error, preferring the
/// provider-supplied `message` over the bare status code.
fn provider_error(status: u16, body: &str) -> LookupError {
    let message = serde_json::from_str::<OwErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("HTTP error, status {status}"));

    LookupError::Provider { status, message }
}
