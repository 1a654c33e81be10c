use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// A trimmed, non-empty location string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Trim `raw` and reject empty input before anything touches the network.
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LookupError::EmptyLocation);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display-ready weather snapshot for one location.
///
/// Built fresh from each provider response, rendered once, then dropped.
/// Wind speed stays in m/s here; the km/h conversion happens at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub location_name: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub description: String,
    pub icon: String,
    pub wind_speed_mps: f64,
    pub observed_at: DateTime<Utc>,
}
