use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::LookupError,
    model::{LocationQuery, WeatherReading},
};

pub mod openweather;

/// Seam between the submission driver and the provider HTTP client, so tests
/// can substitute a scripted source.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Fetch the current conditions for one location.
    async fn current(&self, query: &LocationQuery) -> Result<WeatherReading, LookupError>;
}
