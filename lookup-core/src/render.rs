//! HTML views for the host surface.
//!
//! The widget owns one output region; each `View` is a complete replacement
//! for its contents.

use crate::model::WeatherReading;

/// Base URL for OpenWeatherMap condition icons.
const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Render instruction handed to the host surface.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Transient placeholder shown while a request is in flight.
    Fetching,
    /// A completed reading.
    Reading(WeatherReading),
    /// A failed lookup, already reduced to display text.
    Failure(String),
}

/// Output sink injected by the host. The implementor owns exclusive write
/// access to the display region.
pub trait RenderTarget {
    fn render(&mut self, view: &View);
}

impl View {
    /// Emit the HTML fragment for this view.
    pub fn to_html(&self) -> String {
        match self {
            View::Fetching => "<p>Fetching weather...</p>".to_string(),
            View::Failure(message) => format!("<p class=\"text-danger\">{message}</p>"),
            View::Reading(reading) => reading_html(reading),
        }
    }
}

fn reading_html(reading: &WeatherReading) -> String {
    let description = capitalize_first(&reading.description);

    format!(
        "<h2 class=\"mb-3\">{name}</h2>\n\
         <img src=\"{ICON_BASE_URL}/{icon}@2x.png\" alt=\"{description}\" class=\"weather-icon\">\n\
         <p><strong>Temperature:</strong> {temp}°C (Feels like: {feels}°C)</p>\n\
         <p><strong>Description:</strong> {description}</p>\n\
         <p><strong>Humidity:</strong> {humidity}%</p>\n\
         <p><strong>Wind Speed:</strong> {wind} km/h</p>\n\
         <p class=\"text-muted\">Observed: {observed} UTC</p>",
        name = reading.location_name,
        icon = reading.icon,
        temp = reading.temperature_c,
        feels = reading.feels_like_c,
        humidity = reading.humidity_pct,
        wind = wind_speed_kmh(reading.wind_speed_mps),
        observed = reading.observed_at.format("%Y-%m-%d %H:%M"),
    )
}

/// m/s to km/h (×3.6), one decimal place.
pub fn wind_speed_kmh(mps: f64) -> String {
    format!("{:.1}", mps * 3.6)
}

/// Uppercase the first character for display; provider descriptions arrive
/// lowercased.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
