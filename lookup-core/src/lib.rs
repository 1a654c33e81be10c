//! Core library for the weather lookup widget.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - The OpenWeatherMap source and its error mapping
//! - Render views and the submission driver
//!
//! It is used by `lookup-cli`, but can also be embedded by other hosts: the
//! host injects an input string and a [`RenderTarget`] output sink, and the
//! widget drives one request/response/render cycle per submission.

pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod render;
pub mod source;

pub use config::Config;
pub use error::LookupError;
pub use lookup::WeatherLookup;
pub use model::{LocationQuery, WeatherReading};
pub use render::{RenderTarget, View};
pub use source::{WeatherSource, openweather::OpenWeatherSource};
