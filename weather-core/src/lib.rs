//! Core library for the weather gateway.
//!
//! This crate defines:
//! - Configuration (API key, upstream base URL, timeout)
//! - The OpenWeather upstream client and its error taxonomy
//! - Normalization of upstream documents into flat results
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod gateway;
pub mod model;
pub mod normalize;
pub mod upstream;

pub use config::Config;
pub use error::UpstreamError;
pub use gateway::{air_quality, current_weather};
pub use model::{AqiResult, Coordinates, WeatherParams, WeatherResult};
pub use upstream::{Resource, Upstream, upstream_from_config};
