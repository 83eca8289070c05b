use crate::{Config, UpstreamError, upstream::openweather::OpenWeatherClient};
use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

pub mod openweather;

/// OpenWeather endpoints the gateway forwards to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    AirPollution,
    Weather,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::AirPollution => "air_pollution",
            Resource::Weather => "weather",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source of raw upstream documents. One call to `fetch` is one GET.
#[async_trait]
pub trait Upstream: Send + Sync + Debug {
    async fn fetch(&self, resource: Resource, query: &[(&str, String)])
    -> Result<Value, UpstreamError>;
}

/// Construct the OpenWeather client from config.
///
/// A missing API key is not an error here; it is reported by every call.
pub fn upstream_from_config(config: &Config) -> anyhow::Result<Box<dyn Upstream>> {
    let client = OpenWeatherClient::new(
        config.api_key().map(str::to_owned),
        config.api_base.clone(),
        config.timeout(),
    )?;

    Ok(Box::new(client))
}
