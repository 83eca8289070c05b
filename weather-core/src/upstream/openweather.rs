use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::{error::Error as _, fmt, time::Duration};
use tracing::{debug, warn};

use crate::UpstreamError;

use super::{Resource, Upstream};

/// Query parameter OpenWeather reads the API key from.
pub const API_KEY_PARAM: &str = "appid";

#[derive(Clone)]
pub struct OpenWeatherClient {
    api_key: Option<String>,
    base_url: String,
    http: Client,
}

impl fmt::Debug for OpenWeatherClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OpenWeatherClient {
    pub fn new(
        api_key: Option<String>,
        base_url: String,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.as_str())
    }
}

#[async_trait]
impl Upstream for OpenWeatherClient {
    async fn fetch(
        &self,
        resource: Resource,
        query: &[(&str, String)],
    ) -> Result<Value, UpstreamError> {
        let api_key = self.api_key.as_deref().ok_or(UpstreamError::MissingApiKey)?;
        let params = with_api_key(query, api_key);

        debug!(%resource, "calling OpenWeather");

        let res = self
            .http
            .get(self.url(resource))
            .query(&params)
            .send()
            .await
            .map_err(|e| unavailable(resource, e))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| unavailable(resource, e))?;

        if !status.is_success() {
            warn!(%resource, %status, body = %truncate_body(&body), "OpenWeather request failed");
            return Err(UpstreamError::Status { status: status.as_u16(), body });
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(%resource, error = %e, body = %truncate_body(&body), "OpenWeather returned non-JSON body");
            UpstreamError::MalformedBody(e.to_string())
        })
    }
}

/// Caller pairs in order, minus any `appid`, followed by the configured key.
fn with_api_key<'a>(query: &'a [(&'a str, String)], api_key: &'a str) -> Vec<(&'a str, &'a str)> {
    query
        .iter()
        .filter(|(name, _)| *name != API_KEY_PARAM)
        .map(|(name, value)| (*name, value.as_str()))
        .chain(std::iter::once((API_KEY_PARAM, api_key)))
        .collect()
}

// The request URL carries the key, so it is stripped before the text is exposed.
fn unavailable(resource: Resource, err: reqwest::Error) -> UpstreamError {
    let err = err.without_url();

    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    warn!(%resource, error = %text, "OpenWeather unreachable");
    UpstreamError::Unavailable(text)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
