//! The two gateway operations: one upstream call, then normalization.

use crate::{
    AqiResult, Coordinates, UpstreamError, WeatherParams, WeatherResult,
    normalize::{normalize_aqi, normalize_weather},
    upstream::{Resource, Upstream},
};

impl Coordinates {
    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("lat", self.lat.to_string()), ("lon", self.lon.to_string())]
    }
}

pub async fn air_quality(
    upstream: &dyn Upstream,
    coordinates: &Coordinates,
) -> Result<AqiResult, UpstreamError> {
    let doc = upstream.fetch(Resource::AirPollution, &coordinates.query()).await?;
    Ok(normalize_aqi(&doc))
}

pub async fn current_weather(
    upstream: &dyn Upstream,
    params: &WeatherParams,
) -> Result<WeatherResult, UpstreamError> {
    let mut query = params.coordinates().query();
    query.push(("units", params.units.clone()));

    let doc = upstream.fetch(Resource::Weather, &query).await?;
    Ok(normalize_weather(&doc))
}
