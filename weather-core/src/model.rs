use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;

fn default_units() -> String {
    "metric".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherParams {
    pub lat: f64,
    pub lon: f64,

    /// Passed to OpenWeather as-is: "metric", "imperial" or "standard".
    #[serde(default = "default_units")]
    pub units: String,
}

impl WeatherParams {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates { lat: self.lat, lon: self.lon }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AqiResult {
    pub aqi: Option<i64>,
    pub components: BTreeMap<String, Number>,
    /// Epoch seconds.
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherResult {
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub wind_speed: Option<f64>,
    pub condition: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}
