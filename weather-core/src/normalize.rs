//! Flattening of OpenWeather documents into the gateway's response schema.
//!
//! Nothing here fails: a missing or mistyped field becomes `None`.

use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

use crate::model::{AqiResult, WeatherResult};

/// One hop into a JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Key(&'static str),
    Index(usize),
}

use Step::{Index, Key};

/// Follow `path` from `root`. Any hop that does not match the document's
/// shape (missing key, short array, wrong container type) yields `None`.
pub fn lookup<'a>(root: &'a Value, path: &[Step]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, step| match (step, node) {
        (Key(k), Value::Object(map)) => map.get(*k),
        (Index(i), Value::Array(items)) => items.get(*i),
        _ => None,
    })
}

fn number(root: &Value, path: &[Step]) -> Option<f64> {
    lookup(root, path).and_then(Value::as_f64)
}

fn integer(root: &Value, path: &[Step]) -> Option<i64> {
    lookup(root, path).and_then(Value::as_i64)
}

fn text(root: &Value, path: &[Step]) -> Option<String> {
    lookup(root, path).and_then(Value::as_str).map(str::to_owned)
}

fn object<'a>(root: &'a Value, path: &[Step]) -> Option<&'a Map<String, Value>> {
    lookup(root, path).and_then(Value::as_object)
}

// air_pollution: only the first entry of `list` is ever read.
const AQI_ENTRY: &[Step] = &[Key("list"), Index(0)];
const AQI_INDEX: &[Step] = &[Key("main"), Key("aqi")];
const AQI_COMPONENTS: &[Step] = &[Key("components")];
const AQI_TIMESTAMP: &[Step] = &[Key("dt")];

// weather
const TEMPERATURE: &[Step] = &[Key("main"), Key("temp")];
const FEELS_LIKE: &[Step] = &[Key("main"), Key("feels_like")];
const HUMIDITY: &[Step] = &[Key("main"), Key("humidity")];
const PRESSURE: &[Step] = &[Key("main"), Key("pressure")];
const WIND_SPEED: &[Step] = &[Key("wind"), Key("speed")];
const CONDITION: &[Step] = &[Key("weather"), Index(0), Key("description")];
const CITY: &[Step] = &[Key("name")];
const COUNTRY: &[Step] = &[Key("sys"), Key("country")];

pub fn normalize_aqi(doc: &Value) -> AqiResult {
    let Some(entry) = lookup(doc, AQI_ENTRY) else {
        return AqiResult::default();
    };

    let components: BTreeMap<String, Number> = object(entry, AQI_COMPONENTS)
        .map(|map| {
            map.iter()
                .filter_map(|(name, value)| match value {
                    Value::Number(n) => Some((name.clone(), n.clone())),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    AqiResult {
        aqi: integer(entry, AQI_INDEX),
        components,
        timestamp: integer(entry, AQI_TIMESTAMP),
    }
}

pub fn normalize_weather(doc: &Value) -> WeatherResult {
    WeatherResult {
        temperature: number(doc, TEMPERATURE),
        feels_like: number(doc, FEELS_LIKE),
        humidity: number(doc, HUMIDITY),
        pressure: number(doc, PRESSURE),
        wind_speed: number(doc, WIND_SPEED),
        condition: text(doc, CONDITION),
        city: text(doc, CITY),
        country: text(doc, COUNTRY),
    }
}
