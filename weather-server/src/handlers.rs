//! HTTP handlers and the mapping of upstream failures to responses.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use weather_core::{
    AqiResult, Coordinates, Upstream, UpstreamError, WeatherParams, WeatherResult, air_quality,
    current_weather,
};

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub upstream: Arc<dyn Upstream>,
}

impl AppState {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Upstream failure rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub UpstreamError);

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            UpstreamError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            UpstreamError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            UpstreamError::MalformedBody(_) => StatusCode::BAD_GATEWAY,
            UpstreamError::Status { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self.0 {
            // Upstream's own status and body, untouched.
            UpstreamError::Status { body, .. } => {
                let content_type = if serde_json::from_str::<serde::de::IgnoredAny>(&body).is_ok() {
                    "application/json"
                } else {
                    "text/plain; charset=utf-8"
                };
                (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
            }
            other => {
                if status.is_server_error() {
                    tracing::error!(error = %other, "request failed");
                }
                (status, Json(ErrorBody { detail: other.to_string() })).into_response()
            }
        }
    }
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /aqi?lat=..&lon=..
pub async fn aqi(
    State(state): State<AppState>,
    Query(coordinates): Query<Coordinates>,
) -> Result<Json<AqiResult>, ApiError> {
    let result = air_quality(state.upstream.as_ref(), &coordinates).await?;
    Ok(Json(result))
}

/// GET /weather?lat=..&lon=..&units=..
pub async fn weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<WeatherResult>, ApiError> {
    let result = current_weather(state.upstream.as_ref(), &params).await?;
    Ok(Json(result))
}
