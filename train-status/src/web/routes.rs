//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::domain::{StationCode, TrainNumber};
use crate::itinerary::{NotFound, ResolveError, resolve_station};
use crate::upstream::UpstreamError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    // Origins are unrestricted, so credentials are never allowed
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/train/:train_number/station/:station_code",
            get(train_at_station),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Where is a train, and how late is it, at one station.
async fn train_at_station(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<TrainStationResponse>, AppError> {
    let Path((train_number, station_code)) = path.map_err(|rejection| AppError::BadRequest {
        message: rejection.body_text(),
    })?;

    // Validate before touching the network
    let train = TrainNumber::parse(&train_number).map_err(|e| AppError::BadRequest {
        message: format!("{e}: {train_number:?}"),
    })?;
    let station = StationCode::parse_normalized(&station_code).map_err(|e| {
        AppError::BadRequest {
            message: format!("{e}: {station_code:?}"),
        }
    })?;

    let resolved = resolve_station(&state.upstream, &station, &train).await?;

    Ok(Json(TrainStationResponse::from_resolved(
        &train,
        &station,
        &resolved,
        Utc::now(),
    )))
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Path parameters failed validation
    #[error("{message}")]
    BadRequest { message: String },

    /// One of the lookup steps came up empty
    #[error(transparent)]
    NotFound(#[from] NotFound),

    /// Every upstream host failed, or returned an unusable payload
    #[error(transparent)]
    UpstreamUnavailable(#[from] UpstreamError),
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::NotFound(e) => AppError::NotFound(e),
            ResolveError::Upstream(e) => AppError::UpstreamUnavailable(e),
        }
    }
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        let detail = match &self {
            AppError::UpstreamUnavailable(e) => {
                // Upstream payloads and hosts stay in the log
                error!(error = %e, "upstream unavailable");
                "train data provider unavailable".to_string()
            }
            other => {
                debug!(%status, error = %other, "request failed");
                other.to_string()
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
