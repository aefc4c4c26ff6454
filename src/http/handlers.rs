//! Request handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use super::server::AppState;
use crate::models::VolumeRequest;
use crate::tools::macros;

/// JSON error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    fn response(status: StatusCode, error: impl Into<String>) -> Response {
        (status, Json(ErrorBody { error: error.into() })).into_response()
    }
}

/// `POST /v1/calculate-macros`
pub async fn calculate_macros(
    State(state): State<AppState>,
    payload: Result<Json<VolumeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected macro request");
            return ErrorBody::response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    // The store is synchronous; keep it off the async workers.
    let lookup = state.lookup.clone();
    match tokio::task::spawn_blocking(move || macros::calculate_macros(&lookup, &request)).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!(error = %e, "Macro calculation task failed");
            ErrorBody::response(StatusCode::INTERNAL_SERVER_ERROR, "macro calculation failed")
        }
    }
}

/// `GET /v1/status`
pub async fn status(State(state): State<AppState>) -> Response {
    let tracker = state.status_tracker.clone();
    let store = state.lookup.store().clone();
    match tokio::task::spawn_blocking(move || tracker.get_status(store.as_ref())).await {
        Ok(status) => (StatusCode::OK, Json(status)).into_response(),
        Err(e) => {
            error!(error = %e, "Status task failed");
            ErrorBody::response(StatusCode::INTERNAL_SERVER_ERROR, "status unavailable")
        }
    }
}
