//! Route handlers for the dial API.
//!
//! Request bodies are decoded by hand instead of through the framework's
//! JSON extractor: a malformed body must produce the wire contract's
//! `"invalid json"` error, not a framework-shaped rejection.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use dials_core::{DialError, DialId, DialService, INTERNAL_MESSAGE};
use dials_proto::{
    ErrorResponse, GetDialResponse, PatchDialRequest, PatchDialResponse, PostDialRequest,
    PostDialResponse,
};

/// Wire error for a request body that is not valid JSON.
const INVALID_JSON: &str = "invalid json";

/// Shared handler state.
#[derive(Clone)]
struct AppState {
    dials: Arc<dyn DialService>,
}

/// Build the dial API router over `dials`.
pub fn router(dials: Arc<dyn DialService>) -> Router {
    Router::new()
        .route("/api/dials", post(create_dial))
        .route("/api/dials/:id", get(get_dial).patch(patch_dial))
        .with_state(AppState { dials })
}

/// Status code for each error in the taxonomy.
fn error_status(err: &DialError) -> StatusCode {
    match err {
        DialError::DialRequired | DialError::DialIdRequired => StatusCode::BAD_REQUEST,
        DialError::DialExists => StatusCode::CONFLICT,
        DialError::DialNotFound => StatusCode::NOT_FOUND,
        DialError::Unauthorized => StatusCode::UNAUTHORIZED,
        DialError::CorruptRecord { .. } | DialError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        },
    }
}

/// Write an API error response.
///
/// Internal failures are logged with their real cause and sent to the client
/// as the generic message only.
fn error_response(err: &DialError) -> Response {
    let status = error_status(err);

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(code = status.as_u16(), "http error: {err}");
        return (status, Json(ErrorResponse { err: INTERNAL_MESSAGE.to_string() }))
            .into_response();
    }

    tracing::debug!(code = status.as_u16(), "http error: {err}");
    (status, Json(ErrorResponse { err: err.wire_message().to_string() })).into_response()
}

/// 400 response for an undecodable request body.
fn invalid_json() -> Response {
    tracing::debug!(code = 400, "http error: {INVALID_JSON}");
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { err: INVALID_JSON.to_string() }))
        .into_response()
}

/// `GET /api/dials/{id}` — fetch a single dial.
async fn get_dial(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.dials.dial(&DialId::new(id)).await {
        Ok(Some(dial)) => {
            (StatusCode::OK, Json(GetDialResponse { dial: Some(dial), err: None }))
                .into_response()
        },
        // Absent dial: 404 with an empty JSON object body, not an error string.
        Ok(None) => (StatusCode::NOT_FOUND, Json(GetDialResponse::default())).into_response(),
        Err(err) => error_response(&err),
    }
}

/// `POST /api/dials` — create a new dial.
async fn create_dial(State(state): State<AppState>, body: Bytes) -> Response {
    let Ok(req) = serde_json::from_slice::<PostDialRequest>(&body) else {
        return invalid_json();
    };

    let Some(mut dial) = req.dial else {
        return error_response(&DialError::DialRequired);
    };

    // The token travels beside the dial on the wire; reunite them before the
    // service sees the entity.
    dial.token = req.token;

    match state.dials.create_dial(dial).await {
        Ok(created) => {
            (StatusCode::OK, Json(PostDialResponse { dial: Some(created), err: None }))
                .into_response()
        },
        Err(err) => error_response(&err),
    }
}

/// `PATCH /api/dials/{id}` — update a dial's level.
///
/// The body's `id` field is authoritative; the path segment only routes.
async fn patch_dial(
    State(state): State<AppState>,
    Path(_id): Path<String>,
    body: Bytes,
) -> Response {
    let Ok(req) = serde_json::from_slice::<PatchDialRequest>(&body) else {
        return invalid_json();
    };

    match state.dials.set_level(&req.id, &req.token, req.level).await {
        Ok(()) => (StatusCode::OK, Json(PatchDialResponse::default())).into_response(),
        Err(err) => error_response(&err),
    }
}
