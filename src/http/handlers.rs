//! Axum handlers for the JSON-RPC endpoint and the plain REST API.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};

use crate::domain::status::{heartbeat_snapshot, pick_quote, QuoteReading, StatusSnapshot};
use crate::domain::utils::validate_submission;
use crate::errors::AppError;
use crate::mcp::rpc::{json_rpc_error, INVALID_REQUEST};
use crate::mcp::server::handle_json_rpc_value;
use crate::storage::SubmissionKind;
use crate::AppState;

pub async fn mcp_endpoint(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        // Protocol-level error inside the body; transport status stays 200.
        Err(_) => {
            return Ok((
                StatusCode::OK,
                Json(json_rpc_error(None, INVALID_REQUEST, "Invalid Request")),
            )
                .into_response())
        }
    };

    match handle_json_rpc_value(&state, payload).await? {
        Some(response) => Ok((StatusCode::OK, Json(response)).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

pub async fn heartbeat(State(state): State<AppState>) -> Json<StatusSnapshot> {
    Json(heartbeat_snapshot(
        state.randomness.as_ref(),
        state.clock.as_ref(),
    ))
}

pub async fn quote(State(state): State<AppState>) -> Json<QuoteReading> {
    Json(pick_quote(state.randomness.as_ref(), state.clock.as_ref()))
}

pub async fn submit_join(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    submit(&state, SubmissionKind::Join, &body).await
}

pub async fn submit_request(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    submit(&state, SubmissionKind::Request, &body).await
}

async fn submit(
    state: &AppState,
    kind: SubmissionKind,
    body: &Bytes,
) -> Result<Json<Value>, AppError> {
    // An empty body counts as an empty object and fails validation below.
    let payload: Value = if body.is_empty() {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice(body).map_err(|_| AppError::bad_request("Invalid JSON"))?
    };

    let Value::Object(payload) = payload else {
        return Err(AppError::bad_request("Invalid payload"));
    };

    validate_submission(kind, &payload)
        .map_err(|missing| AppError::bad_request(format!("{} is required", missing.field)))?;

    let receipt = state.store.record(kind, payload).await?;
    Ok(Json(json!({ "ok": true, "id": receipt.id })))
}

pub async fn api_not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
