//! JSON-RPC method routing.
//!
//! Each request is independent: received, validated, responded. Protocol
//! errors (invalid request, method not found) travel inside the body with an
//! HTTP success status; only a store failure escapes as an `AppError`.

use serde_json::{json, Map, Value};

use crate::domain::tools::{build_tools_list, dispatch};
use crate::errors::AppError;
use crate::mcp::rpc::{json_rpc_error, json_rpc_result, INVALID_REQUEST, METHOD_NOT_FOUND};
use crate::AppState;

pub const PROTOCOL_VERSION: &str = "2025-11-25";

/// Routes one decoded JSON-RPC payload. `Ok(None)` means the request was a
/// notification and gets an empty acknowledgement instead of a body.
pub async fn handle_json_rpc_value(
    state: &AppState,
    payload: Value,
) -> Result<Option<Value>, AppError> {
    let Some(message) = payload.as_object() else {
        return Ok(Some(json_rpc_error(None, INVALID_REQUEST, "Invalid Request")));
    };

    let id = message.get("id").cloned();
    let version_ok = message.get("jsonrpc").and_then(Value::as_str) == Some("2.0");
    let method = message.get("method").and_then(Value::as_str);

    if !version_ok {
        return Ok(Some(json_rpc_error(id, INVALID_REQUEST, "Invalid Request")));
    }
    let Some(method) = method else {
        return Ok(Some(json_rpc_error(id, INVALID_REQUEST, "Invalid Request")));
    };

    let response = match method {
        "initialize" => json_rpc_result(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                },
                "capabilities": {
                    "tools": {}
                }
            }),
        ),
        "tools/list" => json_rpc_result(id, json!({ "tools": build_tools_list() })),
        "tools/call" => {
            let params = message.get("params").cloned().unwrap_or(Value::Null);
            handle_tools_call(state, id, &params).await?
        }
        method if method.starts_with("notifications/") => return Ok(None),
        _ => json_rpc_error(id, METHOD_NOT_FOUND, "Method not found"),
    };

    Ok(Some(response))
}

async fn handle_tools_call(
    state: &AppState,
    id: Option<Value>,
    params: &Value,
) -> Result<Value, AppError> {
    let name = params.get("name").and_then(Value::as_str).unwrap_or("");
    if name.is_empty() {
        return Ok(json_rpc_result(
            id,
            json!({
                "isError": true,
                "content": [{ "type": "text", "text": "Missing tool name" }]
            }),
        ));
    }

    let arguments: Map<String, Value> = params
        .get("arguments")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    let outcome = dispatch(state, name, arguments).await?;
    Ok(json_rpc_result(id, outcome.into_call_result()))
}
