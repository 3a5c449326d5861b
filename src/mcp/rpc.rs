//! JSON-RPC envelope helpers.
//!
//! Every response carries the version tag, the echoed id (or null), and
//! exactly one of `result` or `error`.

use serde_json::{json, Value};

pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;

pub fn json_rpc_result(id: Option<Value>, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result
    })
}

pub fn json_rpc_error(id: Option<Value>, code: i32, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message
        }
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{json_rpc_error, json_rpc_result, INVALID_REQUEST};

    #[test]
    fn result_envelope_echoes_id() {
        let response = json_rpc_result(Some(json!(7)), json!({ "ok": true }));
        assert_eq!(response["jsonrpc"], json!("2.0"));
        assert_eq!(response["id"], json!(7));
        assert_eq!(response["result"]["ok"], json!(true));
        assert!(response.get("error").is_none());
    }

    #[test]
    fn error_envelope_defaults_id_to_null() {
        let response = json_rpc_error(None, INVALID_REQUEST, "Invalid Request");
        assert_eq!(response["id"], json!(null));
        assert_eq!(response["error"]["code"], json!(-32600));
        assert_eq!(response["error"]["message"], json!("Invalid Request"));
        assert!(response.get("result").is_none());
    }
}
