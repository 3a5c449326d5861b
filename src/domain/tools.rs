//! Tool registry and dispatcher.
//!
//! The four operations exposed over `tools/call` route through a single
//! `ToolKind` table; unknown names land in the `None` arm. The dispatcher
//! never fails on client mistakes, it returns an outcome flagged as error
//! instead. `Err` is reserved for submission-store failures.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::domain::status::{
    heartbeat_snapshot, pick_quote, render_heartbeat_markdown, render_quote_markdown,
};
use crate::domain::utils::validate_submission;
use crate::errors::AppError;
use crate::storage::SubmissionKind;
use crate::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

pub fn build_tools_list() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: "allhuman_get_heartbeat",
            description: "Get a synthetic heartbeat/status snapshot for the All-Human Company.",
            input_schema: read_input_schema(),
        },
        ToolDescriptor {
            name: "allhuman_get_quote",
            description: "Return a short human quote; good for playful liveness checks.",
            input_schema: read_input_schema(),
        },
        ToolDescriptor {
            name: "allhuman_submit_join",
            description: "Submit a human application to join the All-Human Company (stored locally).",
            input_schema: join_input_schema(),
        },
        ToolDescriptor {
            name: "allhuman_submit_request",
            description: "Submit a task request from a buyer (stored locally).",
            input_schema: request_input_schema(),
        },
    ]
}

fn read_input_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "response_format": {
                "type": "string",
                "enum": ["markdown", "json"],
                "default": "markdown"
            }
        }
    })
}

fn join_input_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": true,
        "properties": {
            "nickname": { "type": "string" },
            "city": { "type": "string" },
            "time_window": { "type": "string" },
            "skills": { "type": "string" },
            "weird_task": { "type": "string" },
            "price_range": { "type": "string" },
            "contact": { "type": "string" },
            "reverse_turing": { "type": "string" }
        },
        "required": ["contact"]
    })
}

fn request_input_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": true,
        "properties": {
            "goal": { "type": "string" },
            "action": { "type": "string" },
            "location_time": { "type": "string" },
            "budget": { "type": "string" },
            "contact": { "type": "string" }
        },
        "required": ["goal", "contact"]
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    GetHeartbeat,
    GetQuote,
    SubmitJoin,
    SubmitRequest,
}

impl ToolKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "allhuman_get_heartbeat" => Some(Self::GetHeartbeat),
            "allhuman_get_quote" => Some(Self::GetQuote),
            "allhuman_submit_join" => Some(Self::SubmitJoin),
            "allhuman_submit_request" => Some(Self::SubmitRequest),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Markdown,
    Json,
}

impl ResponseFormat {
    /// Anything other than the literal `"json"` falls back to markdown.
    pub fn from_arguments(arguments: &Map<String, Value>) -> Self {
        match arguments.get("response_format").and_then(Value::as_str) {
            Some("json") => Self::Json,
            _ => Self::Markdown,
        }
    }
}

/// The rendered text and structured value a tool call produced, side by side.
#[derive(Debug, Clone)]
pub struct ToolOutcome {
    pub text: String,
    pub structured: Option<Value>,
    pub is_error: bool,
}

impl ToolOutcome {
    pub fn success(text: String, structured: Value) -> Self {
        Self {
            text,
            structured: Some(structured),
            is_error: false,
        }
    }

    pub fn error(text: String) -> Self {
        Self {
            text,
            structured: None,
            is_error: true,
        }
    }

    /// Wire shape shared with MCP tool results: `content` text blocks plus
    /// optional `structuredContent` and `isError`.
    pub fn into_call_result(self) -> Value {
        let mut result = json!({
            "content": [{ "type": "text", "text": self.text }],
        });
        if let Some(structured) = self.structured {
            result["structuredContent"] = structured;
        }
        if self.is_error {
            result["isError"] = json!(true);
        }
        result
    }
}

pub async fn dispatch(
    state: &AppState,
    name: &str,
    arguments: Map<String, Value>,
) -> Result<ToolOutcome, AppError> {
    let format = ResponseFormat::from_arguments(&arguments);

    let Some(kind) = ToolKind::from_name(name) else {
        return Ok(ToolOutcome::error(format!("Error: unknown tool '{name}'.")));
    };

    match kind {
        ToolKind::GetHeartbeat => {
            let snapshot = heartbeat_snapshot(state.randomness.as_ref(), state.clock.as_ref());
            let text = match format {
                ResponseFormat::Json => {
                    serde_json::to_string_pretty(&snapshot).expect("snapshot serialization")
                }
                ResponseFormat::Markdown => render_heartbeat_markdown(&snapshot),
            };
            let structured = serde_json::to_value(&snapshot).expect("snapshot serialization");
            Ok(ToolOutcome::success(text, structured))
        }
        ToolKind::GetQuote => {
            let reading = pick_quote(state.randomness.as_ref(), state.clock.as_ref());
            let text = match format {
                ResponseFormat::Json => {
                    serde_json::to_string_pretty(&reading).expect("quote serialization")
                }
                ResponseFormat::Markdown => render_quote_markdown(&reading),
            };
            let structured = serde_json::to_value(&reading).expect("quote serialization");
            Ok(ToolOutcome::success(text, structured))
        }
        ToolKind::SubmitJoin => submit(state, SubmissionKind::Join, arguments).await,
        ToolKind::SubmitRequest => submit(state, SubmissionKind::Request, arguments).await,
    }
}

async fn submit(
    state: &AppState,
    kind: SubmissionKind,
    arguments: Map<String, Value>,
) -> Result<ToolOutcome, AppError> {
    if let Err(missing) = validate_submission(kind, &arguments) {
        return Ok(ToolOutcome::error(format!(
            "Error: '{}' is required.",
            missing.field
        )));
    }

    // The full argument map goes to the store verbatim.
    let receipt = state.store.record(kind, arguments).await?;
    let text = format!("OK: received (id={})", receipt.id);
    let structured = serde_json::to_value(&receipt).expect("receipt serialization");
    Ok(ToolOutcome::success(text, structured))
}
