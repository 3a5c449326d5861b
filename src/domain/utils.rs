//! Shared submission validation.
//!
//! Both the JSON-RPC and REST adapters enforce the same rule through this
//! module: required fields must be strings of at least three characters
//! after trimming.

use serde_json::{Map, Value};

use crate::storage::SubmissionKind;

pub const MIN_FIELD_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField {
    pub field: &'static str,
}

pub fn required_fields(kind: SubmissionKind) -> &'static [&'static str] {
    match kind {
        SubmissionKind::Join => &["contact"],
        SubmissionKind::Request => &["goal", "contact"],
    }
}

pub fn validate_submission(
    kind: SubmissionKind,
    payload: &Map<String, Value>,
) -> Result<(), MissingField> {
    for &field in required_fields(kind) {
        let present = payload
            .get(field)
            .and_then(Value::as_str)
            .map(str::trim)
            .is_some_and(|value| value.chars().count() >= MIN_FIELD_CHARS);

        if !present {
            return Err(MissingField { field });
        }
    }

    Ok(())
}
