//! Durable submission storage.
//!
//! Submissions are append-only: each record is written once under a freshly
//! generated unique id and never mutated or deleted afterwards, so no
//! locking is needed across concurrent writers.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::SecondsFormat;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::ambient::{Clock, Randomness};
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    Join,
    Request,
}

impl SubmissionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Join => "join",
            Self::Request => "request",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct SubmissionRecord {
    pub id: String,
    pub kind: SubmissionKind,
    pub received_at: String,
    pub payload: Map<String, Value>,
}

#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn record(
        &self,
        kind: SubmissionKind,
        payload: Map<String, Value>,
    ) -> Result<SubmissionReceipt, AppError>;
}

/// Writes each submission to `<data_dir>/<id>.json`.
pub struct FileSubmissionStore {
    data_dir: PathBuf,
    clock: Arc<dyn Clock>,
    randomness: Arc<dyn Randomness>,
}

impl FileSubmissionStore {
    pub fn new(data_dir: PathBuf, clock: Arc<dyn Clock>, randomness: Arc<dyn Randomness>) -> Self {
        Self {
            data_dir,
            clock,
            randomness,
        }
    }

    fn generate_id(&self, kind: SubmissionKind, received_at: &str) -> String {
        // Timestamps double as file names, so ':' and '.' are flattened.
        let stamp = received_at.replace([':', '.'], "-");
        let suffix = format!("{:06x}", self.randomness.in_range(0, 0xff_ffff));
        format!("{}-{}-{}", kind.as_str(), stamp, suffix)
    }
}

#[async_trait]
impl SubmissionStore for FileSubmissionStore {
    async fn record(
        &self,
        kind: SubmissionKind,
        payload: Map<String, Value>,
    ) -> Result<SubmissionReceipt, AppError> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|err| AppError::internal(format!("create data dir: {err}")))?;

        let received_at = self
            .clock
            .now()
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        let id = self.generate_id(kind, &received_at);

        let record = SubmissionRecord {
            id: id.clone(),
            kind,
            received_at,
            payload,
        };
        let body = serde_json::to_vec_pretty(&record)
            .map_err(|err| AppError::internal(format!("encode submission: {err}")))?;

        let path = self.data_dir.join(format!("{id}.json"));
        tokio::fs::write(&path, body)
            .await
            .map_err(|err| AppError::internal(format!("write submission: {err}")))?;

        Ok(SubmissionReceipt { id })
    }
}
