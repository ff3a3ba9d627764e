//! Generation history record.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A retained summary of one completed batch, kept for the session only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    /// Unique identifier (UUID v4 hex, 32 chars).
    pub id: String,
    /// Completion timestamp in ISO 8601 format (e.g., "2026-08-06T08:30:00+00:00").
    pub generated_at: String,
    /// Number of files processed in the batch.
    pub file_count: usize,
    /// Label of the stock platform tab active when the batch ran.
    pub platform: String,
}

impl HistoryRecord {
    /// New record stamped with the current time.
    pub fn new(file_count: usize, platform: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().simple().to_string(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false),
            file_count,
            platform: platform.to_string(),
        }
    }
}
