//! Per-file metadata result record and its status lifecycle.

use serde::{Deserialize, Serialize};

/// Status of a single result: `pending → processing → completed`, or
/// `error` when the generation step fails for that file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

impl ResultStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Error => "error",
        }
    }

    /// Terminal statuses stay put when a batch resumes.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Error)
    }
}

/// The generated title/description/keywords record for one input file.
///
/// Created `pending` when a batch starts, mutated in place as its file is
/// processed, never deleted individually (only cleared as a whole batch).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataResult {
    /// Stable identifier derived from list position (`result-<index>`).
    pub id: String,
    pub file_name: String,
    /// Preview handle, present for image-kind files only.
    pub preview: Option<String>,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub status: ResultStatus,
}

impl MetadataResult {
    /// Fresh pending result for the file at `index`.
    pub fn pending(index: usize, file_name: &str, preview: Option<String>) -> Self {
        Self {
            id: format!("result-{}", index),
            file_name: file_name.to_string(),
            preview,
            title: String::new(),
            description: String::new(),
            keywords: Vec::new(),
            status: ResultStatus::Pending,
        }
    }
}

/// Partial edit applied to a result by id; fields left `None` are
/// untouched. Supports the inline editing in the results table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
}
