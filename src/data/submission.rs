use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::review_session::ReviewSession;

/// Submission payload handed to the task host. `values` is the working
/// series verbatim; the remaining fields are bookkeeping for the reviewer.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub task: String,
    pub submitted_at: DateTime<Utc>,
    pub values: Vec<f64>,
    pub corrected_indices: Vec<usize>,
}

impl Submission {
    pub fn from_session(session: &ReviewSession) -> Self {
        Self {
            task: session.task_name().to_string(),
            submitted_at: Utc::now(),
            values: session.values().to_vec(),
            corrected_indices: session.modified_indices(),
        }
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize submission: {e}"))
    }

    pub fn write_to(&self, path: &Path) -> Result<(), String> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write submission: {e}"))
    }

    /// Suggested file name for the save dialog.
    pub fn default_file_name(&self) -> String {
        format!("{}_submission.json", self.task.replace(' ', "_"))
    }
}
