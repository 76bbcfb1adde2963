use crate::CoreResult;
use crate::models::column::ColumnId;
use crate::models::priority::Priority;
use crate::models::status::Status;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Task identifier. Authoritative ids are handed out by the backend on
/// create; provisional local ids are negative until the create response
/// arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub i64);

impl TaskId {
    pub fn is_provisional(&self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unit of work on the board.
///
/// `column_id` is the single source of truth for workflow state; the wire
/// status string is derived from it on demand. `labels` is the backend's
/// comma-separated multi-value field, kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub title: String,
    pub priority: Priority,
    pub labels: String,
}

impl Task {
    pub fn new(id: TaskId, column_id: ColumnId, title: String, priority: Priority) -> Self {
        Self {
            id,
            column_id,
            title,
            priority,
            labels: String::new(),
        }
    }

    /// Workflow status derived from the column assignment.
    pub fn status(&self) -> CoreResult<Status> {
        Status::from_column(&self.column_id)
    }

    /// Labels split on commas, trimmed and lowercased. Empty entries drop out.
    pub fn label_set(&self) -> Vec<String> {
        self.labels
            .split(',')
            .map(|label| label.trim().to_lowercase())
            .filter(|label| !label.is_empty())
            .collect()
    }
}
