use crate::models::column::ColumnId;
use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Workflow status, derived from a task's column assignment.
///
/// The four wire literals below are the only status strings the backend
/// understands. Status is never stored next to `column_id`; it is computed
/// on read through the fixed column mapping, so the two cannot diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "To Do")]
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Checks")]
    Checks,
    #[serde(rename = "Completed")]
    Completed,
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Checks => "Checks",
            Self::Completed => "Completed",
        }
    }

    /// The column a task with this status lives in.
    pub fn column_id(&self) -> ColumnId {
        match self {
            Self::Todo => ColumnId::new("todo"),
            Self::InProgress => ColumnId::new("progress"),
            Self::Checks => ColumnId::new("check"),
            Self::Completed => ColumnId::new("done"),
        }
    }

    /// Map a column id to its status. Fails for columns outside the stock
    /// four, which have no wire representation.
    #[track_caller]
    pub fn from_column(column_id: &ColumnId) -> CoreResult<Self> {
        match column_id.as_str() {
            "todo" => Ok(Self::Todo),
            "progress" => Ok(Self::InProgress),
            "check" => Ok(Self::Checks),
            "done" => Ok(Self::Completed),
            _ => Err(CoreError::UnknownColumn {
                value: column_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl FromStr for Status {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "To Do" => Ok(Self::Todo),
            "In Progress" => Ok(Self::InProgress),
            "Checks" => Ok(Self::Checks),
            "Completed" => Ok(Self::Completed),
            _ => Err(CoreError::InvalidStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
