use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque column identifier, unique within a board.
///
/// The stock board ships with `todo`, `progress`, `check` and `done`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named lane on the board. Lane order is the left-to-right render order
/// and is owned by the board, not the column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
}

impl Column {
    pub fn new<I: Into<ColumnId>, S: Into<String>>(id: I, title: S) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
