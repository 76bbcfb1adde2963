use crate::CoreResult;
use crate::board::Board;
use crate::error::CoreError;
use crate::models::column::ColumnId;

use std::collections::HashMap;

/// Advisory per-column task-count limits.
///
/// A breached limit changes a badge, nothing else: neither task creation nor
/// a drag-in consults it. Columns without an entry are unlimited.
#[derive(Debug, Clone, Default)]
pub struct ColumnLimits {
    limits: HashMap<ColumnId, u32>,
}

impl ColumnLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a limit from raw user input.
    ///
    /// Blank clears the limit; a string of digits sets it. Anything else is
    /// rejected and the stored limit is left unchanged.
    pub fn set_limit(&mut self, column: &ColumnId, raw: &str) -> CoreResult<()> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            self.limits.remove(column);
            return Ok(());
        }

        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::validation(format!(
                "column limit must be blank or a non-negative integer, got {raw:?}"
            )));
        }

        let limit = trimmed.parse::<u32>().map_err(|_| {
            CoreError::validation(format!("column limit {raw:?} is out of range"))
        })?;

        self.limits.insert(column.clone(), limit);
        Ok(())
    }

    pub fn limit(&self, column: &ColumnId) -> Option<u32> {
        self.limits.get(column).copied()
    }

    /// Whether the column's live task count exceeds its limit.
    pub fn is_breached(&self, board: &Board, column: &ColumnId) -> bool {
        match self.limits.get(column) {
            Some(&limit) => board.column_task_count(column) > limit as usize,
            None => false,
        }
    }
}
