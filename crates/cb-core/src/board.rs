use crate::command::BoardCommand;
use crate::models::column::{Column, ColumnId};
use crate::models::task::{Task, TaskId};

use serde::{Deserialize, Serialize};

/// The board aggregate: ordered lanes and an ordered, flat task list.
///
/// Both orders are render orders and live only in memory; the backend has no
/// order field, so ordering resets on reload. All mutation goes through
/// [`Board::apply`], a pure function from (state, command) to the next state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
    pub tasks: Vec<Task>,
}

impl Board {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            tasks: Vec::new(),
        }
    }

    /// The stock four-lane board.
    pub fn stock() -> Self {
        Self::new(vec![
            Column::new("todo", "To Do"),
            Column::new("progress", "In Progress"),
            Column::new("check", "Checks"),
            Column::new("done", "Completed"),
        ])
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == *id)
    }

    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| c.id == *id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn task_index(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Tasks assigned to a column, in list order.
    pub fn tasks_in(&self, column: &ColumnId) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.column_id == *column)
            .collect()
    }

    pub fn column_task_count(&self, column: &ColumnId) -> usize {
        self.tasks.iter().filter(|t| t.column_id == *column).count()
    }

    /// Apply a command, returning the next board state.
    ///
    /// Total over any input: a command referencing an id absent from the
    /// board leaves the board unchanged.
    pub fn apply(mut self, command: BoardCommand) -> Board {
        match command {
            BoardCommand::AddTask(task) => {
                if self.column_index(&task.column_id).is_some()
                    && self.task_index(task.id).is_none()
                {
                    self.tasks.push(task);
                }
            }

            BoardCommand::RemoveTask(id) => {
                if let Some(index) = self.task_index(id) {
                    self.tasks.remove(index);
                }
            }

            BoardCommand::PatchTask { id, patch } => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                    if let Some(title) = patch.title {
                        task.title = title;
                    }
                    if let Some(priority) = patch.priority {
                        task.priority = priority;
                    }
                    if let Some(labels) = patch.labels {
                        task.labels = labels;
                    }
                }
            }

            BoardCommand::ReplaceTaskId {
                provisional,
                authoritative,
            } => {
                if self.task_index(authoritative).is_none()
                    && let Some(task) = self.tasks.iter_mut().find(|t| t.id == provisional)
                {
                    task.id = authoritative;
                }
            }

            BoardCommand::SetTaskColumn { id, column } => {
                if self.column_index(&column).is_some()
                    && let Some(task) = self.tasks.iter_mut().find(|t| t.id == id)
                {
                    task.column_id = column;
                }
            }

            BoardCommand::MoveTaskToIndex { id, to } => {
                if let Some(from) = self.task_index(id) {
                    array_move(&mut self.tasks, from, to);
                }
            }

            BoardCommand::RelocateTask { id, column, to } => {
                if self.column_index(&column).is_some()
                    && let Some(from) = self.task_index(id)
                {
                    let mut task = self.tasks.remove(from);
                    task.column_id = column;
                    let to = to.min(self.tasks.len());
                    self.tasks.insert(to, task);
                }
            }

            BoardCommand::MoveColumnToIndex { id, to } => {
                if let Some(from) = self.column_index(&id) {
                    array_move(&mut self.columns, from, to);
                }
            }

            BoardCommand::RenameColumn { id, title } => {
                if let Some(column) = self.columns.iter_mut().find(|c| c.id == id) {
                    column.title = title;
                }
            }
        }

        self
    }
}

/// Stable relocation: the element at `from` ends up at `to`, every other
/// element keeps its relative order. Out-of-range indices are clamped.
fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() {
        return;
    }
    let to = to.min(items.len() - 1);
    if from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}
