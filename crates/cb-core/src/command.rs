use crate::models::column::ColumnId;
use crate::models::task::{Task, TaskId};
use crate::models::task_patch::TaskPatch;

/// A single board mutation.
///
/// Commands are total over any board: ids that miss the current arrays make
/// the command a no-op rather than an error, so a stale drag gesture can
/// never crash or corrupt the board.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardCommand {
    /// Append a task to the end of the task list.
    AddTask(Task),
    /// Remove a task by id.
    RemoveTask(TaskId),
    /// Apply a partial update to a task's own fields.
    PatchTask { id: TaskId, patch: TaskPatch },
    /// Swap a provisional local id for the backend-issued one.
    ReplaceTaskId {
        provisional: TaskId,
        authoritative: TaskId,
    },
    /// Change column membership only; the task keeps its list index.
    SetTaskColumn { id: TaskId, column: ColumnId },
    /// Stable relocation within the task list.
    MoveTaskToIndex { id: TaskId, to: usize },
    /// Remove, retag and reinsert: `to` is an index into the list with the
    /// task already removed.
    RelocateTask {
        id: TaskId,
        column: ColumnId,
        to: usize,
    },
    /// Stable relocation within the column list.
    MoveColumnToIndex { id: ColumnId, to: usize },
    /// Rename a lane in place. Local-only; titles are not persisted remotely.
    RenameColumn { id: ColumnId, title: String },
}
