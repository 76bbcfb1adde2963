use crate::board::Board;
use crate::command::BoardCommand;
use crate::models::column::ColumnId;
use crate::models::task::TaskId;

/// What is being dragged. Decided once at drag start and carried unchanged
/// through the gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    Column(ColumnId),
    Task(TaskId),
}

/// What the pointer is currently over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Column(ColumnId),
    Task(TaskId),
}

/// An in-progress drag gesture.
///
/// The gesture is two-phase: `drag_over` applies a cheap live preview on
/// every hover event (column membership only, never a reorder), and
/// `drop_on` performs the authoritative array surgery exactly once. Every
/// path is a no-op on missing or stale ids; a drag can never fail.
#[derive(Debug, Clone)]
pub struct DragSession {
    payload: DragPayload,
    snapshot: Board,
}

impl DragSession {
    /// Begin a gesture, snapshotting the pre-drag board.
    pub fn start(payload: DragPayload, board: &Board) -> Self {
        Self {
            payload,
            snapshot: board.clone(),
        }
    }

    pub fn payload(&self) -> &DragPayload {
        &self.payload
    }

    /// Hover preview.
    ///
    /// Task drags re-tag the dragged task's column as soon as it hovers a
    /// foreign lane (or a task in one), so it renders where it would land;
    /// its list index is left alone to avoid thrashing while the pointer
    /// moves. Same-column hovers defer entirely to the drop. Column drags
    /// preview nothing.
    pub fn drag_over(&self, board: Board, target: &DropTarget) -> Board {
        let DragPayload::Task(dragged) = &self.payload else {
            return board;
        };
        let dragged = *dragged;

        match target {
            DropTarget::Column(column) => {
                let Some(task) = board.task(dragged) else {
                    return board;
                };
                if task.column_id == *column {
                    return board;
                }
                board.apply(BoardCommand::SetTaskColumn {
                    id: dragged,
                    column: column.clone(),
                })
            }

            DropTarget::Task(over) => {
                if *over == dragged {
                    return board;
                }
                let (Some(task), Some(over_task)) = (board.task(dragged), board.task(*over))
                else {
                    return board;
                };
                if task.column_id == over_task.column_id {
                    return board;
                }

                // Interleave the dragged task at the hover point of the
                // foreign lane: adopt the lane, then take the hovered task's
                // slot.
                let column = over_task.column_id.clone();
                let Some(to) = board.task_index(*over) else {
                    return board;
                };
                board
                    .apply(BoardCommand::SetTaskColumn {
                        id: dragged,
                        column,
                    })
                    .apply(BoardCommand::MoveTaskToIndex { id: dragged, to })
            }
        }
    }

    /// Commit the gesture and end it. `None` means the pointer was released
    /// over empty space: nothing moves.
    pub fn drop_on(self, board: Board, target: Option<&DropTarget>) -> Board {
        let Some(target) = target else {
            return board;
        };

        match self.payload {
            DragPayload::Column(dragged) => {
                let DropTarget::Column(over) = target else {
                    return board;
                };
                if *over == dragged {
                    return board;
                }
                let Some(to) = board.column_index(over) else {
                    return board;
                };
                if board.column_index(&dragged).is_none() {
                    return board;
                }
                board.apply(BoardCommand::MoveColumnToIndex { id: dragged, to })
            }

            DragPayload::Task(dragged) => {
                let Some(from) = board.task_index(dragged) else {
                    return board;
                };

                match target {
                    DropTarget::Column(column) => {
                        if board.tasks[from].column_id == *column {
                            return board;
                        }
                        if board.column_index(column).is_none() {
                            return board;
                        }
                        // Dropped straight onto a lane with no hover preview
                        // applied: adopt the lane and go to the end.
                        let to = board.tasks.len() - 1;
                        board.apply(BoardCommand::RelocateTask {
                            id: dragged,
                            column: column.clone(),
                            to,
                        })
                    }

                    DropTarget::Task(over) => {
                        if *over == dragged {
                            return board;
                        }
                        let Some(to) = board.task_index(*over) else {
                            return board;
                        };
                        let over_column = board.tasks[to].column_id.clone();

                        if board.tasks[from].column_id == over_column {
                            board.apply(BoardCommand::MoveTaskToIndex { id: dragged, to })
                        } else {
                            // Reinsert index is computed against the list
                            // with the dragged task already removed, so the
                            // moving element is not counted.
                            let to = if from < to { to - 1 } else { to };
                            board.apply(BoardCommand::RelocateTask {
                                id: dragged,
                                column: over_column,
                                to,
                            })
                        }
                    }
                }
            }
        }
    }

    /// Abandon the gesture with no further mutation.
    ///
    /// Any column-jump preview applied during `drag_over` stays in the
    /// board; callers that want the pre-drag state back use
    /// [`DragSession::into_snapshot`] instead.
    pub fn cancel(self) {}

    /// The board exactly as it was when the gesture started.
    pub fn into_snapshot(self) -> Board {
        self.snapshot
    }
}
