use crate::client::Client;
use crate::dto::{AddTaskRequest, UpdateTaskRequest};
use crate::error::{ServiceError, ServiceResult};

use cb_core::{
    Board, BoardCommand, ColumnId, CoreError, DragPayload, DragSession, DropTarget, Priority,
    Status, Task, TaskId, TaskPatch,
};
use log::{debug, warn};

/// The board plus its persistence gateway.
///
/// All three remote mutations follow the same strategy: mutate the in-memory
/// board first, call the gateway, and roll the local change back if the call
/// fails. The board is always consistent for rendering; the backend catches
/// up (or the change is undone).
pub struct BoardService {
    client: Client,
    user_id: String,
    project: String,
    board: Board,
    next_provisional: i64,
}

impl BoardService {
    pub fn new(client: Client, user_id: &str, project: &str) -> Self {
        Self {
            client,
            user_id: user_id.to_string(),
            project: project.to_string(),
            board: Board::stock(),
            next_provisional: -1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    fn apply(&mut self, command: BoardCommand) {
        self.board = std::mem::take(&mut self.board).apply(command);
    }

    /// Rebuild the board from the backend's task list.
    ///
    /// Lane order and in-lane ordering live only in memory, so both reset to
    /// the backend's response order here.
    pub async fn load(&mut self) -> ServiceResult<()> {
        let response = self.client.list_tasks(&self.user_id, &self.project).await?;

        let mut board = Board::stock();
        for dto in response.tasks {
            let task = dto.into_task()?;
            board = board.apply(BoardCommand::AddTask(task));
        }

        debug!("loaded {} tasks for project {}", board.tasks.len(), self.project);
        self.board = board;
        Ok(())
    }

    /// Create a task at the end of a lane.
    ///
    /// Blank titles are rejected before any board or network activity. The
    /// task appears immediately under a provisional negative id, which is
    /// swapped for the backend's id when the create response lands.
    pub async fn add_task(
        &mut self,
        column: &ColumnId,
        title: &str,
        priority: Priority,
        labels: &str,
    ) -> ServiceResult<TaskId> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CoreError::validation("task title must not be empty").into());
        }
        let status = Status::from_column(column)?;

        let provisional = TaskId(self.next_provisional);
        self.next_provisional -= 1;

        let mut task = Task::new(provisional, column.clone(), title.to_string(), priority);
        task.labels = labels.to_string();
        self.apply(BoardCommand::AddTask(task));

        let request = AddTaskRequest {
            user_id: &self.user_id,
            project: &self.project,
            task: title,
            status: status.as_str(),
            description: "",
            priority: priority.as_str(),
            labels,
        };

        match self.client.add_task(&request).await {
            Ok(response) => {
                let authoritative = TaskId(response.task_id);
                self.apply(BoardCommand::ReplaceTaskId {
                    provisional,
                    authoritative,
                });
                Ok(authoritative)
            }
            Err(e) => {
                warn!("task create failed, rolling back: {e}");
                self.apply(BoardCommand::RemoveTask(provisional));
                Err(e.into())
            }
        }
    }

    /// Delete a task. On gateway failure the task returns to its old slot.
    pub async fn delete_task(&mut self, id: TaskId) -> ServiceResult<()> {
        let Some(index) = self.board.task_index(id) else {
            return Err(ServiceError::TaskNotFound { id });
        };
        let removed = self.board.tasks[index].clone();
        self.apply(BoardCommand::RemoveTask(id));

        match self.client.delete_task(id).await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!("task delete failed, rolling back: {e}");
                self.apply(BoardCommand::AddTask(removed));
                self.apply(BoardCommand::MoveTaskToIndex { id, to: index });
                Err(e.into())
            }
        }
    }

    /// Patch a task's own fields. On gateway failure the pre-patch fields
    /// are restored.
    pub async fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> ServiceResult<()> {
        let Some(index) = self.board.task_index(id) else {
            return Err(ServiceError::TaskNotFound { id });
        };
        let before = self.board.tasks[index].clone();
        self.apply(BoardCommand::PatchTask { id, patch });

        match self.push(id).await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!("task update failed, rolling back: {e}");
                self.apply(BoardCommand::PatchTask {
                    id,
                    patch: TaskPatch {
                        title: Some(before.title),
                        priority: Some(before.priority),
                        labels: Some(before.labels),
                    },
                });
                Err(e)
            }
        }
    }

    /// Push a task's current title/status/priority to the backend without
    /// touching local state. Call after a drag commit to persist the status
    /// change; a failure leaves the local move in place.
    pub async fn sync_task(&self, id: TaskId) -> ServiceResult<()> {
        self.push(id).await
    }

    async fn push(&self, id: TaskId) -> ServiceResult<()> {
        let Some(task) = self.board.task(id) else {
            return Err(ServiceError::TaskNotFound { id });
        };
        let status = task.status()?;

        let request = UpdateTaskRequest {
            task: &task.title,
            status: status.as_str(),
            priority: task.priority.as_str(),
        };
        self.client.update_task(id, &request).await?;
        Ok(())
    }

    /// Run a full drag gesture for a task (start, hover, drop). Local only;
    /// returns false for an unknown task id. Persist with [`sync_task`].
    pub fn move_task(&mut self, id: TaskId, target: &DropTarget) -> bool {
        if self.board.task_index(id).is_none() {
            return false;
        }

        let session = DragSession::start(DragPayload::Task(id), &self.board);
        let board = std::mem::take(&mut self.board);
        let board = session.drag_over(board, target);
        self.board = session.drop_on(board, Some(target));
        true
    }

    /// Reorder a lane by dragging it onto another lane. Local only.
    pub fn move_column(&mut self, id: &ColumnId, over: &ColumnId) -> bool {
        if self.board.column_index(id).is_none() || self.board.column_index(over).is_none() {
            return false;
        }

        let session = DragSession::start(DragPayload::Column(id.clone()), &self.board);
        let board = std::mem::take(&mut self.board);
        self.board = session.drop_on(board, Some(&DropTarget::Column(over.clone())));
        true
    }

    /// Rename a lane. Local only; lane titles are not persisted remotely.
    pub fn rename_column(&mut self, id: &ColumnId, title: &str) -> bool {
        if self.board.column_index(id).is_none() {
            return false;
        }

        self.apply(BoardCommand::RenameColumn {
            id: id.clone(),
            title: title.to_string(),
        });
        true
    }
}
