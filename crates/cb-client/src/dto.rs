use crate::error::{ClientError, ClientResult};

use std::str::FromStr;

use cb_core::{Priority, Status, Task, TaskId};
use serde::{Deserialize, Serialize};

/// Body of `POST /tasks/add`.
#[derive(Debug, Serialize)]
pub struct AddTaskRequest<'a> {
    pub user_id: &'a str,
    pub project: &'a str,
    pub task: &'a str,
    pub status: &'a str,
    pub description: &'a str,
    pub priority: &'a str,
    #[serde(rename = "type")]
    pub labels: &'a str,
}

/// Response of `POST /tasks/add`: the authoritative id.
#[derive(Debug, Deserialize)]
pub struct AddTaskResponse {
    pub task_id: i64,
}

/// Body of `PUT /tasks/update/:id`.
#[derive(Debug, Serialize)]
pub struct UpdateTaskRequest<'a> {
    pub task: &'a str,
    pub status: &'a str,
    pub priority: &'a str,
}

/// A task as the backend represents it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDto {
    pub task_id: i64,
    pub task: String,
    #[serde(rename = "type", default)]
    pub labels: String,
    pub status: String,
    pub priority: String,
}

impl TaskDto {
    /// Convert to the domain model. The status literal picks the column;
    /// anything outside the four known literals is a contract violation.
    pub fn into_task(self) -> ClientResult<Task> {
        let status = Status::from_str(&self.status)
            .map_err(|e| ClientError::decode(e.to_string()))?;
        let priority = Priority::from_str(&self.priority)
            .map_err(|e| ClientError::decode(e.to_string()))?;

        let mut task = Task::new(
            TaskId(self.task_id),
            status.column_id(),
            self.task,
            priority,
        );
        task.labels = self.labels;
        Ok(task)
    }
}

/// Response of `GET /tasks/:userId`.
#[derive(Debug, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskDto>,
}
