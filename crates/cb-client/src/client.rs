use crate::dto::{AddTaskRequest, AddTaskResponse, TaskDto, TaskListResponse, UpdateTaskRequest};
use crate::error::{ClientError, ClientResult};

use cb_core::TaskId;
use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;

/// HTTP client for the task backend REST API
pub struct Client {
    pub base_url: String,
    http: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: ReqwestClient::new(),
        }
    }

    /// Build a request against the base URL
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http.request(method, &url)
    }

    /// Execute request and decode a JSON body, mapping non-2xx to Api errors
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::api(status.as_u16(), message));
        }

        Ok(response.json().await?)
    }

    /// Execute a request whose success response carries no useful body
    async fn execute_ack(&self, req: reqwest::RequestBuilder) -> ClientResult<()> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::api(status.as_u16(), message));
        }

        Ok(())
    }

    /// Create a task; the response carries the authoritative id.
    pub async fn add_task(&self, request: &AddTaskRequest<'_>) -> ClientResult<AddTaskResponse> {
        debug!("POST /tasks/add title={:?}", request.task);
        let req = self.request(Method::POST, "/tasks/add").json(request);
        self.execute(req).await
    }

    /// Update a task's title/status/priority.
    pub async fn update_task(
        &self,
        id: TaskId,
        request: &UpdateTaskRequest<'_>,
    ) -> ClientResult<TaskDto> {
        debug!("PUT /tasks/update/{id}");
        let req = self
            .request(Method::PUT, &format!("/tasks/update/{id}"))
            .json(request);
        self.execute(req).await
    }

    /// Delete a task. Success is an empty ack.
    pub async fn delete_task(&self, id: TaskId) -> ClientResult<()> {
        debug!("DELETE /tasks/delete/{id}");
        let req = self.request(Method::DELETE, &format!("/tasks/delete/{id}"));
        self.execute_ack(req).await
    }

    /// List a user's tasks for one project.
    pub async fn list_tasks(&self, user_id: &str, project: &str) -> ClientResult<TaskListResponse> {
        debug!("GET /tasks/{user_id}?project={project}");
        let req = self
            .request(Method::GET, &format!("/tasks/{user_id}"))
            .query(&[("project", project)]);
        self.execute(req).await
    }
}
