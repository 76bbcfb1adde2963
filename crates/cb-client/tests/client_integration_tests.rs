//! Integration tests for the gateway client using wiremock mock server

use cb_client::{AddTaskRequest, Client, ClientError, UpdateTaskRequest};
use cb_core::TaskId;

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_add_task_returns_authoritative_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tasks/add"))
        .and(body_string_contains("Write report"))
        .and(body_string_contains("To Do"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "task_id": 101
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let response = client
        .add_task(&AddTaskRequest {
            user_id: "u1",
            project: "orchard",
            task: "Write report",
            status: "To Do",
            description: "",
            priority: "High",
            labels: "",
        })
        .await
        .unwrap();

    assert_eq!(response.task_id, 101);
}

#[tokio::test]
async fn test_add_task_server_error_surfaces_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tasks/add"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client
        .add_task(&AddTaskRequest {
            user_id: "u1",
            project: "orchard",
            task: "Write report",
            status: "To Do",
            description: "",
            priority: "Medium",
            labels: "",
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 500, .. }));
    assert!(err.to_string().contains("database unavailable"));
}

#[tokio::test]
async fn test_update_task_puts_to_task_id_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/tasks/update/101"))
        .and(body_string_contains("In Progress"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "task_id": 101,
            "task": "Write report",
            "type": "",
            "status": "In Progress",
            "priority": "High"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let updated = client
        .update_task(
            TaskId(101),
            &UpdateTaskRequest {
                task: "Write report",
                status: "In Progress",
                priority: "High",
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, "In Progress");
}

#[tokio::test]
async fn test_delete_task_accepts_empty_ack() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/tasks/delete/7"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    client.delete_task(TaskId(7)).await.unwrap();
}

#[tokio::test]
async fn test_delete_task_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/tasks/delete/7"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such task"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let err = client.delete_task(TaskId(7)).await.unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 404, .. }));
}

#[tokio::test]
async fn test_list_tasks_scopes_by_user_and_project() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tasks/u1"))
        .and(query_param("project", "orchard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tasks": [
                {
                    "task_id": 101,
                    "task": "Write report",
                    "type": "Urgent",
                    "status": "To Do",
                    "priority": "High"
                },
                {
                    "task_id": 102,
                    "task": "Order seed",
                    "type": "",
                    "status": "Completed",
                    "priority": "Low"
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let response = client.list_tasks("u1", "orchard").await.unwrap();

    assert_eq!(response.tasks.len(), 2);
    assert_eq!(response.tasks[0].task_id, 101);
    assert_eq!(response.tasks[1].status, "Completed");
}
