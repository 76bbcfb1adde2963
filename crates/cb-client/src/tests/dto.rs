use crate::dto::{AddTaskRequest, TaskDto};

use cb_core::{ColumnId, Priority, TaskId};
use serde_json::json;

#[test]
fn test_task_dto_maps_status_to_column() {
    let dto = TaskDto {
        task_id: 101,
        task: "Write report".to_string(),
        labels: "Urgent,Dev".to_string(),
        status: "In Progress".to_string(),
        priority: "High".to_string(),
    };

    let task = dto.into_task().unwrap();

    assert_eq!(task.id, TaskId(101));
    assert_eq!(task.column_id, ColumnId::new("progress"));
    assert_eq!(task.title, "Write report");
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.labels, "Urgent,Dev");
}

#[test]
fn test_task_dto_rejects_unknown_status() {
    let dto = TaskDto {
        task_id: 1,
        task: "x".to_string(),
        labels: String::new(),
        status: "Archived".to_string(),
        priority: "Low".to_string(),
    };

    assert!(dto.into_task().is_err());
}

#[test]
fn test_task_dto_missing_type_defaults_to_no_labels() {
    let dto: TaskDto = serde_json::from_value(json!({
        "task_id": 7,
        "task": "Weed the rows",
        "status": "To Do",
        "priority": "Medium"
    }))
    .unwrap();

    assert_eq!(dto.labels, "");
    assert!(dto.into_task().unwrap().label_set().is_empty());
}

#[test]
fn test_add_request_serializes_labels_as_type() {
    let request = AddTaskRequest {
        user_id: "u1",
        project: "orchard",
        task: "Prune",
        status: "To Do",
        description: "",
        priority: "Medium",
        labels: "Field",
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["type"], "Field");
    assert_eq!(value["project"], "orchard");
    assert!(value.get("labels").is_none());
}
