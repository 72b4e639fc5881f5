use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A task as returned by the task list endpoint.
///
/// Only the identifier is required. Anything the backend adds beyond the
/// known fields is kept in `extra` so the record round-trips unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskDto {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TaskDto {
    pub fn label(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| format!("Task #{}", self.id))
    }
}

/// Request body for marking a task complete
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompleteTaskRequest {
    pub task_id: i64,
}

/// Response for a completed task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompleteTaskResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_minimal_tasks() {
        let tasks: Vec<TaskDto> = serde_json::from_str(r#"[{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, 1);
        assert_eq!(tasks[1].description, None);
        assert!(tasks[1].extra.is_empty());
    }

    #[test]
    fn keeps_unknown_fields() {
        let task: TaskDto = serde_json::from_str(
            r#"{"id":7,"description":"Refill a water bottle","points":10,"requires_photo":true}"#,
        )
        .unwrap();
        assert_eq!(task.points, Some(10));
        assert_eq!(task.extra.get("requires_photo"), Some(&Value::Bool(true)));

        let back = serde_json::to_value(&task).unwrap();
        assert_eq!(back["requires_photo"], Value::Bool(true));
    }

    #[test]
    fn label_falls_back_to_id() {
        let task: TaskDto = serde_json::from_str(r#"{"id":3}"#).unwrap();
        assert_eq!(task.label(), "Task #3");
    }
}
