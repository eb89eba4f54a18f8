use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Lifecycle of a task, as the service stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

impl TaskStatus {
    /// Human form of the wire name (`in_progress` reads as `in progress`).
    pub fn label(&self) -> String {
        self.to_string().replace('_', " ")
    }
}

/// A task as returned by the service. Ids are assigned server-side; the
/// client never invents one. `time_logged` is in hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub status: TaskStatus,
    pub time_logged: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_wire_names() {
        for (status, wire) in [
            (TaskStatus::Todo, "\"todo\""),
            (TaskStatus::InProgress, "\"in_progress\""),
            (TaskStatus::Done, "\"done\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), wire);
            assert_eq!(serde_json::from_str::<TaskStatus>(wire).unwrap(), status);
        }
    }

    #[test]
    fn status_parses_from_cli_spelling() {
        assert_eq!("in_progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert!("doing".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn label_replaces_underscores() {
        assert_eq!(TaskStatus::InProgress.label(), "in progress");
        assert_eq!(TaskStatus::Done.label(), "done");
    }

    #[test]
    fn task_decodes_service_timestamps() {
        let task: Task = serde_json::from_str(
            r#"{"id":3,"title":"Write report","status":"in_progress","time_logged":2.5,
                "created_at":"2024-05-01T09:30:00","updated_at":"2024-05-01T10:15:30.123456"}"#,
        )
        .unwrap();
        assert_eq!(task.id, 3);
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.time_logged, 2.5);
    }
}
