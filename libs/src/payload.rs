use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskStatus};

/// Body of both auth endpoints.
#[derive(Serialize, Deserialize, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TaskCreate {
    pub title: String,
    pub status: TaskStatus,
    pub time_logged: f64,
}

/// Partial update; absent fields are left untouched by the service.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_logged: Option<f64>,
}

/// Envelope of `GET /tasks`. The client consumes `items` and ignores the
/// paging fields.
#[derive(Serialize, Deserialize, Debug)]
pub struct TaskPage {
    pub items: Vec<Task>,
    pub total: i64,
    pub page: i64,
    pub size: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: String,
}
