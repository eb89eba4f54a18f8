use reqwest::blocking::Client;
use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use libs::payload::{Credentials, Health, TaskCreate, TaskPage, TaskUpdate, Token};
use libs::task::Task;

use crate::session::SessionStore;

/// Shown when an error response carries no usable `detail` field.
pub const FALLBACK_ERROR: &str = "Request failed";

const NO_BODY: Option<&()> = None;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Non-success status; the message is the server's `detail` when it
    /// sent one.
    #[error("{message}")]
    Server { status: StatusCode, message: String },

    #[error("Error sending request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response from the service: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("The service returned an empty response")]
    MissingBody,
}

/// Data access for the devtask service. Owns the session store so every
/// request picks up the current token without ambient lookups.
pub struct ApiClient {
    base_url: String,
    http: Client,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        ApiClient {
            base_url: base_url.into(),
            http: Client::new(),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The register response body is a user record; nothing in it is needed
    /// beyond success, and it carries no token.
    pub fn register(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.call::<_, serde_json::Value>(Method::POST, "/auth/register", Some(&credentials))?;
        Ok(())
    }

    pub fn login(&self, email: &str, password: &str) -> Result<Token, ApiError> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        require(self.call(Method::POST, "/auth/login", Some(&credentials))?)
    }

    pub fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let page: TaskPage = require(self.call(Method::GET, "/tasks", NO_BODY)?)?;
        Ok(page.items)
    }

    pub fn get_task(&self, id: i64) -> Result<Task, ApiError> {
        require(self.call(Method::GET, &format!("/tasks/{id}"), NO_BODY)?)
    }

    pub fn create_task(&self, task: &TaskCreate) -> Result<Task, ApiError> {
        require(self.call(Method::POST, "/tasks", Some(task))?)
    }

    pub fn update_task(&self, id: i64, update: &TaskUpdate) -> Result<Task, ApiError> {
        require(self.call(Method::PUT, &format!("/tasks/{id}"), Some(update))?)
    }

    pub fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        self.call::<_, serde_json::Value>(Method::DELETE, &format!("/tasks/{id}"), NO_BODY)?;
        Ok(())
    }

    pub fn health(&self) -> Result<Health, ApiError> {
        require(self.call(Method::GET, "/health", NO_BODY)?)
    }

    fn call<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Option<T>, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "sending request");

        let mut request = self
            .http
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        // The bearer header goes on last so it wins any collision.
        if let Some(token) = self.session.get() {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        let status = response.status();
        let text = response.text()?;
        tracing::debug!(%status, body_len = text.len(), "response received");

        interpret_response(status, &text)
    }
}

/// Maps a finished round-trip onto the client's contract: non-success
/// becomes an error carrying the server's `detail`, 204 is an absent body,
/// anything else must decode.
fn interpret_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<Option<T>, ApiError> {
    if !status.is_success() {
        return Err(ApiError::Server {
            status,
            message: error_detail(body),
        });
    }
    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(body)?))
}

fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail")?.as_str().map(str::to_string))
        .unwrap_or_else(|| FALLBACK_ERROR.to_string())
}

fn require<T>(body: Option<T>) -> Result<T, ApiError> {
    body.ok_or(ApiError::MissingBody)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_uses_the_server_detail() {
        let err = interpret_response::<serde_json::Value>(
            StatusCode::UNAUTHORIZED,
            r#"{"detail":"Incorrect email or password"}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Incorrect email or password");
    }

    #[test]
    fn error_falls_back_when_body_is_not_json() {
        let err =
            interpret_response::<serde_json::Value>(StatusCode::BAD_GATEWAY, "<html>oops</html>")
                .unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_ERROR);
    }

    #[test]
    fn error_falls_back_when_detail_is_missing_or_not_a_string() {
        for body in [r#"{"message":"nope"}"#, r#"{"detail":42}"#, "{}"] {
            let err = interpret_response::<serde_json::Value>(StatusCode::NOT_FOUND, body)
                .unwrap_err();
            assert_eq!(err.to_string(), FALLBACK_ERROR);
        }
    }

    #[test]
    fn no_content_is_absent_without_a_parse_attempt() {
        let result =
            interpret_response::<serde_json::Value>(StatusCode::NO_CONTENT, "not json at all")
                .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn success_body_decodes() {
        let token: Option<Token> =
            interpret_response(StatusCode::OK, r#"{"access_token":"tok-1"}"#).unwrap();
        assert_eq!(token.unwrap().access_token, "tok-1");
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let result = interpret_response::<Token>(StatusCode::OK, "{broken");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
