use std::env;
use std::path::PathBuf;

use crate::session::SessionStore;

const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";
pub const SERVICE_URL_ENV: &str = "DEVTASK_URL";

#[derive(Debug, Clone)]
pub struct Settings {
    pub service_url: String,
    pub session_path: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        let service_url =
            env::var(SERVICE_URL_ENV).unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());
        Settings {
            service_url: normalize_url(&service_url),
            session_path: SessionStore::default_path(),
        }
    }
}

// Paths are joined verbatim, so the base must not end in a slash.
fn normalize_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(normalize_url("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize_url("http://localhost:8000"), "http://localhost:8000");
    }
}
