use std::fs;
use std::io;
use std::path::PathBuf;

const APP_DIR: &str = "devtask";
const SESSION_FILE: &str = "session";

/// File-backed home of the bearer token. One token per client; writes
/// overwrite, and the last writer wins across processes.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        SessionStore { path }
    }

    /// `~/.local/share/devtask/session` or the platform equivalent.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR)
            .join(SESSION_FILE)
    }

    /// The stored token, if any. A missing or empty file means no session.
    pub fn get(&self) -> Option<String> {
        let content = fs::read_to_string(&self.path).ok()?;
        let token = content.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    pub fn set(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    /// Forget the token. Clearing an absent session is not an error.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
