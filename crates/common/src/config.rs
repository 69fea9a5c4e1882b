use crate::error::StudyNotesError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default upload limit (10MB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Study notes application configuration
///
/// LLM provider settings are deliberately absent: they are read from the
/// environment on every summarization call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Data base path
    pub data_dir: PathBuf,

    /// Directory holding uploaded note bodies
    pub upload_dir: PathBuf,

    /// Note records file
    pub notes_path: PathBuf,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,

    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            upload_dir: PathBuf::from("./data/uploads"),
            notes_path: PathBuf::from("./data/notes.json"),
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            log_dir: PathBuf::from("./data/log"),
            log_level: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, StudyNotesError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let data_dir = Self::get_env_path("DATA_DIR").unwrap_or_else(|| PathBuf::from("./data"));

        let config = Self {
            upload_dir: Self::get_env_path("UPLOAD_DIR")
                .unwrap_or_else(|| data_dir.join("uploads")),
            notes_path: Self::get_env_path("NOTES_PATH")
                .unwrap_or_else(|| data_dir.join("notes.json")),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            log_dir: Self::get_env_path("LOG_DIR")
                .unwrap_or_else(|| data_dir.join("log")),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            data_dir,
        };

        // Ensure required directories exist
        config.ensure_directories()?;

        Ok(config)
    }

    /// Build a configuration rooted at `data_dir` with default layout
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            upload_dir: data_dir.join("uploads"),
            notes_path: data_dir.join("notes.json"),
            log_dir: data_dir.join("log"),
            data_dir,
            ..Self::default()
        }
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), StudyNotesError> {
        let mut dirs: Vec<&Path> = vec![
            self.data_dir.as_path(),
            self.upload_dir.as_path(),
            self.log_dir.as_path(),
        ];
        if let Some(notes_dir) = self.notes_path.parent() {
            if !notes_dir.as_os_str().is_empty() {
                dirs.push(notes_dir);
            }
        }

        for dir in dirs {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    StudyNotesError::config(format!(
                        "Failed to create directory {}: {}",
                        dir.display(),
                        e
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// Get full path for an uploaded note body
    pub fn get_upload_path(&self, filename: &str) -> PathBuf {
        self.upload_dir.join(filename)
    }

    /// Get log file path
    pub fn get_log_path(&self, filename: &str) -> PathBuf {
        self.log_dir.join(filename)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), StudyNotesError> {
        if self.log_level.trim().is_empty() {
            return Err(StudyNotesError::config("Log level cannot be empty"));
        }

        // Validate port range
        if self.server_port == 0 {
            return Err(StudyNotesError::config("Server port cannot be 0"));
        }

        if self.max_upload_bytes == 0 {
            return Err(StudyNotesError::config("Upload limit cannot be 0"));
        }

        Ok(())
    }
}
