use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Accepted upload extensions
pub const ALLOWED_EXTENSIONS: &[&str] = &["txt", "md"];

/// Note processing status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoteStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

/// Uploaded study note
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    /// Unique identifier
    pub id: String,

    /// Display title (file name without extension)
    pub title: String,

    /// Original filename
    pub file_name: String,

    /// Blob name inside the upload directory
    pub file_path: String,

    /// Processing status
    pub status: NoteStatus,

    /// Markdown summary, set once summarization completes
    #[serde(default)]
    pub summary: Option<String>,

    /// Upload timestamp
    pub created_at: DateTime<Utc>,

    /// Last status change
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create new pending note
    pub fn new(id: String, file_name: String, file_path: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title_from_file_name(&file_name),
            file_name,
            file_path,
            status: NoteStatus::Pending,
            summary: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_status(&mut self, status: NoteStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

/// Lower-cased extension when it is one we accept
pub fn allowed_extension(file_name: &str) -> Option<String> {
    let ext = std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())?
        .to_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Title shown for a file: the name without a `.txt`/`.md` suffix
pub fn title_from_file_name(file_name: &str) -> String {
    let trimmed = file_name.trim();
    for ext in ALLOWED_EXTENSIONS {
        let suffix = format!(".{}", ext);
        let Some(split) = trimmed.len().checked_sub(suffix.len()) else {
            continue;
        };
        if trimmed.is_char_boundary(split) && trimmed[split..].eq_ignore_ascii_case(&suffix) {
            return trimmed[..split].trim().to_string();
        }
    }
    trimmed.to_string()
}

/// Summarize request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeNoteRequest {
    /// Note ID
    #[serde(default)]
    pub note_id: Option<String>,

    /// Blob name, accepted in place of the note ID
    #[serde(default)]
    pub file_path: Option<String>,
}

/// Retry request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryRequest {
    pub note_id: String,
}

/// Summarize response
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub success: bool,
    pub summary: String,
}

/// Upload response
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub note: Note,
}

/// Search query
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search term
    #[serde(default)]
    pub q: String,
}

/// Generic success response
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
