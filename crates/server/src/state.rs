use std::sync::Arc;
use studynotes_common::{AppConfig, Result, StudyNotesError};
use studynotes_llm::{Summarizer, TextSummarizer};
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::blobs::BlobStore;
use crate::notes::NoteStore;
use crate::types::{allowed_extension, Note, ALLOWED_EXTENSIONS};

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Note records
    pub notes: Arc<RwLock<NoteStore>>,

    /// Note bodies
    pub blobs: BlobStore,

    /// Summarization client
    pub summarizer: Arc<dyn TextSummarizer>,
}

impl AppState {
    /// Create new application state reading provider settings from the environment
    pub fn new(config: AppConfig) -> Result<Self> {
        Self::with_summarizer(config, Arc::new(Summarizer::from_env()))
    }

    pub fn with_summarizer(config: AppConfig, summarizer: Arc<dyn TextSummarizer>) -> Result<Self> {
        config.ensure_directories()?;
        let notes = NoteStore::load(&config.notes_path)?;
        let blobs = BlobStore::new(config.upload_dir.clone());

        Ok(Self {
            config,
            notes: Arc::new(RwLock::new(notes)),
            blobs,
            summarizer,
        })
    }

    /// Validate and store an uploaded file, then record a pending note
    pub async fn create_note(&self, file_name: &str, bytes: &[u8]) -> Result<Note> {
        let ext = allowed_extension(file_name).ok_or_else(|| {
            StudyNotesError::invalid_input(format!(
                "Unsupported file type: {} (allowed: {})",
                file_name,
                ALLOWED_EXTENSIONS.join(", ")
            ))
        })?;

        if bytes.len() > self.config.max_upload_bytes {
            return Err(StudyNotesError::invalid_input(format!(
                "File exceeds the {} byte upload limit",
                self.config.max_upload_bytes
            )));
        }

        if std::str::from_utf8(bytes).is_err() {
            return Err(StudyNotesError::invalid_input("File is not valid UTF-8 text"));
        }

        let id = Uuid::new_v4().to_string();
        let blob_name = format!("{}.{}", id, ext);
        self.blobs.write(&blob_name, bytes).await?;

        let note = Note::new(id, file_name.to_string(), blob_name);
        let added = self.notes.write().await.add(note.clone());
        if let Err(e) = added {
            if let Err(cleanup) = self.blobs.remove(&note.file_path).await {
                warn!("Failed to remove orphaned blob {}: {}", note.file_path, cleanup);
            }
            return Err(e);
        }

        info!("Stored note {} ({}, {} bytes)", note.id, note.file_name, bytes.len());
        Ok(note)
    }
}
