use studynotes_common::{Result, StudyNotesError};
use studynotes_llm::SummarizeRequest;
use tracing::{error, info};

use crate::state::AppState;
use crate::types::{Note, NoteStatus};

/// Summarize a stored note and record the outcome on it.
///
/// The note moves to `processing`, then to `completed` with the summary or to
/// `failed` when the body cannot be read or the provider call fails.
pub async fn summarize_note(state: &AppState, note_id: &str) -> Result<String> {
    let note = set_status(state, note_id, NoteStatus::Processing).await?;

    let text = match state.blobs.read_to_string(&note.file_path).await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read note {}: {}", note_id, e);
            set_status(state, note_id, NoteStatus::Failed).await?;
            return Err(StudyNotesError::file_system("Failed to read note file"));
        }
    };

    let request = SummarizeRequest::new(text).with_title(note.title.clone());
    match state.summarizer.summarize(request).await {
        Ok(result) => {
            let summary = result.summary;
            let stored = summary.clone();
            state
                .notes
                .write()
                .await
                .update(note_id, move |n| {
                    n.summary = Some(stored);
                    n.set_status(NoteStatus::Completed);
                })?;
            info!("Summarized note {} ({} chars)", note_id, summary.chars().count());
            Ok(summary)
        }
        Err(e) => {
            error!("Summarization failed for note {}: {}", note_id, e);
            set_status(state, note_id, NoteStatus::Failed).await?;
            Err(e.into())
        }
    }
}

async fn set_status(state: &AppState, note_id: &str, status: NoteStatus) -> Result<Note> {
    state
        .notes
        .write()
        .await
        .update(note_id, |n| n.set_status(status))?
        .ok_or_else(|| StudyNotesError::not_found(format!("Note {}", note_id)))
}
