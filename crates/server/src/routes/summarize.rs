use actix_web::{post, web, HttpResponse};
use std::sync::Arc;
use studynotes_common::StudyNotesError;

use crate::error::ApiResult;
use crate::state::AppState;
use crate::types::{RetryRequest, SummarizeNoteRequest, SummarizeResponse};
use crate::workflow::summarize_note;

#[post("/summarize")]
pub async fn summarize(
    req: web::Json<SummarizeNoteRequest>,
    state: web::Data<Arc<AppState>>,
) -> ApiResult<HttpResponse> {
    let req = req.into_inner();
    let note_id = match (req.note_id, req.file_path) {
        (Some(id), _) => id,
        (None, Some(file_path)) => state
            .notes
            .read()
            .await
            .find_by_file_path(&file_path)
            .map(|n| n.id.clone())
            .ok_or_else(|| StudyNotesError::not_found("Note not found"))?,
        (None, None) => {
            return Err(StudyNotesError::invalid_input("Missing noteId or filePath").into());
        }
    };

    let summary = summarize_note(&state, &note_id).await?;
    Ok(HttpResponse::Ok().json(SummarizeResponse { success: true, summary }))
}

#[post("/summarize/retry")]
pub async fn retry(req: web::Json<RetryRequest>, state: web::Data<Arc<AppState>>) -> ApiResult<HttpResponse> {
    let summary = summarize_note(&state, &req.note_id).await?;
    Ok(HttpResponse::Ok().json(SummarizeResponse { success: true, summary }))
}
