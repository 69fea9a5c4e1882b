use actix_multipart::Multipart;
use actix_web::{delete, get, post, web, HttpResponse};
use futures_util::StreamExt;
use std::sync::Arc;
use studynotes_common::StudyNotesError;
use tracing::{info, warn};

use crate::error::ApiResult;
use crate::state::AppState;
use crate::types::{SuccessResponse, UploadResponse};

#[post("/notes")]
pub async fn upload_note(mut payload: Multipart, state: web::Data<Arc<AppState>>) -> ApiResult<HttpResponse> {
    let limit = state.config.max_upload_bytes;
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = payload.next().await {
        let mut field = field?;
        let content_disposition = field.content_disposition();

        if content_disposition.get_name() != Some("file") {
            while let Some(chunk) = field.next().await {
                chunk?;
            }
            continue;
        }

        let filename = content_disposition
            .get_filename()
            .unwrap_or("unknown")
            .to_string();

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            if data.len() + chunk.len() > limit {
                return Err(StudyNotesError::invalid_input(format!(
                    "File exceeds the {} byte upload limit",
                    limit
                ))
                .into());
            }
            data.extend_from_slice(&chunk);
        }

        upload = Some((filename, data));
    }

    let (filename, data) =
        upload.ok_or_else(|| StudyNotesError::invalid_input("No file uploaded"))?;
    let note = state.create_note(&filename, &data).await?;

    Ok(HttpResponse::Created().json(UploadResponse { note }))
}

#[get("/notes")]
pub async fn list_notes(state: web::Data<Arc<AppState>>) -> ApiResult<HttpResponse> {
    let notes = state.notes.read().await.list();
    Ok(HttpResponse::Ok().json(notes))
}

#[get("/notes/{id}")]
pub async fn get_note(path: web::Path<String>, state: web::Data<Arc<AppState>>) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let note = state
        .notes
        .read()
        .await
        .get(&id)
        .cloned()
        .ok_or_else(|| StudyNotesError::not_found(format!("Note {}", id)))?;
    Ok(HttpResponse::Ok().json(note))
}

#[delete("/notes/{id}")]
pub async fn delete_note(path: web::Path<String>, state: web::Data<Arc<AppState>>) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let removed = state
        .notes
        .write()
        .await
        .remove(&id)?
        .ok_or_else(|| StudyNotesError::not_found(format!("Note {}", id)))?;

    // The record is already gone; a leftover blob is unreachable
    if let Err(e) = state.blobs.remove(&removed.file_path).await {
        warn!("Deleted note {} but kept its blob {}: {}", id, removed.file_path, e);
    }
    info!("Deleted note {}", id);

    Ok(HttpResponse::Ok().json(SuccessResponse {
        success: true,
        message: Some("Note deleted".to_string()),
    }))
}
