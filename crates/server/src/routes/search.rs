use actix_web::{get, web, HttpResponse};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::error::ApiResult;
use crate::search::{normalize_query, rank, search_note, SearchResult};
use crate::state::AppState;
use crate::types::SearchQuery;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

#[get("/search")]
pub async fn search(query: web::Query<SearchQuery>, state: web::Data<Arc<AppState>>) -> ApiResult<HttpResponse> {
    let Some(term) = normalize_query(&query.q) else {
        return Ok(HttpResponse::Ok().json(SearchResponse { results: Vec::new() }));
    };

    let notes = state.notes.read().await.list();
    let mut results = Vec::new();

    for note in &notes {
        let content = match state.blobs.read_to_string(&note.file_path).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Skipping note {} in search: {}", note.id, e);
                continue;
            }
        };

        if let Some(result) = search_note(note, &content, &term) {
            results.push(result);
        }
    }

    rank(&mut results);
    Ok(HttpResponse::Ok().json(SearchResponse { results }))
}
