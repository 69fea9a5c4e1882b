//! Study notes HTTP server
//!
//! Actix-web REST API for uploading notes, summarizing them through the
//! configured LLM provider, and searching their contents.

pub mod blobs;
pub mod error;
pub mod notes;
pub mod routes;
pub mod search;
pub mod state;
pub mod types;
pub mod workflow;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use studynotes_common::{AppConfig, Result, StudyNotesError};
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use error::{ApiError, ApiResult};
pub use routes::configure;
pub use state::AppState;

/// Start the HTTP server and run until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    config.validate()?;
    let bind_addr = config.server_bind_address();
    let state = Arc::new(AppState::new(config)?);

    info!("Listening on http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(configure)
    })
    .bind(&bind_addr)
    .map_err(|e| StudyNotesError::config(format!("Failed to bind {}: {}", bind_addr, e)))?
    .run()
    .await?;

    Ok(())
}
