pub mod notes;
pub mod search;
pub mod summarize;
pub mod system;

use actix_web::web;

/// Register all `/api` routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(notes::upload_note)
            .service(notes::list_notes)
            .service(notes::get_note)
            .service(notes::delete_note)
            .service(summarize::summarize)
            .service(summarize::retry)
            .service(search::search)
            .service(system::health),
    );
}
