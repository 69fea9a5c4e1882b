use actix_web::{get, HttpResponse};
use serde_json::json;
use studynotes_llm::ProviderSettings;

/// Liveness check reporting the configured provider
#[get("/health")]
pub async fn health() -> HttpResponse {
    let provider = match ProviderSettings::from_env() {
        Ok(settings) => settings.provider.as_str().to_string(),
        Err(e) => format!("unconfigured ({})", e),
    };

    HttpResponse::Ok().json(json!({
        "status": "ok",
        "provider": provider,
    }))
}
