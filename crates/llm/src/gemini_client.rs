use async_trait::async_trait;
use reqwest::Client;
use studynotes_common::LlmError;
use tracing::{debug, info, warn};

use crate::client::{build_http_client, non_empty_summary, send_json};
use crate::llm_trait::SummaryProvider;
use crate::prompts::inline_prompt;
use crate::provider::{ProviderKind, ProviderSettings};
use crate::types::{GeminiRequest, GeminiResponse};

/// Candidate models in fallback order
pub const GEMINI_MODELS: &[&str] = &[
    "gemini-2.5-flash",
    "gemini-1.5-flash",
    "gemini-2.0-flash",
    "gemini-1.5-pro",
];

pub const DEFAULT_API_VERSION: &str = "v1beta";

const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 8192;

/// Attempt order: `configured` first, then the remaining candidates in
/// declared order without repeating it.
pub fn candidate_models(configured: &str) -> Vec<String> {
    std::iter::once(configured)
        .chain(GEMINI_MODELS.iter().copied().filter(|m| *m != configured))
        .map(str::to_string)
        .collect()
}

/// Gemini `generateContent` client with model fallback
#[derive(Debug, Clone)]
pub struct GeminiClient {
    base_url: String,
    api_version: String,
    api_key: String,
    models: Vec<String>,
    client: Client,
}

impl GeminiClient {
    /// Build from settings; fails with `MissingCredential` before any I/O
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self, LlmError> {
        let api_key = settings.require_api_key()?.to_string();
        let configured = settings.gemini_model.as_deref().unwrap_or(GEMINI_MODELS[0]);
        let api_version = settings
            .gemini_api_version
            .clone()
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
        let client = build_http_client(settings.timeout)?;

        info!(
            "Gemini client initialized - Model: {}, API version: {}",
            configured, api_version
        );

        Ok(Self {
            base_url: settings.resolved_base_url(),
            api_version,
            api_key,
            models: candidate_models(configured),
            client,
        })
    }

    /// Models in the order they will be tried
    pub fn models(&self) -> &[String] {
        &self.models
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url, self.api_version, model
        )
    }

    /// Single attempt against one model
    async fn generate(&self, model: &str, body: &GeminiRequest) -> Result<String, LlmError> {
        let provider = ProviderKind::Gemini.display_name();
        let response: GeminiResponse = send_json(
            provider,
            self.client
                .post(self.endpoint(model))
                .query(&[("key", self.api_key.as_str())])
                .json(body),
        )
        .await?;

        non_empty_summary(provider, response.first_text())
    }
}

#[async_trait]
impl SummaryProvider for GeminiClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    async fn summarize(&self, text: &str) -> Result<String, LlmError> {
        let body = GeminiRequest::single_text(inline_prompt(text), TEMPERATURE, MAX_OUTPUT_TOKENS);
        let mut attempted = Vec::with_capacity(self.models.len());
        let mut last_error = None;

        for model in &self.models {
            attempted.push(model.clone());
            debug!("Sending generateContent to Gemini - Model: {}, Text length: {}", model, text.len());

            match self.generate(model, &body).await {
                Ok(summary) => {
                    if attempted.len() > 1 {
                        info!("Gemini summary served by fallback model {}", model);
                    }
                    return Ok(summary);
                }
                Err(e) if e.is_model_not_found() => {
                    warn!("Gemini model {} not found, trying next candidate", model);
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        let last = last_error
            .unwrap_or_else(|| LlmError::config("No Gemini model candidates configured"));
        Err(LlmError::ModelsExhausted {
            provider: ProviderKind::Gemini.display_name().to_string(),
            attempted,
            last: Box::new(last),
        })
    }
}
