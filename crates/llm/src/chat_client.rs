use async_trait::async_trait;
use reqwest::Client;
use studynotes_common::LlmError;
use tracing::{debug, info};

use crate::client::{build_http_client, non_empty_summary, send_json};
use crate::llm_trait::SummaryProvider;
use crate::prompts::{user_prompt, SYSTEM_PROMPT};
use crate::provider::{ProviderKind, ProviderSettings};
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

pub const GROQ_MODEL: &str = "llama-3.3-70b-versatile";
pub const OPENAI_MODEL: &str = "gpt-4o-mini";

const TEMPERATURE: f32 = 0.7;
const GROQ_MAX_TOKENS: u32 = 8192;
const OPENAI_MAX_TOKENS: u32 = 4096;

/// Client for OpenAI-style `/v1/chat/completions` endpoints (Groq, OpenAI)
#[derive(Debug, Clone)]
pub struct ChatCompletionsClient {
    kind: ProviderKind,
    endpoint: String,
    api_key: String,
    model: &'static str,
    max_tokens: u32,
    client: Client,
}

impl ChatCompletionsClient {
    /// Build from settings; fails with `MissingCredential` before any I/O
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self, LlmError> {
        let (model, max_tokens) = match settings.provider {
            ProviderKind::Groq => (GROQ_MODEL, GROQ_MAX_TOKENS),
            ProviderKind::OpenAi => (OPENAI_MODEL, OPENAI_MAX_TOKENS),
            other => {
                return Err(LlmError::config(format!(
                    "{} does not speak the chat completions protocol",
                    other.display_name()
                )))
            }
        };

        let api_key = settings.require_api_key()?.to_string();
        let endpoint = format!("{}/v1/chat/completions", settings.resolved_base_url());
        let client = build_http_client(settings.timeout)?;

        info!(
            "{} client initialized - Model: {}",
            settings.provider.display_name(),
            model
        );

        Ok(Self {
            kind: settings.provider,
            endpoint,
            api_key,
            model,
            max_tokens,
            client,
        })
    }

    pub fn model(&self) -> &str {
        self.model
    }

    fn build_request(&self, text: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.to_string(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user_prompt(text))],
            temperature: TEMPERATURE,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl SummaryProvider for ChatCompletionsClient {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn summarize(&self, text: &str) -> Result<String, LlmError> {
        let provider = self.kind.display_name();
        let body = self.build_request(text);

        debug!(
            "Sending chat completion to {} - Model: {}, Text length: {}",
            provider,
            self.model,
            text.len()
        );

        let response: ChatCompletionResponse = send_json(
            provider,
            self.client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(&body),
        )
        .await?;

        non_empty_summary(provider, response.first_content())
    }
}
