use async_trait::async_trait;
use reqwest::Client;
use studynotes_common::LlmError;
use tracing::{debug, info};

use crate::client::{build_http_client, non_empty_summary, send_json};
use crate::llm_trait::SummaryProvider;
use crate::prompts::inline_prompt;
use crate::provider::{ProviderKind, ProviderSettings};
use crate::types::{HuggingFaceParameters, HuggingFaceRequest, HuggingFaceResponse};

pub const HUGGINGFACE_MODEL: &str = "facebook/bart-large-cnn";

const MAX_LENGTH: u32 = 500;
const MIN_LENGTH: u32 = 100;

/// Hosted inference API client
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl HuggingFaceClient {
    /// Build from settings; fails with `MissingCredential` before any I/O
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self, LlmError> {
        let api_key = settings.require_api_key()?.to_string();
        let endpoint = format!("{}/models/{}", settings.resolved_base_url(), HUGGINGFACE_MODEL);
        let client = build_http_client(settings.timeout)?;

        info!("Hugging Face client initialized - Model: {}", HUGGINGFACE_MODEL);

        Ok(Self {
            endpoint,
            api_key,
            client,
        })
    }
}

#[async_trait]
impl SummaryProvider for HuggingFaceClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::HuggingFace
    }

    async fn summarize(&self, text: &str) -> Result<String, LlmError> {
        let provider = ProviderKind::HuggingFace.display_name();
        // No role separation on this API: the system prompt rides in the input.
        let body = HuggingFaceRequest {
            inputs: inline_prompt(text),
            parameters: HuggingFaceParameters {
                max_length: MAX_LENGTH,
                min_length: MIN_LENGTH,
            },
        };

        debug!("Sending inference request to Hugging Face - Text length: {}", text.len());

        let response: HuggingFaceResponse = send_json(
            provider,
            self.client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(&body),
        )
        .await?;

        non_empty_summary(provider, response.summary_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let settings = ProviderSettings::for_provider(ProviderKind::HuggingFace, "hf_test");
        let client = HuggingFaceClient::from_settings(&settings).unwrap();
        assert_eq!(
            client.endpoint,
            "https://api-inference.huggingface.co/models/facebook/bart-large-cnn"
        );
    }
}
