use std::sync::Arc;

use async_trait::async_trait;
use studynotes_common::LlmError;
use tracing::{debug, info};

use crate::chat_client::ChatCompletionsClient;
use crate::gemini_client::GeminiClient;
use crate::huggingface_client::HuggingFaceClient;
use crate::llm_trait::{SummaryProvider, TextSummarizer};
use crate::provider::{ProviderKind, ProviderSettings};
use crate::types::{SummarizeRequest, SummarizeResult};

type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

enum SettingsSource {
    /// Re-read on every call
    Lookup(EnvLookup),
    Fixed(ProviderSettings),
}

/// Dispatches a summarization to the configured provider
///
/// Holds no per-call state; one instance may serve concurrent requests.
pub struct Summarizer {
    source: SettingsSource,
}

impl Summarizer {
    /// Provider settings come from the process environment at call time
    pub fn from_env() -> Self {
        Self::with_lookup(|key: &str| std::env::var(key).ok())
    }

    /// Provider settings come from `lookup` at call time
    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            source: SettingsSource::Lookup(Arc::new(lookup)),
        }
    }

    /// Always use `settings`
    pub fn with_settings(settings: ProviderSettings) -> Self {
        Self {
            source: SettingsSource::Fixed(settings),
        }
    }

    /// Settings the next call would use
    pub fn current_settings(&self) -> Result<ProviderSettings, LlmError> {
        match &self.source {
            SettingsSource::Lookup(lookup) => ProviderSettings::from_lookup(lookup.as_ref()),
            SettingsSource::Fixed(settings) => Ok(settings.clone()),
        }
    }

    /// Summarize `request.text` with exactly one provider
    pub async fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizeResult, LlmError> {
        let settings = self.current_settings()?;
        let provider = build_provider(&settings)?;

        info!(
            "Starting summarization - Provider: {}, Title: {}, Text length: {} chars",
            provider.kind(),
            request.title.as_deref().unwrap_or("-"),
            request.text.len()
        );

        let summary = provider.summarize(&request.text).await?;

        debug!("Summary received - Length: {} chars", summary.len());
        Ok(SummarizeResult { summary })
    }
}

#[async_trait]
impl TextSummarizer for Summarizer {
    async fn summarize(&self, request: SummarizeRequest) -> Result<SummarizeResult, LlmError> {
        Summarizer::summarize(self, &request).await
    }
}

/// Instantiate the adapter for `settings.provider`.
///
/// Credential checks happen here, so a missing key never reaches the network.
pub fn build_provider(settings: &ProviderSettings) -> Result<Box<dyn SummaryProvider>, LlmError> {
    let provider: Box<dyn SummaryProvider> = match settings.provider {
        ProviderKind::Groq | ProviderKind::OpenAi => {
            Box::new(ChatCompletionsClient::from_settings(settings)?)
        }
        ProviderKind::Gemini => Box::new(GeminiClient::from_settings(settings)?),
        ProviderKind::HuggingFace => Box::new(HuggingFaceClient::from_settings(settings)?),
    };
    Ok(provider)
}

/// Summarize with the provider selected by the process environment
pub async fn summarize_text(request: SummarizeRequest) -> Result<SummarizeResult, LlmError> {
    Summarizer::from_env().summarize(&request).await
}
