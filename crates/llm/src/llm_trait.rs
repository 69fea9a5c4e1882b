use async_trait::async_trait;
use studynotes_common::LlmError;

use crate::provider::ProviderKind;
use crate::types::{SummarizeRequest, SummarizeResult};

/// One LLM backend able to turn a document into a Markdown summary
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Backend this implementation talks to
    fn kind(&self) -> ProviderKind;

    /// Summarize the raw document text
    async fn summarize(&self, text: &str) -> Result<String, LlmError>;
}

/// Entry point used by callers that do not care which backend answers
#[async_trait]
pub trait TextSummarizer: Send + Sync {
    async fn summarize(&self, request: SummarizeRequest) -> Result<SummarizeResult, LlmError>;
}
