//! Study notes LLM integration
//!
//! Markdown summarization through one of four hosted providers
//! (Groq, OpenAI, Gemini, Hugging Face), with model fallback for Gemini.

mod chat_client;
mod client;
mod gemini_client;
mod huggingface_client;
mod llm_trait;
mod prompts;
mod provider;
mod summarize;
mod types;

pub use chat_client::{ChatCompletionsClient, GROQ_MODEL, OPENAI_MODEL};
pub use gemini_client::{candidate_models, GeminiClient, DEFAULT_API_VERSION, GEMINI_MODELS};
pub use huggingface_client::{HuggingFaceClient, HUGGINGFACE_MODEL};
pub use llm_trait::{SummaryProvider, TextSummarizer};
pub use prompts::{inline_prompt, user_prompt, SYSTEM_PROMPT, USER_PROMPT_PREFIX};
pub use provider::{ProviderKind, ProviderSettings};
pub use studynotes_common::LlmError;
pub use summarize::{build_provider, summarize_text, Summarizer};
pub use types::{SummarizeRequest, SummarizeResult};
