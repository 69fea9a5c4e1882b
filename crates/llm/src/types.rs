use serde::{Deserialize, Serialize};

/// Summarization input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummarizeRequest {
    /// Full document body
    pub text: String,

    /// Document title (not part of the prompt)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl SummarizeRequest {
    /// Create request without a title
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
        }
    }

    /// Attach a title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Summarization result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummarizeResult {
    /// Markdown summary, exactly as returned by the provider
    pub summary: String,
}

// --- OpenAI-style chat completions (Groq, OpenAI) ---

/// Chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completions request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Chat completions response body (only the fields we read)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ChatResponseMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
    }
}

// --- Gemini generateContent ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// generateContent request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    pub generation_config: GeminiGenerationConfig,
}

impl GeminiRequest {
    /// Single user turn holding the whole prompt
    pub fn single_text(text: String, temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: Some(text) }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature,
                max_output_tokens,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,
}

/// generateContent response body
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// Text of the first part of the first candidate
    pub fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
    }
}

// --- Hugging Face inference ---

#[derive(Debug, Clone, Serialize)]
pub struct HuggingFaceParameters {
    pub max_length: u32,
    pub min_length: u32,
}

/// Inference request body
#[derive(Debug, Clone, Serialize)]
pub struct HuggingFaceRequest {
    pub inputs: String,
    pub parameters: HuggingFaceParameters,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HuggingFaceSummary {
    #[serde(default)]
    pub summary_text: Option<String>,
}

/// Inference response: either a list of outputs or a single object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HuggingFaceResponse {
    Many(Vec<HuggingFaceSummary>),
    One(HuggingFaceSummary),
}

impl HuggingFaceResponse {
    pub fn summary_text(self) -> Option<String> {
        match self {
            Self::Many(items) => items.into_iter().next().and_then(|s| s.summary_text),
            Self::One(item) => item.summary_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_first_content() {
        let body = r###"{"choices":[{"message":{"role":"assistant","content":"## 1. 개요"}},{"message":{"content":"second"}}]}"###;
        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_content().as_deref(), Some("## 1. 개요"));

        let empty: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(empty.first_content().is_none());
    }

    #[test]
    fn test_gemini_request_shape() {
        let request = GeminiRequest::single_text("hello".to_string(), 0.7, 8192);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 8192);
    }

    #[test]
    fn test_gemini_first_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"요약"}],"role":"model"}}]}"#;
        let response: GeminiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_text().as_deref(), Some("요약"));

        let blocked: GeminiResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert!(blocked.first_text().is_none());
    }

    #[test]
    fn test_huggingface_array_and_object() {
        let many: HuggingFaceResponse =
            serde_json::from_str(r#"[{"summary_text":"first"},{"summary_text":"second"}]"#).unwrap();
        assert_eq!(many.summary_text().as_deref(), Some("first"));

        let one: HuggingFaceResponse = serde_json::from_str(r#"{"summary_text":"only"}"#).unwrap();
        assert_eq!(one.summary_text().as_deref(), Some("only"));

        let error: HuggingFaceResponse =
            serde_json::from_str(r#"{"error":"Model is loading"}"#).unwrap();
        assert!(error.summary_text().is_none());
    }
}
