/// Errors raised while talking to an LLM provider
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Required secret is absent from the environment
    #[error("{variable} not configured")]
    MissingCredential { variable: String },

    /// Provider selector names none of the known adapters
    #[error("Unsupported LLM provider: {name}")]
    UnsupportedProvider { name: String },

    /// Non-success HTTP status, body kept verbatim for diagnostics
    #[error("{provider} API error ({status}): {body}")]
    ProviderApi {
        provider: String,
        status: u16,
        body: String,
    },

    /// Successful response without usable text
    #[error("Failed to generate summary from {provider}")]
    EmptySummary { provider: String },

    /// Every fallback model answered "not found"
    #[error("{provider} API error: all models failed ({}). Last error: {last}", .attempted.join(", "))]
    ModelsExhausted {
        provider: String,
        attempted: Vec<String>,
        last: Box<LlmError>,
    },

    /// Request never produced an HTTP response
    #[error("{provider} request failed: {message}")]
    Transport { provider: String, message: String },

    /// 2xx response that could not be decoded
    #[error("{provider} returned an invalid response: {message}")]
    InvalidResponse { provider: String, message: String },

    /// Invalid provider setting
    #[error("LLM configuration error: {0}")]
    Config(String),
}

impl LlmError {
    pub fn missing_credential<S: Into<String>>(variable: S) -> Self {
        Self::MissingCredential {
            variable: variable.into(),
        }
    }

    pub fn provider_api<S: Into<String>, B: Into<String>>(provider: S, status: u16, body: B) -> Self {
        Self::ProviderApi {
            provider: provider.into(),
            status,
            body: body.into(),
        }
    }

    pub fn empty_summary<S: Into<String>>(provider: S) -> Self {
        Self::EmptySummary {
            provider: provider.into(),
        }
    }

    pub fn transport<S: Into<String>, M: Into<String>>(provider: S, message: M) -> Self {
        Self::Transport {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn invalid_response<S: Into<String>, M: Into<String>>(provider: S, message: M) -> Self {
        Self::InvalidResponse {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the provider reported the requested model as unavailable.
    ///
    /// Gemini answers unknown models with HTTP 404 and an error envelope
    /// `{"error": {"code": 404, ...}}`; either signal counts.
    pub fn is_model_not_found(&self) -> bool {
        match self {
            Self::ProviderApi { status, body, .. } => {
                *status == 404 || error_envelope_code(body) == Some(404)
            }
            _ => false,
        }
    }

    /// Whether the failure is caused by local configuration rather than the provider
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential { .. } | Self::UnsupportedProvider { .. } | Self::Config(_)
        )
    }
}

fn error_envelope_code(body: &str) -> Option<i64> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("error")?.get("code")?.as_i64()
}

/// Study notes error types
#[derive(Debug, thiserror::Error)]
pub enum StudyNotesError {
    /// LLM related error
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system error
    #[error("File system error: {0}")]
    FileSystem(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StudyNotesError {
    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create file system error
    pub fn file_system<S: Into<String>>(msg: S) -> Self {
        Self::FileSystem(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create not found error
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}

// HTTP response conversion
impl StudyNotesError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Llm(e) if e.is_configuration() => 500,
            Self::Llm(_) => 502,
            Self::InvalidInput(_) => 400,
            Self::NotFound(_) => 404,
            Self::Config(_) => 500,
            Self::FileSystem(_) => 500,
            Self::Internal(_) => 500,
            Self::Io(_) => 500,
            Self::Json(_) => 400,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_from_status() {
        let err = LlmError::provider_api("Gemini", 404, "model missing");
        assert!(err.is_model_not_found());
    }

    #[test]
    fn test_not_found_from_envelope_code() {
        let body = r#"{"error":{"code":404,"message":"models/gemini-x is not found","status":"NOT_FOUND"}}"#;
        let err = LlmError::provider_api("Gemini", 400, body);
        assert!(err.is_model_not_found());
    }

    #[test]
    fn test_other_errors_are_not_not_found() {
        let body = r#"{"error":{"code":403,"message":"API key not valid"}}"#;
        assert!(!LlmError::provider_api("Gemini", 403, body).is_model_not_found());
        assert!(!LlmError::empty_summary("Gemini").is_model_not_found());
        assert!(!LlmError::transport("Gemini", "connection reset").is_model_not_found());
    }

    #[test]
    fn test_models_exhausted_message_mentions_last_error() {
        let err = LlmError::ModelsExhausted {
            provider: "Gemini".to_string(),
            attempted: vec!["a".to_string(), "b".to_string()],
            last: Box::new(LlmError::provider_api("Gemini", 404, "gone")),
        };
        let message = err.to_string();
        assert!(message.contains("a, b"));
        assert!(message.contains("gone"));
    }

    #[test]
    fn test_status_codes() {
        let missing: StudyNotesError = LlmError::missing_credential("GROQ_API_KEY").into();
        assert_eq!(missing.status_code(), 500);

        let upstream: StudyNotesError = LlmError::provider_api("Groq", 429, "slow down").into();
        assert_eq!(upstream.status_code(), 502);

        assert_eq!(StudyNotesError::not_found("note").status_code(), 404);
        assert_eq!(StudyNotesError::invalid_input("bad").status_code(), 400);
    }

    #[test]
    fn test_llm_error_is_transparent() {
        let err: StudyNotesError = LlmError::missing_credential("GEMINI_API_KEY").into();
        assert_eq!(err.to_string(), "GEMINI_API_KEY not configured");
    }
}
