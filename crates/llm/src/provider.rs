//! Provider selection and per-call settings

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use studynotes_common::LlmError;

pub const ENV_PROVIDER: &str = "LLM_PROVIDER";
pub const ENV_TIMEOUT_SECS: &str = "LLM_TIMEOUT_SECS";
pub const ENV_GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const ENV_GEMINI_API_VERSION: &str = "GEMINI_API_VERSION";

/// Supported LLM backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderKind {
    #[default]
    Groq,
    OpenAi,
    Gemini,
    HuggingFace,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::Groq,
        ProviderKind::OpenAi,
        ProviderKind::Gemini,
        ProviderKind::HuggingFace,
    ];

    /// Selector value used in `LLM_PROVIDER`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groq => "groq",
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
            Self::HuggingFace => "huggingface",
        }
    }

    /// Human readable name used in error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Groq => "Groq",
            Self::OpenAi => "OpenAI",
            Self::Gemini => "Gemini",
            Self::HuggingFace => "Hugging Face",
        }
    }

    /// Environment variable holding the credential
    pub fn api_key_var(&self) -> &'static str {
        match self {
            Self::Groq => "GROQ_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Gemini => "GEMINI_API_KEY",
            Self::HuggingFace => "HUGGINGFACE_API_KEY",
        }
    }

    /// Environment variable overriding the API base URL
    pub fn base_url_var(&self) -> &'static str {
        match self {
            Self::Groq => "GROQ_BASE_URL",
            Self::OpenAi => "OPENAI_BASE_URL",
            Self::Gemini => "GEMINI_BASE_URL",
            Self::HuggingFace => "HUGGINGFACE_BASE_URL",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::Groq => "https://api.groq.com/openai",
            Self::OpenAi => "https://api.openai.com",
            Self::Gemini => "https://generativelanguage.googleapis.com",
            Self::HuggingFace => "https://api-inference.huggingface.co",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ProviderKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| LlmError::UnsupportedProvider {
                name: s.to_string(),
            })
    }
}

/// Settings for one summarization call
///
/// Built from the environment (or any key lookup) right before dispatch;
/// never cached between calls.
#[derive(Debug, Clone, Default)]
pub struct ProviderSettings {
    /// Selected backend
    pub provider: ProviderKind,

    /// Credential for the selected backend
    pub api_key: Option<String>,

    /// Base URL override
    pub base_url: Option<String>,

    /// Gemini: model tried first
    pub gemini_model: Option<String>,

    /// Gemini: API version path segment
    pub gemini_api_version: Option<String>,

    /// Request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl ProviderSettings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let provider = match read(ENV_PROVIDER) {
            Some(name) => name.parse()?,
            None => ProviderKind::default(),
        };

        let timeout = match read(ENV_TIMEOUT_SECS) {
            Some(value) => Some(parse_timeout_seconds(&value)?),
            None => None,
        };

        Ok(Self {
            provider,
            api_key: read(provider.api_key_var()),
            base_url: read(provider.base_url_var()),
            gemini_model: read(ENV_GEMINI_MODEL).map(|m| m.trim().to_string()),
            gemini_api_version: read(ENV_GEMINI_API_VERSION).map(|v| v.trim().to_string()),
            timeout,
        })
    }

    /// Settings for `provider` with the given credential
    pub fn for_provider(provider: ProviderKind, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Credential, or `MissingCredential` naming the variable to set
    pub fn require_api_key(&self) -> Result<&str, LlmError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| LlmError::missing_credential(self.provider.api_key_var()))
    }

    /// Base URL without trailing slash
    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
            .trim_end_matches('/')
            .to_string()
    }
}

pub(crate) fn parse_timeout_seconds(value: &str) -> Result<Duration, LlmError> {
    let parsed = value.trim().parse::<u64>().map_err(|_| {
        LlmError::config(format!("{ENV_TIMEOUT_SECS} must be a positive integer in seconds"))
    })?;
    if parsed == 0 {
        return Err(LlmError::config(format!(
            "{ENV_TIMEOUT_SECS} must be greater than 0 seconds"
        )));
    }
    Ok(Duration::from_secs(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_provider_parse_is_case_insensitive() {
        assert_eq!("GROQ".parse::<ProviderKind>().unwrap(), ProviderKind::Groq);
        assert_eq!("OpenAI".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert_eq!(" gemini ".parse::<ProviderKind>().unwrap(), ProviderKind::Gemini);
        assert_eq!("HuggingFace".parse::<ProviderKind>().unwrap(), ProviderKind::HuggingFace);
    }

    #[test]
    fn test_unknown_provider() {
        let err = "anthropic".parse::<ProviderKind>().unwrap_err();
        assert!(matches!(err, LlmError::UnsupportedProvider { ref name } if name == "anthropic"));
    }

    #[test]
    fn test_default_provider_is_groq() {
        let settings = ProviderSettings::from_lookup(lookup(&[("GROQ_API_KEY", "gsk")])).unwrap();
        assert_eq!(settings.provider, ProviderKind::Groq);
        assert_eq!(settings.api_key.as_deref(), Some("gsk"));
        assert!(settings.timeout.is_none());

        let blank = ProviderSettings::from_lookup(lookup(&[("LLM_PROVIDER", "")])).unwrap();
        assert_eq!(blank.provider, ProviderKind::Groq);
    }

    #[test]
    fn test_only_selected_credential_is_read() {
        let settings = ProviderSettings::from_lookup(lookup(&[
            ("LLM_PROVIDER", "gemini"),
            ("GROQ_API_KEY", "gsk"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
        ]))
        .unwrap();
        assert_eq!(settings.provider, ProviderKind::Gemini);
        assert!(settings.api_key.is_none());
        assert_eq!(settings.gemini_model.as_deref(), Some("gemini-1.5-pro"));

        let err = settings.require_api_key().unwrap_err();
        assert!(matches!(err, LlmError::MissingCredential { ref variable } if variable == "GEMINI_API_KEY"));
    }

    #[test]
    fn test_timeout_parsing() {
        let settings = ProviderSettings::from_lookup(lookup(&[("LLM_TIMEOUT_SECS", "90")])).unwrap();
        assert_eq!(settings.timeout, Some(Duration::from_secs(90)));

        assert!(ProviderSettings::from_lookup(lookup(&[("LLM_TIMEOUT_SECS", "0")])).is_err());
        assert!(ProviderSettings::from_lookup(lookup(&[("LLM_TIMEOUT_SECS", "soon")])).is_err());
    }

    #[test]
    fn test_base_url_resolution() {
        let settings = ProviderSettings::for_provider(ProviderKind::OpenAi, "sk");
        assert_eq!(settings.resolved_base_url(), "https://api.openai.com");

        let settings = settings.with_base_url("http://127.0.0.1:1234/");
        assert_eq!(settings.resolved_base_url(), "http://127.0.0.1:1234");
    }
}
