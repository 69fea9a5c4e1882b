use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use studynotes_common::LlmError;
use tracing::debug;

/// Build the HTTP client shared by one provider instance.
///
/// Without an explicit timeout the transport default applies (none).
pub(crate) fn build_http_client(timeout: Option<Duration>) -> Result<Client, LlmError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| LlmError::config(format!("Failed to create HTTP client: {}", e)))
}

/// Send a request and decode a JSON body.
///
/// Non-success statuses become `ProviderApi` with the raw body attached.
/// Transport errors drop the URL, which may carry a query-string key.
pub(crate) async fn send_json<T: DeserializeOwned>(
    provider: &str,
    request: RequestBuilder,
) -> Result<T, LlmError> {
    let response = request
        .send()
        .await
        .map_err(|e| LlmError::transport(provider, e.without_url().to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| {
            LlmError::transport(provider, format!("Failed to read response body: {}", e.without_url()))
        })?;

    debug!(
        "{} responded - Status: {}, Body length: {}",
        provider,
        status.as_u16(),
        body.len()
    );

    if !status.is_success() {
        return Err(LlmError::provider_api(provider, status.as_u16(), body));
    }

    serde_json::from_str(&body)
        .map_err(|e| LlmError::invalid_response(provider, format!("Failed to parse response: {}", e)))
}

/// Accept only non-blank text; the text itself is returned untouched.
pub(crate) fn non_empty_summary(provider: &str, summary: Option<String>) -> Result<String, LlmError> {
    match summary {
        Some(summary) if !summary.trim().is_empty() => Ok(summary),
        _ => Err(LlmError::empty_summary(provider)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_summary() {
        assert_eq!(
            non_empty_summary("Groq", Some("  ## 1. 개요\n".to_string())).unwrap(),
            "  ## 1. 개요\n"
        );
        assert!(matches!(
            non_empty_summary("Groq", Some(String::new())),
            Err(LlmError::EmptySummary { .. })
        ));
        assert!(matches!(
            non_empty_summary("Groq", Some(" \n ".to_string())),
            Err(LlmError::EmptySummary { .. })
        ));
        assert!(matches!(
            non_empty_summary("Groq", None),
            Err(LlmError::EmptySummary { .. })
        ));
    }

    #[test]
    fn test_build_http_client_with_and_without_timeout() {
        assert!(build_http_client(None).is_ok());
        assert!(build_http_client(Some(Duration::from_secs(30))).is_ok());
    }
}
