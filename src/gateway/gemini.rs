//! # Gemini Gateway
//!
//! `generateContent` client for the Google generative language API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::errors::{GatewayError, GatewayResult};
use super::{TextGenerator, BLOCKED_MESSAGE, SERVICE_ERROR_MESSAGE};

const INVALID_KEY_MARKER: &str = "API key not valid";

/// Connection settings for [`GeminiGateway`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Per-call timeout; `None` waits as long as the API takes
    pub timeout: Option<Duration>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.0-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: None,
        }
    }
}

fn client_builder(timeout: Option<Duration>) -> reqwest::ClientBuilder {
    let builder = Client::builder();
    match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    }
}

#[derive(Debug)]
struct Configured {
    client: Client,
    api_key: String,
}

/// Gateway backed by the Gemini REST API.
///
/// Built once at startup. Without an API key, or if the HTTP client cannot
/// be built, every call fails with [`GatewayError::NotConfigured`].
#[derive(Debug)]
pub struct GeminiGateway {
    inner: Option<Configured>,
    model: String,
    base_url: String,
}

impl GeminiGateway {
    pub fn from_config(config: GeminiConfig) -> Self {
        let inner = match config.api_key.filter(|k| !k.trim().is_empty()) {
            None => {
                tracing::error!("GOOGLE_API_KEY not configured; generation is disabled");
                None
            }
            Some(api_key) => match client_builder(config.timeout).build() {
                Ok(client) => {
                    tracing::info!(model = %config.model, "Google GenAI client configured");
                    Some(Configured { client, api_key })
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to build Google GenAI client");
                    None
                }
            },
        };

        Self {
            inner,
            model: config.model,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.inner.is_some()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Map an HTTP status and body to the gateway contract
fn interpret(status: StatusCode, body: &str) -> GatewayResult<String> {
    if !status.is_success() {
        let auth_failure = matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
            || body.contains(INVALID_KEY_MARKER);
        if auth_failure {
            tracing::error!(%status, "Google API rejected the API key");
            return Err(GatewayError::InvalidApiKey);
        }
        tracing::error!(%status, body = %truncate(body, 300), "Google API request failed");
        return Ok(SERVICE_ERROR_MESSAGE.to_string());
    }

    let response: GenerateResponse = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "undecodable Google API response");
            return Ok(SERVICE_ERROR_MESSAGE.to_string());
        }
    };

    let block_reason = response
        .prompt_feedback
        .and_then(|f| f.block_reason);
    if let Some(reason) = block_reason {
        let text = format!("{} (Причина: {})", BLOCKED_MESSAGE, reason);
        tracing::warn!("{}", text);
        return Ok(text);
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        let text = format!("{} (Нет кандидатов для ответа)", BLOCKED_MESSAGE);
        tracing::warn!("{}", text);
        return Ok(text);
    };

    let finish = candidate.finish_reason.as_deref().unwrap_or("FINISH_REASON_UNSPECIFIED");
    if finish != "STOP" {
        let text = format!("{} (Генерация прервана: {})", BLOCKED_MESSAGE, finish);
        tracing::warn!("{}", text);
        return Ok(text);
    }

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    Ok(text.trim().to_string())
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[async_trait]
impl TextGenerator for GeminiGateway {
    async fn generate(&self, prompt: &str) -> GatewayResult<String> {
        let Some(inner) = &self.inner else {
            return Err(GatewayError::NotConfigured);
        };

        tracing::info!(prompt = %truncate(prompt, 300), "generating content");

        let request = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = inner
            .client
            .post(self.endpoint())
            .query(&[("key", inner.api_key.as_str())])
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(error = %e, "error calling Google API");
                return Ok(SERVICE_ERROR_MESSAGE.to_string());
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                tracing::error!(error = %e, "error reading Google API response");
                return Ok(SERVICE_ERROR_MESSAGE.to_string());
            }
        };

        interpret(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_fails_with_connection_kind() {
        let gateway = GeminiGateway::from_config(GeminiConfig::default());
        assert!(!gateway.is_configured());

        let err = gateway.generate("prompt").await.unwrap_err();
        assert!(err.is_connection());
        assert!(matches!(err, GatewayError::NotConfigured));
    }

    #[test]
    fn test_blank_key_is_unconfigured() {
        let gateway = GeminiGateway::from_config(GeminiConfig {
            api_key: Some("  ".to_string()),
            ..GeminiConfig::default()
        });
        assert!(!gateway.is_configured());
    }

    #[test]
    fn test_endpoint() {
        let gateway = GeminiGateway::from_config(GeminiConfig {
            base_url: "http://localhost:9000/".to_string(),
            ..GeminiConfig::default()
        });
        assert_eq!(
            gateway.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_successful_text_is_trimmed() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"  Hello "},{"text":"world \n"}]},"finishReason":"STOP"}]}"#;
        assert_eq!(interpret(StatusCode::OK, body).unwrap(), "Hello world");
    }

    #[test]
    fn test_block_reason() {
        let body = r#"{"candidates":[],"promptFeedback":{"blockReason":"SAFETY"}}"#;
        let text = interpret(StatusCode::OK, body).unwrap();
        assert!(text.starts_with(BLOCKED_MESSAGE));
        assert!(text.ends_with("(Причина: SAFETY)"));
    }

    #[test]
    fn test_no_candidates() {
        let text = interpret(StatusCode::OK, "{}").unwrap();
        assert!(text.ends_with("(Нет кандидатов для ответа)"));
    }

    #[test]
    fn test_abnormal_finish() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"partial"}]},"finishReason":"MAX_TOKENS"}]}"#;
        let text = interpret(StatusCode::OK, body).unwrap();
        assert!(text.ends_with("(Генерация прервана: MAX_TOKENS)"));
    }

    #[test]
    fn test_invalid_key() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        let err = interpret(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidApiKey));

        let err = interpret(StatusCode::FORBIDDEN, "{}").unwrap_err();
        assert!(err.is_connection());
    }

    #[test]
    fn test_server_error_becomes_body() {
        let text = interpret(StatusCode::INTERNAL_SERVER_ERROR, "oops").unwrap();
        assert_eq!(text, SERVICE_ERROR_MESSAGE);

        let text = interpret(StatusCode::OK, "not json").unwrap();
        assert_eq!(text, SERVICE_ERROR_MESSAGE);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("привет", 3), "при");
        assert_eq!(truncate("hi", 10), "hi");
    }
}
