use super::prompt::{build_translation_prompt, SYSTEM_PROMPT};
use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::domain::TranslationRequest;
use translator_errors::TranslationError;

pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";

const REFERER: &str = "https://quick-translator.local";
const TITLE: &str = "Quick Translator";

/// Where chat-completion requests go and which model answers them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
    pub model: String,
}

impl Endpoint {
    pub fn new(url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            model: model.into(),
        }
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_MODEL)
    }
}

pub struct OpenRouterClient {
    http_client: reqwest::Client,
    endpoint: Endpoint,
    api_key: Option<String>,
}

impl OpenRouterClient {
    pub fn new(endpoint: Endpoint, api_key: Option<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends one chat-completion request and returns the first choice's text.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(TranslationError::MissingCredential)?;

        let prompt = build_translation_prompt(request);
        let body = ChatCompletionRequest::new(&self.endpoint.model, SYSTEM_PROMPT, prompt);

        tracing::debug!(
            from = %request.source_language,
            to = %request.target_language,
            model = %self.endpoint.model,
            "Sending chat completion request"
        );

        let response = self
            .http_client
            .post(&self.endpoint.url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", REFERER)
            .header("X-Title", TITLE)
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationError::TransportFailure(describe(&e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Chat completion endpoint answered {}: {}", status, body);
            return Err(TranslationError::UpstreamStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranslationError::TransportFailure(describe(&e)))?;

        parse_completion(&body)
    }
}

/// Decodes a chat-completion body into the first choice's message content.
pub fn parse_completion(body: &str) -> Result<String, TranslationError> {
    if body.trim().is_empty() {
        return Err(TranslationError::EmptyBody);
    }

    let completion: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| TranslationError::DecodeFailure(e.to_string()))?;

    completion
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or(TranslationError::NoChoices)
}

// reqwest keeps the interesting part (connection refused, dns, tls) in the source chain
fn describe(error: &reqwest::Error) -> String {
    let mut detail = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Language;
    use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    const BONJOUR: &str = r#"{"choices":[{"message":{"role":"assistant","content":"Bonjour"}}]}"#;

    #[derive(Clone, Default)]
    struct Recorded {
        hits: Arc<AtomicUsize>,
        last: Arc<Mutex<Option<(Option<String>, serde_json::Value)>>>,
    }

    async fn spawn_upstream(status: StatusCode, body: &'static str) -> (Endpoint, Recorded) {
        let recorded = Recorded::default();
        let state = recorded.clone();
        let app = Router::new().route(
            "/chat/completions",
            post(move |headers: HeaderMap, Json(payload): Json<serde_json::Value>| {
                let state = state.clone();
                async move {
                    state.hits.fetch_add(1, Ordering::SeqCst);
                    let auth = headers
                        .get(AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    *state.last.lock().unwrap() = Some((auth, payload));
                    (status, body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let endpoint = Endpoint::new(format!("http://{}/chat/completions", addr), DEFAULT_MODEL);
        (endpoint, recorded)
    }

    fn hello_to_french() -> TranslationRequest {
        TranslationRequest::new(Language::English, Language::French, "Hello".to_string())
    }

    #[tokio::test]
    async fn test_translate_returns_first_choice() {
        let (endpoint, recorded) = spawn_upstream(StatusCode::OK, BONJOUR).await;
        let client = OpenRouterClient::new(endpoint, Some("test-key".to_string()));

        let translated = client.translate(&hello_to_french()).await.unwrap();
        assert_eq!(translated, "Bonjour");

        let (auth, payload) = recorded.last.lock().unwrap().clone().unwrap();
        assert_eq!(auth.as_deref(), Some("Bearer test-key"));
        assert_eq!(payload["model"], DEFAULT_MODEL);
        assert_eq!(payload["messages"][0]["role"], "system");
        assert_eq!(payload["messages"][0]["content"], "You are a helpful assistant.");
        assert_eq!(payload["messages"][1]["role"], "user");
        assert_eq!(
            payload["messages"][1]["content"],
            "Translate the following text from English to French: Hello"
        );
    }

    #[tokio::test]
    async fn test_missing_key_skips_network() {
        let (endpoint, recorded) = spawn_upstream(StatusCode::OK, BONJOUR).await;
        let client = OpenRouterClient::new(endpoint, None);

        let result = client.translate(&hello_to_french()).await;
        assert_eq!(result, Err(TranslationError::MissingCredential));
        assert_eq!(recorded.hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_carries_detail() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint = Endpoint::new(format!("http://{}/chat/completions", addr), DEFAULT_MODEL);
        let client = OpenRouterClient::new(endpoint, Some("test-key".to_string()));

        let error = client.translate(&hello_to_french()).await.unwrap_err();
        let TranslationError::TransportFailure(detail) = &error else {
            panic!("expected transport failure, got {:?}", error);
        };
        let lowered = detail.to_lowercase();
        assert!(lowered.contains("connect"), "detail: {}", detail);
        assert!(lowered.contains("refused"), "detail: {}", detail);
        assert!(error.user_message().contains(detail.as_str()));
    }

    #[tokio::test]
    async fn test_empty_choices() {
        let (endpoint, _) = spawn_upstream(StatusCode::OK, r#"{"choices":[]}"#).await;
        let client = OpenRouterClient::new(endpoint, Some("test-key".to_string()));

        let result = client.translate(&hello_to_french()).await;
        assert_eq!(result, Err(TranslationError::NoChoices));
    }

    #[tokio::test]
    async fn test_truncated_body() {
        let (endpoint, _) = spawn_upstream(StatusCode::OK, r#"{"choices":[{"mess"#).await;
        let client = OpenRouterClient::new(endpoint, Some("test-key".to_string()));

        let result = client.translate(&hello_to_french()).await;
        assert!(matches!(result, Err(TranslationError::DecodeFailure(_))));
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let (endpoint, _) =
            spawn_upstream(StatusCode::UNAUTHORIZED, r#"{"error":"bad key"}"#).await;
        let client = OpenRouterClient::new(endpoint, Some("wrong".to_string()));

        let result = client.translate(&hello_to_french()).await;
        assert_eq!(result, Err(TranslationError::UpstreamStatus(401)));
    }

    #[tokio::test]
    async fn test_each_call_hits_upstream() {
        let (endpoint, recorded) = spawn_upstream(StatusCode::OK, BONJOUR).await;
        let client = OpenRouterClient::new(endpoint, Some("test-key".to_string()));

        let first = client.translate(&hello_to_french()).await;
        let second = client.translate(&hello_to_french()).await;
        assert_eq!(first, Ok("Bonjour".to_string()));
        assert_eq!(second, Ok("Bonjour".to_string()));
        assert_eq!(recorded.hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_parse_completion_outcomes() {
        assert_eq!(parse_completion(BONJOUR), Ok("Bonjour".to_string()));
        assert_eq!(parse_completion(""), Err(TranslationError::EmptyBody));
        assert_eq!(parse_completion("  \n"), Err(TranslationError::EmptyBody));
        assert_eq!(
            parse_completion(r#"{"choices":[]}"#),
            Err(TranslationError::NoChoices)
        );
        assert!(matches!(
            parse_completion("{\"choices\":"),
            Err(TranslationError::DecodeFailure(_))
        ));
        assert!(matches!(
            parse_completion(r#"{"id":"no-choices-field"}"#),
            Err(TranslationError::DecodeFailure(_))
        ));
    }

    #[test]
    fn test_parse_completion_without_role() {
        let body = r#"{"choices":[{"message":{"content":"Hola"}},{"message":{"content":"Buenas"}}]}"#;
        assert_eq!(parse_completion(body), Ok("Hola".to_string()));
    }
}
