//! Gateway to the hosted generative model.
//!
//! Wraps the three operations the front-end needs: streaming chat, structured
//! config generation and short node explanations. The gateway is an explicit
//! collaborator with a lifetime of one user session; construct it once and
//! hand it to the task layer.

use std::collections::VecDeque;
use std::env;
use std::time::Duration;

use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt};
use reqwest::Client;

use crate::wire::{
    Content, ErrorResponse, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ThinkingConfig,
};

pub mod error;
pub mod prompt;
mod sse;
mod wire;

pub use error::GatewayError;

pub const CHAT_MODEL: &str = "gemini-3-pro-preview";
pub const GENERATION_MODEL: &str = "gemini-3-flash-preview";

pub const SYSTEM_INSTRUCTION: &str = "You are Tauri Nexus, an expert AI assistant specialized in the Tauri Framework (tauri-apps/tauri).
Your goal is to help developers build, debug, and understand secure, cross-platform applications using Rust and Web Technologies.
You have deep knowledge of:
- Rust (backend) and JavaScript/TypeScript (frontend).
- The Tauri Inter-Process Communication (IPC) bridge.
- tauri.conf.json configuration.
- Security best practices (Scope, Permissions, CSP).
- The differences between Tauri v1 and v2.

When providing code, prefer TypeScript for frontend and Rust for backend. Always prioritize security.";

/// Synthetic assistant turn emitted when the chat stream fails.
pub const CHAT_FALLBACK: &str = "I encountered an error while communicating with the Tauri Nexus core. Please check your API key or try again.";

pub const EXPLANATION_FALLBACK: &str = "Error retrieving explanation.";
pub const EXPLANATION_EMPTY: &str = "No explanation available.";

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const THINKING_BUDGET: u32 = 1024;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    User,
    Model,
}

impl Role {
    fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One settled conversation turn, the gateway's view of a transcript entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigParams {
    pub app_name: String,
    pub window_title: String,
    pub identifier: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub resizable: bool,
    pub security_relaxed: bool,
}

impl Default for ConfigParams {
    fn default() -> Self {
        Self {
            app_name: "my-tauri-app".to_string(),
            window_title: "My Awesome App".to_string(),
            identifier: "com.example.app".to_string(),
            width: 800,
            height: 600,
            fullscreen: false,
            resizable: true,
            security_relaxed: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub api_key: String,
    pub chat_model: String,
    pub generation_model: String,
}

impl GatewayConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            chat_model: CHAT_MODEL.to_string(),
            generation_model: GENERATION_MODEL.to_string(),
        }
    }

    /// Read the credential from `GEMINI_API_KEY` or `API_KEY`. Absence is a
    /// fatal precondition for every gateway call and surfaces here, before
    /// any network attempt.
    pub fn from_env() -> Result<Self, GatewayError> {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .map_err(|_| GatewayError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }
}

#[derive(Clone, Debug)]
pub struct Gateway {
    client: Client,
    config: GatewayConfig,
    base_url: String,
}

impl Gateway {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        Self::with_base_url(config, BASE_URL.to_string())
    }

    /// Create a gateway against a custom base url (for testing / integration).
    pub fn with_base_url(config: GatewayConfig, base_url: String) -> Result<Self, GatewayError> {
        if config.api_key.is_empty() {
            return Err(GatewayError::MissingApiKey);
        }

        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Stream an assistant turn for `text` given the prior transcript.
    ///
    /// Context is rebuilt from the transcript on every call; the REST API is
    /// stateless, so behavior is identical across gateway recreations.
    ///
    /// Errors become content: any transport or auth failure, before or during
    /// the stream, yields exactly one fallback chunk and terminates. The
    /// returned stream never raises past the pipeline boundary. Dropping it
    /// early releases the underlying connection.
    pub async fn stream_chat(&self, transcript: &[Turn], text: &str) -> ChatStream {
        let mut contents: Vec<Content> = transcript
            .iter()
            .map(|turn| Content::new(Some(turn.role.as_str()), &turn.text))
            .collect();
        contents.push(Content::new(Some(Role::User.as_str()), text));

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content::new(None, SYSTEM_INSTRUCTION)),
            generation_config: Some(GenerationConfig {
                response_mime_type: None,
                response_schema: None,
                thinking_config: Some(ThinkingConfig {
                    thinking_budget: THINKING_BUDGET,
                }),
            }),
        };

        let url = format!(
            "{}/models/{}:streamGenerateContent?alt=sse&key={}",
            self.base_url, self.config.chat_model, self.config.api_key
        );

        let response = match self.client.post(&url).json(&request).send().await {
            Ok(it) => it,
            Err(error) => {
                tracing::error!("sending chat request failed: {:?}", error);
                return ChatStream::failed();
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(code = status.as_u16(), body = %body, "chat request rejected");
            return ChatStream::failed();
        }

        ChatStream::open(response.bytes_stream().boxed())
    }

    /// Single shot structured generation constrained to the config schema.
    ///
    /// Returns the raw response text; it is expected to be valid JSON but the
    /// caller must parse it independently. Transport and auth failures
    /// propagate.
    pub async fn generate_config(&self, params: &ConfigParams) -> Result<String, GatewayError> {
        let request = GenerateContentRequest {
            contents: vec![Content::new(
                Some(Role::User.as_str()),
                &prompt::config_generation(params),
            )],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(prompt::config_schema()),
                thinking_config: None,
            }),
        };

        let response = self
            .generate_once(&self.config.generation_model, &request)
            .await?;

        Ok(response.text().unwrap_or_else(|| "{}".to_string()))
    }

    /// Short free text explanation for an architecture node label. Best
    /// effort annotation; every failure collapses to a fixed fallback string.
    pub async fn explain(&self, label: &str) -> String {
        let request = GenerateContentRequest {
            contents: vec![Content::new(
                Some(Role::User.as_str()),
                &prompt::node_explanation(label),
            )],
            system_instruction: None,
            generation_config: None,
        };

        match self
            .generate_once(&self.config.generation_model, &request)
            .await
        {
            Ok(response) => response
                .text()
                .unwrap_or_else(|| EXPLANATION_EMPTY.to_string()),
            Err(error) => {
                tracing::warn!("explanation request failed: {:?}", error);
                EXPLANATION_FALLBACK.to_string()
            }
        }
    }

    async fn generate_once(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GatewayError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.config.api_key
        );

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|it| it.error);

            let (code, message) = detail
                .map(|it| (it.code, it.message))
                .unwrap_or((status.as_u16(), body));

            tracing::error!(code = code, message = %message, "generation request failed");

            return Err(GatewayError::Api { code, message });
        }

        Ok(response.json().await?)
    }
}

/// Incremental text chunks of one assistant turn.
///
/// Yields chunks in arrival order and terminates with `None`. Not resumable;
/// consume fully or drop to cancel.
pub struct ChatStream {
    stream: Option<BoxStream<'static, reqwest::Result<Bytes>>>,
    decoder: sse::SseDecoder,
    pending: VecDeque<String>,
    fallback: Option<String>,
}

impl ChatStream {
    fn open(stream: BoxStream<'static, reqwest::Result<Bytes>>) -> Self {
        Self {
            stream: Some(stream),
            decoder: sse::SseDecoder::default(),
            pending: VecDeque::new(),
            fallback: None,
        }
    }

    fn failed() -> Self {
        Self {
            stream: None,
            decoder: sse::SseDecoder::default(),
            pending: VecDeque::new(),
            fallback: Some(CHAT_FALLBACK.to_string()),
        }
    }

    pub async fn next(&mut self) -> Option<String> {
        loop {
            if let Some(text) = self.pending.pop_front() {
                return Some(text);
            }

            if let Some(fallback) = self.fallback.take() {
                return Some(fallback);
            }

            let stream = self.stream.as_mut()?;
            match stream.next().await {
                Some(Ok(chunk)) => {
                    for payload in self.decoder.feed(&chunk) {
                        let response =
                            match serde_json::from_str::<GenerateContentResponse>(&payload) {
                                Ok(it) => it,
                                Err(error) => {
                                    tracing::warn!("skipping undecodable frame: {:?}", error);
                                    continue;
                                }
                            };

                        if let Some(text) = response.text() {
                            self.pending.push_back(text);
                        }
                    }
                }
                Some(Err(error)) => {
                    tracing::error!("chat stream failed: {:?}", error);
                    self.stream = None;
                    return Some(CHAT_FALLBACK.to_string());
                }
                None => {
                    self.stream = None;
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_gateway(base_url: String) -> Gateway {
        Gateway::with_base_url(GatewayConfig::new("test-api-key".to_string()), base_url)
            .expect("Failed to create gateway")
    }

    fn sse_body(texts: &[&str]) -> String {
        texts
            .iter()
            .map(|text| {
                format!(
                    "data: {{\"candidates\":[{{\"content\":{{\"parts\":[{{\"text\":\"{}\"}}],\"role\":\"model\"}}}}]}}\n\n",
                    text
                )
            })
            .collect()
    }

    #[test]
    fn new_with_empty_api_key_fails() {
        let result = Gateway::new(GatewayConfig::new(String::new()));

        assert!(matches!(result, Err(GatewayError::MissingApiKey)));
    }

    #[tokio::test]
    async fn stream_chat_yields_chunks_in_arrival_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!(
                "/models/{}:streamGenerateContent",
                CHAT_MODEL
            )))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(sse_body(&["Hello", " from", " Tauri"]), "text/event-stream"),
            )
            .mount(&server)
            .await;

        let gateway = test_gateway(server.uri());
        let mut stream = gateway.stream_chat(&[], "hi").await;

        let mut chunks = Vec::new();
        while let Some(chunk) = stream.next().await {
            chunks.push(chunk);
        }

        assert_eq!(chunks, vec!["Hello", " from", " Tauri"]);
    }

    #[tokio::test]
    async fn stream_chat_on_rejected_request_yields_single_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "error": { "code": 500, "message": "boom" }
            })))
            .mount(&server)
            .await;

        let gateway = test_gateway(server.uri());
        let mut stream = gateway.stream_chat(&[], "hi").await;

        assert_eq!(stream.next().await.as_deref(), Some(CHAT_FALLBACK));
        assert_eq!(stream.next().await, None);
    }

    #[tokio::test]
    async fn generate_config_returns_raw_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/models/{}:generateContent", GENERATION_MODEL)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{ "text": "{\"package\":{\"productName\":\"demo\"}}" }],
                        "role": "model"
                    }
                }]
            })))
            .mount(&server)
            .await;

        let gateway = test_gateway(server.uri());
        let result = gateway.generate_config(&ConfigParams::default()).await;

        assert_eq!(
            result.unwrap(),
            "{\"package\":{\"productName\":\"demo\"}}".to_string()
        );
    }

    #[tokio::test]
    async fn generate_config_propagates_api_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "error": { "code": 403, "message": "key invalid" }
            })))
            .mount(&server)
            .await;

        let gateway = test_gateway(server.uri());
        let result = gateway.generate_config(&ConfigParams::default()).await;

        match result {
            Err(GatewayError::Api { code, message }) => {
                assert_eq!(code, 403);
                assert_eq!(message, "key invalid");
            }
            it => panic!("expected api error, got {:?}", it),
        }
    }

    #[tokio::test]
    async fn explain_on_failure_returns_fallback_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let gateway = test_gateway(server.uri());

        assert_eq!(gateway.explain("WebView").await, EXPLANATION_FALLBACK);
    }

    #[tokio::test]
    async fn explain_returns_model_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "The WebView renders the frontend." }] }
                }]
            })))
            .mount(&server)
            .await;

        let gateway = test_gateway(server.uri());

        assert_eq!(
            gateway.explain("WebView").await,
            "The WebView renders the frontend."
        );
    }
}
