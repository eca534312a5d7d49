//! Ollama chat streaming client
//!
//! Sends the whole transcript to `POST /api/chat` with `stream: true` and
//! reads back newline-delimited JSON fragments:
//! - HTTP/1.1 streaming via reqwest
//! - No request timeout, no retries
//! - Status must be exactly 200

use std::io::Write;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::errors::{ChatError, Result};
use crate::streaming::reader::{collect_reply, FragmentReader};
use crate::types::{ChatMessage, ChatRequest};

/// Default Ollama API endpoint
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Chat endpoint path
pub const CHAT_PATH: &str = "/api/chat";

/// Default model
pub const DEFAULT_MODEL: &str = "llama3.2:3b";

/// Something that can turn a transcript into a streamed assistant reply
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Stream a reply for `messages`, echoing text to `out` as it arrives,
    /// and return the full reply
    async fn stream_chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
        out: &mut (dyn Write + Send),
    ) -> Result<String>;
}

/// Ollama streaming client
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    chat_url: String,
}

impl OllamaClient {
    /// Create client for the default local endpoint
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_OLLAMA_URL)
    }

    /// Create client for a custom Ollama base URL
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        // No timeout: a turn waits for as long as the server keeps streaming.
        let client = Client::builder().build().map_err(ChatError::ClientError)?;

        Ok(Self {
            client,
            chat_url: format!("{}{}", base_url.trim_end_matches('/'), CHAT_PATH),
        })
    }

    /// Full URL requests are posted to
    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }
}

#[async_trait]
impl ChatBackend for OllamaClient {
    async fn stream_chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
        out: &mut (dyn Write + Send),
    ) -> Result<String> {
        let request = ChatRequest::streaming(model, messages);
        let body = serde_json::to_vec(&request).map_err(ChatError::EncodeError)?;

        debug!(
            url = %self.chat_url,
            model,
            messages = messages.len(),
            "sending chat request to Ollama"
        );

        let response = self
            .client
            .post(&self.chat_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(ChatError::TransportError)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::HttpError { status, body });
        }

        // The reader owns the body; it is dropped when collection returns,
        // whether at `done`, end of stream, or on error.
        let reader = FragmentReader::new(Box::pin(response.bytes_stream()));
        collect_reply(reader, out).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OllamaClient::new();
        assert!(client.is_ok());

        let client = client.unwrap();
        assert_eq!(client.chat_url(), "http://localhost:11434/api/chat");
    }

    #[test]
    fn test_client_with_base_url() {
        let client = OllamaClient::with_base_url("http://127.0.0.1:8080/").unwrap();
        assert_eq!(client.chat_url(), "http://127.0.0.1:8080/api/chat");
    }
}
