//! Message types for the Ollama chat API
//!
//! Defines the request envelope sent to `/api/chat` and the fragments
//! streamed back, one JSON object per line.

use serde::{Deserialize, Deserializer, Serialize};

/// Author of a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Message typed by the user
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Reply produced by the model
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Request envelope for `POST /api/chat`
///
/// Borrows the transcript so building a request never mutates it.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    pub stream: bool,
}

impl<'a> ChatRequest<'a> {
    /// Streaming request for the given model and history
    pub fn streaming(model: &'a str, messages: &'a [ChatMessage]) -> Self {
        Self {
            model,
            messages,
            stream: true,
        }
    }
}

/// One streamed fragment of the assistant's reply
///
/// Missing and `null` fields both decode to their zero value, so a fragment
/// is never dropped for a field it does not need.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: FragmentMessage,
    #[serde(default, deserialize_with = "null_as_default")]
    pub done: bool,
}

/// Partial message carried by a fragment
///
/// The role is kept as sent; the server may use roles this client never
/// writes itself.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FragmentMessage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let messages = vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")];
        let request = ChatRequest::streaming("llama3.2:3b", &messages);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "llama3.2:3b",
                "messages": [
                    {"role": "user", "content": "hi"},
                    {"role": "assistant", "content": "hello"}
                ],
                "stream": true
            })
        );
    }

    #[test]
    fn test_full_fragment_deserialization() {
        let line = r#"{"model":"llama3.2:3b","created_at":"2024-01-01T00:00:00Z","message":{"role":"assistant","content":"Hel"},"done":false}"#;
        let fragment: ChatResponse = serde_json::from_str(line).unwrap();

        assert_eq!(fragment.model, "llama3.2:3b");
        assert_eq!(fragment.created_at, "2024-01-01T00:00:00Z");
        assert_eq!(fragment.message.role, "assistant");
        assert_eq!(fragment.message.content, "Hel");
        assert!(!fragment.done);
    }

    #[test]
    fn test_sparse_fragment_defaults() {
        let fragment: ChatResponse =
            serde_json::from_str(r#"{"message":{"content":"lo"},"done":true}"#).unwrap();
        assert_eq!(fragment.message.content, "lo");
        assert!(fragment.message.role.is_empty());
        assert!(fragment.done);

        let fragment: ChatResponse = serde_json::from_str(r#"{"model":"m"}"#).unwrap();
        assert!(fragment.message.content.is_empty());
        assert!(!fragment.done);
    }

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let fragment: ChatResponse = serde_json::from_str(
            r#"{"model":null,"created_at":null,"message":{"role":null,"content":null},"done":null}"#,
        )
        .unwrap();
        assert_eq!(fragment, ChatResponse::default());

        let fragment: ChatResponse =
            serde_json::from_str(r#"{"message":null,"done":true}"#).unwrap();
        assert!(fragment.message.content.is_empty());
        assert!(fragment.done);
    }

    #[test]
    fn test_unknown_fragment_role_kept() {
        let fragment: ChatResponse = serde_json::from_str(
            r#"{"message":{"role":"","content":"!"},"done":true}"#,
        )
        .unwrap();
        assert_eq!(fragment.message.role, "");
        assert_eq!(fragment.message.content, "!");

        let fragment: ChatResponse = serde_json::from_str(
            r#"{"message":{"role":"tool","content":"x"},"done":false}"#,
        )
        .unwrap();
        assert_eq!(fragment.message.role, "tool");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let line = r#"{"model":"m","message":{"role":"assistant","content":""},"done":true,"done_reason":"stop","eval_count":10}"#;
        let fragment: ChatResponse = serde_json::from_str(line).unwrap();
        assert!(fragment.done);
    }
}
