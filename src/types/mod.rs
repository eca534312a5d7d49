//! Type definitions module
//!
//! Wire types for the Ollama chat endpoint and the conversation transcript.

pub mod messages;
pub mod transcript;

// Re-export commonly used types
pub use messages::{ChatMessage, ChatRequest, ChatResponse, FragmentMessage, Role};
pub use transcript::Transcript;
