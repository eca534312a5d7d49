//! ollama-chat - terminal chat client for a local Ollama server
//!
//! Keeps the conversation in memory, resends the whole history every turn,
//! and prints the model's reply as it streams in.
//!
//! # Architecture
//!
//! - **repl**: conversation loop, input sources, terminal display
//! - **streaming**: `/api/chat` client and NDJSON fragment reader
//! - **types**: wire messages and the transcript

pub mod errors;
pub mod types;
pub mod streaming;
pub mod repl;
pub mod cli;
pub mod logging;

// Re-export commonly used types
pub use errors::{ChatError, Result};
pub use repl::{ChatLoop, LoopControl};
pub use streaming::{ChatBackend, OllamaClient};
pub use types::{ChatMessage, Role, Transcript};
