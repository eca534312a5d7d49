//! Streaming client module
//!
//! Provides the Ollama chat client, the NDJSON line scanner and the
//! fragment reader that sits between them.

pub mod client;
pub mod parser;
pub mod reader;

// Re-export commonly used types
pub use client::{ChatBackend, OllamaClient, CHAT_PATH, DEFAULT_MODEL, DEFAULT_OLLAMA_URL};
pub use parser::{decode_fragment, LineScanner, MAX_LINE_SIZE};
pub use reader::{collect_reply, FragmentReader};
