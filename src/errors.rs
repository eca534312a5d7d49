//! Error types for the Ollama chat client
//!
//! Every failure a turn can hit maps onto one variant here. None of them are
//! fatal to the process: the conversation loop logs them and moves on.

use thiserror::Error;

/// Main error type for the chat client
#[derive(Error, Debug)]
pub enum ChatError {
    /// The request envelope could not be serialized
    #[error("error encoding chat request: {0}")]
    EncodeError(#[source] serde_json::Error),

    /// The HTTP exchange could not be started or completed
    #[error("error sending request to Ollama: {0}")]
    TransportError(#[source] reqwest::Error),

    /// Ollama answered with something other than 200 OK
    #[error("received non-OK HTTP status: {status}, body: {body}")]
    HttpError {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Reading the streamed body failed underneath the line scanner
    #[error("error reading response stream: {0}")]
    StreamReadError(String),

    /// A streamed line was not a valid fragment
    #[error("could not parse stream fragment: {0}")]
    ParseError(#[source] serde_json::Error),

    /// Reading a line from the terminal failed
    #[error("error reading user input: {0}")]
    InputError(String),

    /// The HTTP client itself could not be built
    #[error("failed to build HTTP client: {0}")]
    ClientError(#[source] reqwest::Error),
}

impl ChatError {
    /// Taxonomy name used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            ChatError::EncodeError(_) => "encode-error",
            ChatError::TransportError(_) => "transport-error",
            ChatError::HttpError { .. } => "http-error",
            ChatError::StreamReadError(_) => "stream-read-error",
            ChatError::ParseError(_) => "parse-error",
            ChatError::InputError(_) => "input-error",
            ChatError::ClientError(_) => "client-error",
        }
    }
}

/// Result type alias for chat operations
pub type Result<T> = std::result::Result<T, ChatError>;
