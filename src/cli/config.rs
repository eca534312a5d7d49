//! Resolved runtime configuration
//!
//! Everything comes from the command line; there is no configuration file
//! and no environment lookup.

use crate::cli::Args;
use crate::streaming::{CHAT_PATH, DEFAULT_MODEL, DEFAULT_OLLAMA_URL};

/// Settings for one chat session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub model: String,
    pub ollama_url: String,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        Self {
            model: args.model.clone(),
            ..Self::default()
        }
    }

    /// Full chat endpoint URL
    pub fn chat_url(&self) -> String {
        format!("{}{}", self.ollama_url, CHAT_PATH)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
        }
    }
}
