//! CLI module for ollama-chat
//!
//! Handles command-line argument parsing and the resolved configuration.

pub mod args;
pub mod config;

pub use args::{normalize_flags, Args};
pub use config::Config;
