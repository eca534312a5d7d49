//! Command-line argument parsing for ollama-chat
//!
//! Provides the clap-based CLI. The one flag also accepts the single-dash
//! long spelling `-model`.

use clap::Parser;
use std::ffi::OsString;

use crate::streaming::DEFAULT_MODEL;

/// ollama-chat - Chat with a local Ollama model from the terminal
#[derive(Parser, Debug)]
#[command(name = "ollama-chat")]
#[command(about = "Chat with a local Ollama model, streaming replies as they arrive", long_about = None)]
pub struct Args {
    /// The name of the Ollama model to use
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,
}

impl Args {
    /// Parse the process arguments
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_flags(std::env::args_os()))
    }

    /// Parse an explicit argument list, program name first
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_flags(args))
    }
}

/// Rewrite `-model` and `-model=<name>` to their double-dash form
///
/// Left alone, clap would read `-model` as `-m odel`.
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some("-model") => OsString::from("--model"),
            Some(s) if s.starts_with("-model=") => OsString::from(format!("-{}", s)),
            _ => arg,
        })
        .collect()
}
