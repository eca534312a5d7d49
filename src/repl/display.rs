//! Terminal output for the chat loop
//!
//! Banner, labels, farewell and apology text. Every write is best-effort:
//! a broken terminal never fails a turn.

use colored::*;
use std::io::{self, Write};
use tracing::debug;

/// Prompt shown before each user line
pub const USER_PROMPT: &str = "You: ";

/// Label printed before the streamed reply
pub const BOT_LABEL: &str = "Bot: ";

/// Shown when a turn fails
pub const APOLOGY: &str = "Sorry, I encountered an error. Please check the console.";

/// Shown on exit
pub const FAREWELL: &str = "Goodbye!";

const RULE_WIDTH: usize = 66;

/// Display manager for chat output
pub struct DisplayManager<W> {
    out: W,
}

impl DisplayManager<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DisplayManager<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Show welcome banner
    pub fn show_banner(&mut self, model: &str) {
        let rule = "-".repeat(RULE_WIDTH);
        self.emit(format_args!(
            "{}\nStarting chatbot with model: {}. Type '{}' or '{}' to end.\n{}\n",
            rule.cyan(),
            model.bold(),
            "exit".green(),
            "quit".green(),
            rule.cyan()
        ));
    }

    /// Label the reply that is about to stream
    pub fn show_bot_label(&mut self) {
        self.emit(format_args!("{}", BOT_LABEL.green().bold()));
    }

    /// Close a streamed reply
    pub fn end_reply(&mut self) {
        self.emit(format_args!("\n"));
    }

    /// Tell the user the turn failed
    pub fn show_apology(&mut self) {
        self.emit(format_args!("\n{}\n", APOLOGY.red()));
    }

    pub fn show_farewell(&mut self) {
        self.emit(format_args!(
            "\n{}{}\n",
            BOT_LABEL.green().bold(),
            FAREWELL
        ));
    }

    /// Writer that streamed reply text goes to
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    /// Underlying writer, read-only
    pub fn output(&self) -> &W {
        &self.out
    }

    fn emit(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(err) = self.out.write_fmt(args).and_then(|_| self.out.flush()) {
            debug!(error = %err, "failed to write to terminal");
        }
    }
}
