//! Conversation loop
//!
//! Reads a line, sends the whole transcript to the backend, streams the
//! reply, and repeats until the user types `exit` or `quit`. Turns run
//! strictly one after another and no failure ends the session.

pub mod display;
pub mod input;

use std::io::Write;

use tracing::error;

use crate::streaming::ChatBackend;
use crate::types::Transcript;
pub use crate::repl::display::DisplayManager;
pub use crate::repl::input::{stdin_source, EditorInput, InputSource, LineReader};

/// Words that end the session
pub const EXIT_KEYWORDS: [&str; 2] = ["exit", "quit"];

/// What the loop should do after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Strip one trailing `\n` and then one trailing `\r`
pub fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Case-sensitive match against [`EXIT_KEYWORDS`]
pub fn is_exit_keyword(input: &str) -> bool {
    EXIT_KEYWORDS.contains(&input)
}

/// Interactive chat session
///
/// Owns the transcript; the backend only ever sees it borrowed.
pub struct ChatLoop<B, I, W> {
    backend: B,
    input: I,
    display: DisplayManager<W>,
    model: String,
    transcript: Transcript,
}

impl<B, I, W> ChatLoop<B, I, W>
where
    B: ChatBackend,
    I: InputSource,
    W: Write + Send,
{
    pub fn new(backend: B, input: I, out: W, model: impl Into<String>) -> Self {
        Self {
            backend,
            input,
            display: DisplayManager::new(out),
            model: model.into(),
            transcript: Transcript::new(),
        }
    }

    /// Print the banner and run turns until an exit keyword is read
    pub async fn run(&mut self) {
        self.display.show_banner(&self.model);

        while self.step().await == LoopControl::Continue {}
    }

    /// Read one line and, unless it is an exit keyword, run one turn
    pub async fn step(&mut self) -> LoopControl {
        let line = match self.input.read_line(display::USER_PROMPT) {
            Ok(line) => line,
            Err(err) => {
                error!(error = %err, "error reading user input");
                return LoopControl::Continue;
            }
        };

        let input = trim_line_ending(&line);
        if is_exit_keyword(input) {
            self.display.show_farewell();
            return LoopControl::Exit;
        }

        self.transcript.push_user(input);
        self.display.show_bot_label();

        let result = self
            .backend
            .stream_chat(
                &self.model,
                self.transcript.messages(),
                self.display.writer(),
            )
            .await;

        match result {
            Ok(reply) => {
                self.transcript.push_assistant(reply);
                self.display.end_reply();
            }
            Err(err) => {
                error!(
                    kind = err.kind(),
                    error = %err,
                    "error getting response from Ollama"
                );
                self.display.show_apology();
                self.transcript.rollback_user();
            }
        }

        LoopControl::Continue
    }

    /// History so far
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Model identifier sent with every request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Output written so far
    pub fn output(&self) -> &W {
        self.display.output()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
