//! Line input for the chat loop
//!
//! Two sources sit behind [`InputSource`]: rustyline when stdin is an
//! interactive terminal, and plain buffered reads otherwise. Both report
//! end of input and interrupts as [`ChatError::InputError`].

use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

use rustyline::DefaultEditor;
use tracing::{debug, warn};

use crate::errors::{ChatError, Result};

/// Source of user input lines
pub trait InputSource {
    /// Show `prompt` and block for one line
    ///
    /// The returned text may still carry its line ending.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        (**self).read_line(prompt)
    }
}

/// Buffered line reader for piped or redirected input
pub struct LineReader<R, W> {
    reader: R,
    prompt_out: W,
}

impl LineReader<StdinLock<'static>, Stdout> {
    /// Read from the process's stdin, prompting on stdout
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineReader<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> InputSource for LineReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        if let Err(err) = self
            .prompt_out
            .write_all(prompt.as_bytes())
            .and_then(|_| self.prompt_out.flush())
        {
            debug!(error = %err, "failed to write prompt");
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(ChatError::InputError("end of input".to_string())),
            // A partial line at end of input is dropped, not submitted.
            Ok(_) if !line.ends_with('\n') => {
                Err(ChatError::InputError("unexpected end of input".to_string()))
            }
            Ok(_) => Ok(line),
            Err(err) => Err(ChatError::InputError(err.to_string())),
        }
    }
}

/// Interactive line editor backed by rustyline
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| ChatError::InputError(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl InputSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let line = self
            .editor
            .readline(prompt)
            .map_err(|e| ChatError::InputError(e.to_string()))?;

        if !line.is_empty() {
            let _ = self.editor.add_history_entry(line.as_str());
        }

        Ok(line)
    }
}

/// Pick the input source for the process's stdin
pub fn stdin_source() -> Box<dyn InputSource> {
    if io::stdin().is_terminal() {
        match EditorInput::new() {
            Ok(editor) => return Box::new(editor),
            Err(err) => warn!(error = %err, "line editor unavailable, falling back to plain input"),
        }
    }
    Box::new(LineReader::stdin())
}
