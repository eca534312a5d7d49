//! Lazy fragment sequence over a streamed response body
//!
//! Wraps the raw byte stream of one response and yields parsed fragments
//! until the body ends. A reader serves exactly one request and is consumed
//! by [`collect_reply`]; dropping it releases the underlying connection.

use std::io::Write;

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use tracing::{debug, warn};

use crate::errors::{ChatError, Result};
use crate::streaming::parser::{decode_fragment, LineScanner};
use crate::types::ChatResponse;

/// One-shot reader of NDJSON fragments
pub struct FragmentReader<S> {
    inner: S,
    scanner: LineScanner,
    exhausted: bool,
}

impl<S, E> FragmentReader<S>
where
    S: Stream<Item = std::result::Result<Bytes, E>> + Unpin,
    E: std::fmt::Display,
{
    /// Wrap a body byte stream
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            scanner: LineScanner::new(),
            exhausted: false,
        }
    }

    /// Next well-formed fragment, or `None` once the body is drained
    ///
    /// Empty lines are skipped. Lines that fail to parse are logged and
    /// skipped. Faults in the body itself end the sequence with
    /// [`ChatError::StreamReadError`].
    pub async fn next_fragment(&mut self) -> Result<Option<ChatResponse>> {
        while let Some(line) = self.next_line().await? {
            if line.is_empty() {
                continue;
            }

            match decode_fragment(&line) {
                Ok(fragment) => return Ok(Some(fragment)),
                Err(err) => {
                    warn!(
                        line = %String::from_utf8_lossy(&line),
                        error = %err,
                        "could not parse stream line, skipping"
                    );
                }
            }
        }

        Ok(None)
    }

    async fn next_line(&mut self) -> Result<Option<Vec<u8>>> {
        loop {
            if let Some(line) = self.scanner.next_line() {
                return Ok(Some(line));
            }
            if self.exhausted {
                return Ok(self.scanner.finish());
            }

            match self.inner.next().await {
                Some(Ok(chunk)) => self.scanner.push(&chunk)?,
                Some(Err(err)) => return Err(ChatError::StreamReadError(err.to_string())),
                None => self.exhausted = true,
            }
        }
    }
}

/// Print each fragment as it arrives and return the whole reply
///
/// Stops at the first fragment flagged `done`; anything after it is never
/// read. Terminal writes are best-effort and never fail the turn.
pub async fn collect_reply<S, E, W>(mut reader: FragmentReader<S>, out: &mut W) -> Result<String>
where
    S: Stream<Item = std::result::Result<Bytes, E>> + Unpin,
    E: std::fmt::Display,
    W: Write + ?Sized,
{
    let mut reply = String::new();

    while let Some(fragment) = reader.next_fragment().await? {
        let content = fragment.message.content;
        if let Err(err) = out
            .write_all(content.as_bytes())
            .and_then(|_| out.flush())
        {
            debug!(error = %err, "failed to write streamed text");
        }
        reply.push_str(&content);

        if fragment.done {
            break;
        }
    }

    Ok(reply)
}
