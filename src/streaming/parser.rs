//! Incremental NDJSON line scanner for streaming responses
//!
//! Ollama writes one complete JSON object per line. Network chunks do not
//! respect line boundaries, so bytes are buffered until a `\n` arrives:
//! - Buffer: 64KB per line, line ending included
//! - Trailing `\r` is dropped from every line
//! - A final unterminated line is released by [`LineScanner::finish`]

use crate::errors::{ChatError, Result};
use crate::types::ChatResponse;

/// Size of the per-line buffer (64KB)
///
/// A line must fit together with its `\n`, so content is limited to one
/// byte less than this.
pub const MAX_LINE_SIZE: usize = 65_536;

/// Incremental line scanner
#[derive(Debug)]
pub struct LineScanner {
    /// Bytes of the line currently being assembled, plus any complete
    /// lines not yet taken
    buffer: Vec<u8>,

    /// Length of the trailing line that has no `\n` yet
    open_line_len: usize,

    /// Buffer size a single line, newline included, must fit in
    max_line_size: usize,
}

impl LineScanner {
    /// Create scanner with the default line limit
    pub fn new() -> Self {
        Self::with_capacity(MAX_LINE_SIZE)
    }

    /// Create scanner with a custom line limit
    pub fn with_capacity(max_line_size: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(4096),
            open_line_len: 0,
            max_line_size,
        }
    }

    /// Append bytes read from the body
    ///
    /// Fails as soon as any line can no longer fit with its newline.
    pub fn push(&mut self, bytes: &[u8]) -> Result<()> {
        for &byte in bytes {
            if byte == b'\n' {
                self.open_line_len = 0;
                continue;
            }
            self.open_line_len += 1;
            if self.open_line_len >= self.max_line_size {
                return Err(ChatError::StreamReadError(format!(
                    "line exceeds maximum of {} bytes",
                    self.max_line_size
                )));
            }
        }

        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    /// Take the next complete line, without its line ending
    pub fn next_line(&mut self) -> Option<Vec<u8>> {
        let pos = self.buffer.iter().position(|&b| b == b'\n')?;
        let mut line: Vec<u8> = self.buffer.drain(..=pos).collect();
        line.pop();
        Some(drop_cr(line))
    }

    /// Take whatever remains once the stream has ended
    pub fn finish(&mut self) -> Option<Vec<u8>> {
        if let Some(line) = self.next_line() {
            return Some(line);
        }
        if self.buffer.is_empty() {
            return None;
        }
        let line = std::mem::take(&mut self.buffer);
        self.open_line_len = 0;
        Some(drop_cr(line))
    }

    /// Bytes currently buffered
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for LineScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn drop_cr(mut line: Vec<u8>) -> Vec<u8> {
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    line
}

/// Parse one line into a response fragment
///
/// Invalid UTF-8 is replaced with U+FFFD rather than failing the line.
pub fn decode_fragment(line: &[u8]) -> Result<ChatResponse> {
    let text = String::from_utf8_lossy(line);
    serde_json::from_str(&text).map_err(ChatError::ParseError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let mut scanner = LineScanner::new();
        scanner.push(b"{\"done\":true}\n").unwrap();

        assert_eq!(scanner.next_line().unwrap(), b"{\"done\":true}");
        assert!(scanner.next_line().is_none());
        assert!(scanner.is_empty());
    }

    #[test]
    fn test_line_split_across_chunks() {
        let mut scanner = LineScanner::new();

        scanner.push(b"{\"message\":").unwrap();
        assert!(scanner.next_line().is_none());

        scanner.push(b"{\"content\":\"hi\"}}\n{\"do").unwrap();
        assert_eq!(
            scanner.next_line().unwrap(),
            br#"{"message":{"content":"hi"}}"#
        );
        assert!(scanner.next_line().is_none());
        assert_eq!(scanner.buffer_size(), 4);
    }

    #[test]
    fn test_multiple_lines_in_one_chunk() {
        let mut scanner = LineScanner::new();
        scanner.push(b"a\nb\n\nc\n").unwrap();

        assert_eq!(scanner.next_line().unwrap(), b"a");
        assert_eq!(scanner.next_line().unwrap(), b"b");
        assert_eq!(scanner.next_line().unwrap(), b"");
        assert_eq!(scanner.next_line().unwrap(), b"c");
        assert!(scanner.next_line().is_none());
    }

    #[test]
    fn test_carriage_return_dropped() {
        let mut scanner = LineScanner::new();
        scanner.push(b"abc\r\n").unwrap();
        assert_eq!(scanner.next_line().unwrap(), b"abc");
    }

    #[test]
    fn test_finish_releases_unterminated_tail() {
        let mut scanner = LineScanner::new();
        scanner.push(b"first\nsecond").unwrap();

        assert_eq!(scanner.finish().unwrap(), b"first");
        assert_eq!(scanner.finish().unwrap(), b"second");
        assert!(scanner.finish().is_none());
    }

    #[test]
    fn test_line_overflow() {
        let mut scanner = LineScanner::with_capacity(16);

        let result = scanner.push(&[b'a'; 32]);
        assert!(matches!(result, Err(ChatError::StreamReadError(_))));
    }

    #[test]
    fn test_complete_oversized_line_rejected() {
        let mut scanner = LineScanner::with_capacity(16);

        let mut chunk = vec![b'a'; 32];
        chunk.push(b'\n');
        assert!(scanner.push(&chunk).is_err());
    }

    #[test]
    fn test_limit_spans_chunks() {
        let mut scanner = LineScanner::with_capacity(8);
        scanner.push(b"12345").unwrap();
        assert!(scanner.push(b"6789").is_err());
    }

    #[test]
    fn test_line_must_fit_with_newline() {
        let mut scanner = LineScanner::with_capacity(8);
        scanner.push(b"1234567\n").unwrap();
        assert_eq!(scanner.next_line().unwrap(), b"1234567");

        let mut scanner = LineScanner::with_capacity(8);
        assert!(scanner.push(b"12345678\n").is_err());
    }

    #[test]
    fn test_many_short_lines_do_not_overflow() {
        let mut scanner = LineScanner::with_capacity(8);
        scanner.push(b"1234567\n1234567\n1234567\n").unwrap();
        assert_eq!(scanner.next_line().unwrap(), b"1234567");
    }

    #[test]
    fn test_decode_fragment() {
        let fragment =
            decode_fragment(br#"{"message":{"content":"Hel"},"done":false}"#).unwrap();
        assert_eq!(fragment.message.content, "Hel");
        assert!(!fragment.done);
    }

    #[test]
    fn test_decode_fragment_invalid_utf8_replaced() {
        let mut line = br#"{"message":{"content":"a"#.to_vec();
        line.push(0xff);
        line.extend_from_slice(br#"b"},"done":true}"#);

        let fragment = decode_fragment(&line).unwrap();
        assert_eq!(fragment.message.content, "a\u{fffd}b");
        assert!(fragment.done);
    }

    #[test]
    fn test_decode_fragment_malformed() {
        let result = decode_fragment(b"{not json");
        assert!(matches!(result, Err(ChatError::ParseError(_))));
    }
}
