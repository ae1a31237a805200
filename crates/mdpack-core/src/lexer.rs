//! Line-based lexer feeding the block parser.
//!
//! Splits input into lines without allocating: each `Line` borrows from
//! the input and carries its byte span. Newline scanning uses `memchr`
//! (SIMD on supported platforms); CRLF endings are tolerated.

use crate::span::Span;
use memchr::memchr;

/// A single line from the input with its source span.
///
/// The text excludes the trailing newline (and a preceding CR, if any).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub text: &'a str,
    pub span: Span,
}

impl Line<'_> {
    /// Whether the line contains only spaces and tabs.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.text.bytes().all(|b| b == b' ' || b == b'\t')
    }
}

/// Sequential line reader over a complete input string.
pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Lexer<'a> {
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// Consume and return the next line, or `None` at end of input.
    #[inline]
    pub fn next_line(&mut self) -> Option<Line<'a>> {
        let bytes = self.input.as_bytes();
        if self.offset >= bytes.len() {
            return None;
        }

        let start = self.offset;
        let end = match memchr(b'\n', &bytes[start..]) {
            Some(pos) => start + pos,
            None => bytes.len(),
        };

        // CRLF: drop the CR from the line text as well.
        let text_end = if end > start && bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        self.offset = if end < bytes.len() { end + 1 } else { end };

        Some(Line {
            text: &self.input[start..text_end],
            span: Span::new(start as u32, text_end as u32),
        })
    }
}
