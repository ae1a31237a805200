//! Inline parser: one left-to-right scan over a single line.
//!
//! Recognizes code spans, bold spans and links with fixed precedence
//! (code binds tighter than bold, bold tighter than links). Each match is
//! claimed exactly once; there is no re-parsing of already-claimed text.
//! Anything unmatched — including unterminated delimiters — stays literal.

use std::borrow::Cow;

use memchr::{memchr, memchr3};

use crate::ast::{CodeSpan, Inline, Link, Strong, Text};
use crate::error::{ParseWarning, ParseWarnings};
use crate::span::Span;

/// Parse the inline elements of one line.
///
/// `base_offset` is the line's byte offset in the whole input, so the
/// produced spans point into the original document. Unterminated code and
/// bold delimiters are recorded in `warnings` and degrade to plain text.
#[inline]
pub fn parse_inlines<'a>(
    text: &'a str,
    base_offset: u32,
    warnings: &mut ParseWarnings,
) -> Vec<Inline<'a>> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut parser = InlineParser::new(text, base_offset);
    parser.parse(warnings)
}

struct InlineParser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    base_offset: u32,
}

impl<'a> InlineParser<'a> {
    #[inline]
    fn new(text: &'a str, base_offset: u32) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            base_offset,
        }
    }

    fn parse(&mut self, warnings: &mut ParseWarnings) -> Vec<Inline<'a>> {
        let mut inlines = Vec::with_capacity(4);
        let mut text_start = 0;

        while self.pos < self.bytes.len() {
            let next = self.find_next_delimiter();
            if next >= self.bytes.len() {
                break;
            }
            self.pos = next;

            let matched = match self.bytes[self.pos] {
                b'`' => self.try_code_span(&mut inlines, &mut text_start, warnings),
                b'*' => self.try_bold(&mut inlines, &mut text_start, warnings),
                b'[' => self.try_link(&mut inlines, &mut text_start),
                _ => false,
            };

            if !matched {
                self.pos += 1;
            }
        }

        // Trailing plain text.
        if text_start < self.bytes.len() {
            inlines.push(self.text_run(text_start, self.bytes.len()));
        }

        inlines
    }

    #[inline]
    fn find_next_delimiter(&self) -> usize {
        match memchr3(b'`', b'*', b'[', &self.bytes[self.pos..]) {
            Some(off) => self.pos + off,
            None => self.bytes.len(),
        }
    }

    #[inline]
    fn span_at(&self, start: usize, end: usize) -> Span {
        Span::new(
            self.base_offset + start as u32,
            self.base_offset + end as u32,
        )
    }

    #[inline]
    fn text_run(&self, start: usize, end: usize) -> Inline<'a> {
        Inline::Text(Text {
            content: Cow::Borrowed(&self.text[start..end]),
            span: self.span_at(start, end),
        })
    }

    /// Push any pending plain text before a recognized construct.
    #[inline]
    fn flush_text(&self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) {
        if *text_start < self.pos {
            inlines.push(self.text_run(*text_start, self.pos));
        }
        *text_start = self.pos;
    }

    /// `` `...` `` — non-greedy, non-empty, contents verbatim.
    #[inline]
    fn try_code_span(
        &mut self,
        inlines: &mut Vec<Inline<'a>>,
        text_start: &mut usize,
        warnings: &mut ParseWarnings,
    ) -> bool {
        let start = self.pos;

        match memchr(b'`', &self.bytes[start + 1..]) {
            Some(off) if off > 0 => {
                let close = start + 1 + off;
                self.flush_text(inlines, text_start);
                inlines.push(Inline::CodeSpan(CodeSpan {
                    content: Cow::Borrowed(&self.text[start + 1..close]),
                    span: self.span_at(start, close + 1),
                }));
                self.pos = close + 1;
                *text_start = self.pos;
                true
            }
            // Adjacent pair: empty contents never form a span.
            Some(_) => false,
            None => {
                warnings.push(ParseWarning::malformed_inline(
                    "`",
                    Some(self.span_at(start, self.bytes.len())),
                ));
                false
            }
        }
    }

    /// `**...**` — contents literal, must not contain `*`, and must not
    /// contain a code span (the code layer claims its text first).
    #[inline]
    fn try_bold(
        &mut self,
        inlines: &mut Vec<Inline<'a>>,
        text_start: &mut usize,
        warnings: &mut ParseWarnings,
    ) -> bool {
        let start = self.pos;

        // A single asterisk is not a recognized delimiter.
        if start + 1 >= self.bytes.len() || self.bytes[start + 1] != b'*' {
            return false;
        }

        let content_start = start + 2;
        match memchr(b'*', &self.bytes[content_start..]) {
            Some(off) if off > 0 => {
                let close = content_start + off;
                // The first `*` after the opener must begin the closing
                // pair, since contents may not contain `*`.
                if close + 1 >= self.bytes.len() || self.bytes[close + 1] != b'*' {
                    return false;
                }
                let content = &self.text[content_start..close];
                if contains_code_span(content) {
                    return false;
                }
                self.flush_text(inlines, text_start);
                inlines.push(Inline::Strong(Strong {
                    content: Cow::Borrowed(content),
                    span: self.span_at(start, close + 2),
                }));
                self.pos = close + 2;
                *text_start = self.pos;
                true
            }
            Some(_) => false,
            None => {
                warnings.push(ParseWarning::malformed_inline(
                    "**",
                    Some(self.span_at(start, self.bytes.len())),
                ));
                false
            }
        }
    }

    /// `[label](url)` — exact shape only: non-empty label without `]`,
    /// non-empty url without `)`, and `](` adjacency. Anything else stays
    /// literal. A candidate containing a code or bold span is rejected,
    /// since those layers resolve before links.
    #[inline]
    fn try_link(&mut self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) -> bool {
        let start = self.pos;
        let label_start = start + 1;

        let rb = match memchr(b']', &self.bytes[label_start..]) {
            Some(off) if off > 0 => label_start + off,
            _ => return false,
        };
        if rb + 1 >= self.bytes.len() || self.bytes[rb + 1] != b'(' {
            return false;
        }

        let url_start = rb + 2;
        let close = match memchr(b')', &self.bytes[url_start..]) {
            Some(off) if off > 0 => url_start + off,
            _ => return false,
        };

        let candidate = &self.text[start..close + 1];
        if contains_code_span(candidate) || contains_bold_span(candidate) {
            return false;
        }

        self.flush_text(inlines, text_start);
        inlines.push(Inline::Link(Link {
            label: Cow::Borrowed(&self.text[label_start..rb]),
            url: Cow::Borrowed(&self.text[url_start..close]),
            span: self.span_at(start, close + 1),
        }));
        self.pos = close + 1;
        *text_start = self.pos;
        true
    }
}

/// Whether `s` contains a complete code span (backtick pair with
/// non-empty contents).
fn contains_code_span(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut pos = 0;
    while let Some(off) = memchr(b'`', &bytes[pos..]) {
        let open = pos + off;
        match memchr(b'`', &bytes[open + 1..]) {
            // Adjacent pair: the second backtick may still open a span.
            Some(0) => pos = open + 1,
            Some(_) => return true,
            None => return false,
        }
    }
    false
}

/// Whether `s` contains a complete bold span (`**`, one or more
/// non-asterisk characters, `**`).
fn contains_bold_span(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut pos = 0;
    while let Some(off) = memchr(b'*', &bytes[pos..]) {
        let open = pos + off;
        if open + 1 >= bytes.len() || bytes[open + 1] != b'*' {
            pos = open + 1;
            continue;
        }
        let content_start = open + 2;
        match memchr(b'*', &bytes[content_start..]) {
            Some(coff) if coff > 0 => {
                let close = content_start + coff;
                if close + 1 < bytes.len() && bytes[close + 1] == b'*' {
                    return true;
                }
                pos = open + 1;
            }
            Some(_) => pos = open + 1,
            None => return false,
        }
    }
    false
}
