//! Line-oriented block parser.
//!
//! Each line is classified by an ordered table of `(matches, build)` rules
//! evaluated top-to-bottom, first match wins; unmatched lines degrade to
//! paragraphs. Fenced code regions are handled before the table by a
//! fence state value threaded through the per-line step. Parsing never
//! fails — anomalies are collected as recoverable warnings.

use std::borrow::Cow;

use crate::ast::{Block, CodeLine, Document, Heading, ListItem, Paragraph};
use crate::error::{ParseWarning, ParseWarnings};
use crate::inline::parse_inlines;
use crate::lexer::{Lexer, Line};
use crate::span::Span;

/// Result of a parse: the document plus any recoverable anomalies.
#[derive(Debug)]
pub struct ParseResult<'a> {
    pub document: Document<'a>,
    pub warnings: ParseWarnings,
}

impl ParseResult<'_> {
    /// Whether the parse completed without recording any warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Fenced-code state carried across lines.
///
/// Transient parse state only; it is consumed and returned by each
/// per-line step and never appears in the output tree.
#[derive(Debug, Clone, Copy, Default)]
struct CodeBlockState<'a> {
    active: bool,
    language: Option<&'a str>,
    opened_at: Span,
}

/// Markdown-subset parser.
#[derive(Default)]
pub struct Parser {
    warnings: ParseWarnings,
}

impl Parser {
    #[inline]
    pub fn new() -> Self {
        Self {
            warnings: ParseWarnings::new(),
        }
    }

    /// Parse a complete input document.
    ///
    /// Never fails; malformed constructs degrade to literal text and are
    /// reported in the result's warnings.
    pub fn parse<'a>(&mut self, input: &'a str) -> ParseResult<'a> {
        self.warnings = ParseWarnings::new();
        let blocks = self.parse_blocks(input);
        ParseResult {
            document: Document {
                blocks,
                span: Span::new(0, input.len() as u32),
            },
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    fn parse_blocks<'a>(&mut self, input: &'a str) -> Vec<Block<'a>> {
        let mut lexer = Lexer::new(input);
        let mut blocks = Vec::with_capacity(16);
        let mut state = CodeBlockState::default();

        while let Some(line) = lexer.next_line() {
            state = self.parse_line(line, state, &mut blocks);
        }

        if state.active {
            self.warnings
                .push(ParseWarning::unclosed_fence(Some(state.opened_at)));
        }

        blocks
    }

    /// Process one line, returning the fence state for the next one.
    fn parse_line<'a>(
        &mut self,
        line: Line<'a>,
        state: CodeBlockState<'a>,
        blocks: &mut Vec<Block<'a>>,
    ) -> CodeBlockState<'a> {
        let text = line.text.trim_end();
        let trimmed = text.trim_start();

        // Fence markers toggle code mode and never become blocks. The
        // check runs in both modes so a fence line always enters or exits.
        if trimmed.starts_with(FENCE) {
            return if state.active {
                CodeBlockState::default()
            } else {
                let lang = trimmed[FENCE.len()..].trim();
                CodeBlockState {
                    active: true,
                    language: (!lang.is_empty()).then_some(lang),
                    opened_at: line.span,
                }
            };
        }

        if state.active {
            // Everything in code mode is kept verbatim, blank lines too.
            blocks.push(Block::CodeLine(CodeLine {
                text: Cow::Borrowed(text),
                lang: state.language.map(Cow::Borrowed),
                span: line.span,
            }));
            return state;
        }

        if line.is_blank() {
            return state;
        }

        let block = match BLOCK_RULES.iter().find(|rule| (rule.matches)(text, trimmed)) {
            Some(rule) => (rule.build)(text, trimmed, line.span, &mut self.warnings),
            None => build_paragraph(text, trimmed, line.span, &mut self.warnings),
        };
        blocks.push(block);
        state
    }
}

const FENCE: &str = "```";

/// One classification rule: a predicate over the line and its builder.
///
/// `matches` sees the right-trimmed line and its fully trimmed form;
/// `build` runs only when `matches` returned true.
struct BlockRule {
    matches: fn(text: &str, trimmed: &str) -> bool,
    build: for<'a> fn(
        text: &'a str,
        trimmed: &'a str,
        span: Span,
        warnings: &mut ParseWarnings,
    ) -> Block<'a>,
}

/// Ordered dispatch table: first match wins, paragraph is the fallback.
static BLOCK_RULES: &[BlockRule] = &[
    BlockRule {
        matches: is_heading,
        build: build_heading,
    },
    BlockRule {
        matches: is_rule,
        build: build_rule,
    },
    BlockRule {
        matches: is_bullet,
        build: build_bullet,
    },
    BlockRule {
        matches: is_numbered,
        build: build_numbered,
    },
];

fn is_heading(text: &str, _trimmed: &str) -> bool {
    heading_level(text).is_some()
}

fn is_rule(_text: &str, trimmed: &str) -> bool {
    trimmed == "---"
}

fn is_bullet(_text: &str, trimmed: &str) -> bool {
    trimmed.starts_with("- ")
}

fn is_numbered(text: &str, _trimmed: &str) -> bool {
    numbered_prefix(text).is_some()
}

/// Heading level for a `#...# ` prefix, or `None`.
///
/// Counting the hash run and requiring a following space makes the most
/// specific prefix win: five or more hashes classify as a paragraph.
fn heading_level(text: &str) -> Option<u8> {
    let hashes = text.bytes().take_while(|&b| b == b'#').count();
    if (1..=4).contains(&hashes) && text.as_bytes().get(hashes) == Some(&b' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

/// Byte length of a `<digits>. ` prefix, or `None`.
fn numbered_prefix(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits > 0
        && bytes.get(digits) == Some(&b'.')
        && matches!(bytes.get(digits + 1), Some(&(b' ' | b'\t')))
    {
        Some(digits + 2)
    } else {
        None
    }
}

fn build_heading<'a>(
    text: &'a str,
    trimmed: &'a str,
    span: Span,
    warnings: &mut ParseWarnings,
) -> Block<'a> {
    let level = match heading_level(text) {
        Some(level) => level,
        None => return build_paragraph(text, trimmed, span, warnings),
    };
    let content = text[level as usize + 1..].trim_start();
    let offset = span.start + (text.len() - content.len()) as u32;
    Block::Heading(Heading {
        level,
        content: parse_inlines(content, offset, warnings),
        span,
    })
}

fn build_rule<'a>(
    _text: &'a str,
    _trimmed: &'a str,
    span: Span,
    _warnings: &mut ParseWarnings,
) -> Block<'a> {
    Block::Rule(span)
}

fn build_bullet<'a>(
    text: &'a str,
    trimmed: &'a str,
    span: Span,
    warnings: &mut ParseWarnings,
) -> Block<'a> {
    let rest = trimmed.strip_prefix("- ").unwrap_or(trimmed);
    let content = rest.trim_start();
    let offset = span.start + (text.len() - content.len()) as u32;
    Block::BulletItem(ListItem {
        content: parse_inlines(content, offset, warnings),
        span,
    })
}

fn build_numbered<'a>(
    text: &'a str,
    trimmed: &'a str,
    span: Span,
    warnings: &mut ParseWarnings,
) -> Block<'a> {
    let rest = match numbered_prefix(text) {
        Some(len) => &text[len..],
        None => return build_paragraph(text, trimmed, span, warnings),
    };
    let content = rest.trim_start();
    let offset = span.start + (text.len() - content.len()) as u32;
    Block::NumberedItem(ListItem {
        content: parse_inlines(content, offset, warnings),
        span,
    })
}

fn build_paragraph<'a>(
    text: &'a str,
    trimmed: &'a str,
    span: Span,
    warnings: &mut ParseWarnings,
) -> Block<'a> {
    let offset = span.start + (text.len() - trimmed.len()) as u32;
    Block::Paragraph(Paragraph {
        content: parse_inlines(trimmed, offset, warnings),
        span,
    })
}
