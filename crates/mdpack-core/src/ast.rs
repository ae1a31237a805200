//! Document tree produced by the parser.
//!
//! Nodes borrow from the input (`Cow<'a, str>`) and record the byte `Span`
//! they were parsed from. The tree is built once per document, consumed by
//! a renderer, and never mutated afterwards. Block order is the document's
//! top-to-bottom reading order.

use crate::span::Span;

/// Borrowed-or-owned string used throughout the tree.
pub type CowStr<'a> = std::borrow::Cow<'a, str>;

/// A fully parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<'a> {
    /// Blocks in source order.
    pub blocks: Vec<Block<'a>>,
    /// Span covering the entire input.
    pub span: Span,
}

/// Block-level nodes.
///
/// Inline-bearing blocks never hold raw text: recognized delimiters are
/// stripped during parsing and only node structure remains. `CodeLine` is
/// the exception and keeps its line verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Block<'a> {
    /// Section heading, levels 1-4.
    Heading(Heading<'a>),
    /// Plain text paragraph.
    Paragraph(Paragraph<'a>),
    /// One bulleted list item (`- `).
    BulletItem(ListItem<'a>),
    /// One numbered list item (`1. `).
    NumberedItem(ListItem<'a>),
    /// One raw line inside a fenced code region.
    CodeLine(CodeLine<'a>),
    /// Horizontal rule (`---`).
    Rule(Span),
}

/// Section heading with level and inline content.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading<'a> {
    /// Heading level (1-4).
    pub level: u8,
    pub content: Vec<Inline<'a>>,
    pub span: Span,
}

/// Text paragraph containing inline elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph<'a> {
    pub content: Vec<Inline<'a>>,
    pub span: Span,
}

/// A single list item.
///
/// The parser does not group consecutive items into a list; each source
/// line stands as its own block and the renderer styles them uniformly.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem<'a> {
    pub content: Vec<Inline<'a>>,
    pub span: Span,
}

/// One line of a fenced code region.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeLine<'a> {
    /// Right-trimmed line text, kept verbatim (never inline-parsed).
    /// Empty for blank lines inside the fence.
    pub text: CowStr<'a>,
    /// Language tag captured from the opening fence. Metadata only; the
    /// baseline renderer does not act on it.
    pub lang: Option<CowStr<'a>>,
    pub span: Span,
}

/// Inline-level nodes within headings, paragraphs and list items.
///
/// Concatenating the textual content of a line's inlines in order yields
/// the source line with the markup delimiters removed.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline<'a> {
    /// Unformatted text run.
    Text(Text<'a>),
    /// Bold text (`**...**`).
    Strong(Strong<'a>),
    /// Inline code (`` `...` ``).
    CodeSpan(CodeSpan<'a>),
    /// Link with label and target url.
    Link(Link<'a>),
}

/// Plain text content.
#[derive(Debug, Clone, PartialEq)]
pub struct Text<'a> {
    pub content: CowStr<'a>,
    pub span: Span,
}

/// Bold text. Contents are literal; bold spans are not re-parsed for
/// further markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Strong<'a> {
    pub content: CowStr<'a>,
    pub span: Span,
}

/// Inline code span. Contents are verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeSpan<'a> {
    pub content: CowStr<'a>,
    pub span: Span,
}

/// Hyperlink. The url is preserved for round-tripping even though a
/// renderer may emit only the label.
#[derive(Debug, Clone, PartialEq)]
pub struct Link<'a> {
    pub label: CowStr<'a>,
    pub url: CowStr<'a>,
    pub span: Span,
}
