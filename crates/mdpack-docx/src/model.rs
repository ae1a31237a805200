//! Target document model handed to the package writer.
//!
//! The model is format-neutral: paragraphs carry a style tag and runs
//! carry formatting flags, with no knowledge of how the package writer
//! spells either.

/// Paragraph style tags understood by the package writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    /// Section heading, level 1-4.
    Heading(u8),
    /// Default body text.
    Body,
    /// Bulleted list paragraph.
    ListBullet,
    /// Numbered list paragraph.
    ListNumber,
    /// Monospaced, reduced size for the whole paragraph.
    Code,
    /// Horizontal separator row.
    Rule,
}

/// A formatted run of text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelRun {
    pub text: String,
    pub bold: bool,
    /// Monospace font override for inline code.
    pub monospace: bool,
}

/// One output paragraph: a style tag plus its runs in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParagraph {
    pub style: ParagraphStyle,
    pub runs: Vec<ModelRun>,
}

/// The rendered document, independent of the package format.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentModel {
    pub paragraphs: Vec<ModelParagraph>,
}
