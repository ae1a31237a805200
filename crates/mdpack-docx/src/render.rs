//! Mapping from the parsed block tree to the document model.

use mdpack_core::ast::{Block, Inline};
use mdpack_core::Document;

use crate::model::{DocumentModel, ModelParagraph, ModelRun, ParagraphStyle};

/// Separator emitted for a horizontal rule.
const RULE_GLYPH: &str = "─";
const RULE_WIDTH: usize = 50;

/// Render the block sequence into the target model.
///
/// Exactly one paragraph per block and one run per inline span, in source
/// order. A block with no inline content still produces its paragraph,
/// carrying a single empty run so vertical spacing survives.
pub fn render(document: &Document) -> DocumentModel {
    DocumentModel {
        paragraphs: document.blocks.iter().map(render_block).collect(),
    }
}

fn render_block(block: &Block) -> ModelParagraph {
    match block {
        Block::Heading(h) => styled(ParagraphStyle::Heading(h.level), &h.content),
        Block::Paragraph(p) => styled(ParagraphStyle::Body, &p.content),
        Block::BulletItem(item) => styled(ParagraphStyle::ListBullet, &item.content),
        Block::NumberedItem(item) => styled(ParagraphStyle::ListNumber, &item.content),
        Block::CodeLine(line) => ModelParagraph {
            style: ParagraphStyle::Code,
            runs: vec![ModelRun {
                text: line.text.to_string(),
                monospace: true,
                ..Default::default()
            }],
        },
        Block::Rule(_) => ModelParagraph {
            style: ParagraphStyle::Rule,
            runs: vec![ModelRun {
                text: RULE_GLYPH.repeat(RULE_WIDTH),
                ..Default::default()
            }],
        },
    }
}

fn styled(style: ParagraphStyle, content: &[Inline]) -> ModelParagraph {
    let mut runs: Vec<ModelRun> = content.iter().map(render_inline).collect();
    if runs.is_empty() {
        runs.push(ModelRun::default());
    }
    ModelParagraph { style, runs }
}

fn render_inline(inline: &Inline) -> ModelRun {
    match inline {
        Inline::Text(t) => ModelRun {
            text: t.content.to_string(),
            ..Default::default()
        },
        Inline::Strong(s) => ModelRun {
            text: s.content.to_string(),
            bold: true,
            ..Default::default()
        },
        Inline::CodeSpan(c) => ModelRun {
            text: c.content.to_string(),
            monospace: true,
            ..Default::default()
        },
        // The url stays behind in the tree; the baseline package renders
        // only the label, as plain text.
        Inline::Link(l) => ModelRun {
            text: l.label.to_string(),
            ..Default::default()
        },
    }
}
