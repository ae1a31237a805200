//! Integration tests for the block parser.

use mdpack_core::ast::{Block, Inline};
use mdpack_core::{Parser, WarningKind};

fn parse(input: &str) -> Vec<Block<'_>> {
    Parser::new().parse(input).document.blocks
}

// ============================================================================
// Heading Tests
// ============================================================================

#[test]
fn test_heading_levels() {
    let blocks = parse("# A\n## B\n### C\n#### D");
    assert_eq!(blocks.len(), 4);

    for (i, block) in blocks.iter().enumerate() {
        if let Block::Heading(h) = block {
            assert_eq!(h.level, (i + 1) as u8);
        } else {
            panic!("Expected heading, got {:?}", block);
        }
    }
}

#[test]
fn test_heading_content_is_plain_span() {
    let blocks = parse("# Title");
    let Block::Heading(h) = &blocks[0] else {
        panic!("Expected heading");
    };
    assert_eq!(h.level, 1);
    assert_eq!(h.content.len(), 1);
    let Inline::Text(t) = &h.content[0] else {
        panic!("Expected plain text");
    };
    assert_eq!(t.content, "Title");
}

#[test]
fn test_heading_no_space_is_paragraph() {
    let blocks = parse("#Title");
    assert!(matches!(&blocks[0], Block::Paragraph(_)));
}

#[test]
fn test_heading_five_hashes_is_paragraph() {
    let blocks = parse("##### Five");
    assert!(matches!(&blocks[0], Block::Paragraph(_)));
}

#[test]
fn test_heading_prefix_stripped_and_trimmed() {
    let blocks = parse("##   Spaced out   ");
    let Block::Heading(h) = &blocks[0] else {
        panic!("Expected heading");
    };
    assert_eq!(h.level, 2);
    let Inline::Text(t) = &h.content[0] else {
        panic!("Expected plain text");
    };
    assert_eq!(t.content, "Spaced out");
}

// ============================================================================
// Rule, Bullet and Numbered Tests
// ============================================================================

#[test]
fn test_rule() {
    let blocks = parse("---");
    assert_eq!(blocks.len(), 1);
    assert!(matches!(&blocks[0], Block::Rule(_)));
}

#[test]
fn test_rule_surrounded_by_whitespace() {
    let blocks = parse("   ---   ");
    assert!(matches!(&blocks[0], Block::Rule(_)));
}

#[test]
fn test_four_dashes_is_paragraph() {
    let blocks = parse("----");
    assert!(matches!(&blocks[0], Block::Paragraph(_)));
}

#[test]
fn test_bullet_item() {
    let blocks = parse("- item text");
    let Block::BulletItem(item) = &blocks[0] else {
        panic!("Expected bullet item");
    };
    let Inline::Text(t) = &item.content[0] else {
        panic!("Expected plain text");
    };
    assert_eq!(t.content, "item text");
}

#[test]
fn test_bullet_item_with_formatting() {
    let blocks = parse("- **Bold** and `code`");
    let Block::BulletItem(item) = &blocks[0] else {
        panic!("Expected bullet item");
    };
    assert_eq!(item.content.len(), 3);

    let Inline::Strong(s) = &item.content[0] else {
        panic!("Expected bold span");
    };
    assert_eq!(s.content, "Bold");

    let Inline::Text(t) = &item.content[1] else {
        panic!("Expected plain text");
    };
    assert_eq!(t.content, " and ");

    let Inline::CodeSpan(c) = &item.content[2] else {
        panic!("Expected code span");
    };
    assert_eq!(c.content, "code");
}

#[test]
fn test_numbered_item() {
    let blocks = parse("1. First step");
    let Block::NumberedItem(item) = &blocks[0] else {
        panic!("Expected numbered item");
    };
    assert_eq!(item.content.len(), 1);
    let Inline::Text(t) = &item.content[0] else {
        panic!("Expected plain text");
    };
    assert_eq!(t.content, "First step");
}

#[test]
fn test_numbered_item_multi_digit() {
    let blocks = parse("12. Later step");
    let Block::NumberedItem(item) = &blocks[0] else {
        panic!("Expected numbered item");
    };
    let Inline::Text(t) = &item.content[0] else {
        panic!("Expected plain text");
    };
    assert_eq!(t.content, "Later step");
}

#[test]
fn test_numbered_without_space_is_paragraph() {
    let blocks = parse("1.x");
    assert!(matches!(&blocks[0], Block::Paragraph(_)));
}

// ============================================================================
// Fenced Code Tests
// ============================================================================

#[test]
fn test_fence_single_code_line_with_language() {
    let blocks = parse("```python\nx = 1\n```");
    assert_eq!(blocks.len(), 1);

    let Block::CodeLine(line) = &blocks[0] else {
        panic!("Expected code line");
    };
    assert_eq!(line.text, "x = 1");
    assert_eq!(line.lang.as_deref(), Some("python"));
}

#[test]
fn test_fence_lines_produce_no_blocks() {
    let blocks = parse("```\n```");
    assert!(blocks.is_empty());
}

#[test]
fn test_blank_line_inside_fence_is_empty_code_line() {
    let blocks = parse("```\na\n\nb\n```");
    assert_eq!(blocks.len(), 3);

    let texts: Vec<&str> = blocks
        .iter()
        .map(|b| match b {
            Block::CodeLine(line) => line.text.as_ref(),
            other => panic!("Expected code line, got {:?}", other),
        })
        .collect();
    assert_eq!(texts, ["a", "", "b"]);
}

#[test]
fn test_code_lines_are_not_inline_parsed() {
    let blocks = parse("```\n**not bold** and `not code`\n```");
    let Block::CodeLine(line) = &blocks[0] else {
        panic!("Expected code line");
    };
    assert_eq!(line.text, "**not bold** and `not code`");
}

#[test]
fn test_code_line_right_trimmed() {
    let blocks = parse("```\nx = 1   \n```");
    let Block::CodeLine(line) = &blocks[0] else {
        panic!("Expected code line");
    };
    assert_eq!(line.text, "x = 1");
}

#[test]
fn test_unclosed_fence_consumes_rest_of_input() {
    let result = Parser::new().parse("```rust\nlet x = 1;\n# not a heading");
    let blocks = &result.document.blocks;
    assert_eq!(blocks.len(), 2);
    assert!(blocks
        .iter()
        .all(|b| matches!(b, Block::CodeLine(line) if line.lang.as_deref() == Some("rust"))));

    assert_eq!(result.warnings.len(), 1);
    let warning = result.warnings.iter().next().unwrap();
    assert_eq!(warning.kind, WarningKind::UnclosedFence);
}

#[test]
fn test_fence_with_language_closes_open_fence() {
    // Any fence marker seen while in code mode exits, tag or not.
    let blocks = parse("```\ncode\n```python\nplain");
    assert_eq!(blocks.len(), 2);
    assert!(matches!(&blocks[0], Block::CodeLine(_)));
    assert!(matches!(&blocks[1], Block::Paragraph(_)));
}

// ============================================================================
// Paragraph and Blank Line Tests
// ============================================================================

#[test]
fn test_blank_lines_skipped_outside_code() {
    let blocks = parse("first\n\n\n   \nsecond");
    assert_eq!(blocks.len(), 2);
    assert!(blocks.iter().all(|b| matches!(b, Block::Paragraph(_))));
}

#[test]
fn test_paragraph_with_link() {
    let blocks = parse("[Docs](https://example.com)");
    let Block::Paragraph(p) = &blocks[0] else {
        panic!("Expected paragraph");
    };
    assert_eq!(p.content.len(), 1);
    let Inline::Link(link) = &p.content[0] else {
        panic!("Expected link span");
    };
    assert_eq!(link.label, "Docs");
    assert_eq!(link.url, "https://example.com");
}

#[test]
fn test_paragraph_text_is_trimmed() {
    let blocks = parse("   indented paragraph   ");
    let Block::Paragraph(p) = &blocks[0] else {
        panic!("Expected paragraph");
    };
    let Inline::Text(t) = &p.content[0] else {
        panic!("Expected plain text");
    };
    assert_eq!(t.content, "indented paragraph");
}

// ============================================================================
// Block Order and Count Properties
// ============================================================================

#[test]
fn test_block_count_matches_line_accounting() {
    // One block per non-blank, non-fence line outside code, plus one per
    // line (blank included) inside the fenced region.
    let input = "# Title\n\nintro\n\n```sh\necho hi\n\nls\n```\n- a\n- b\n\n---\n";
    let blocks = parse(input);
    assert_eq!(blocks.len(), 8);
}

#[test]
fn test_block_order_is_source_order() {
    let blocks = parse("# H\npara\n- item\n1. step\n---");
    assert_eq!(blocks.len(), 5);
    assert!(matches!(blocks[0], Block::Heading(_)));
    assert!(matches!(blocks[1], Block::Paragraph(_)));
    assert!(matches!(blocks[2], Block::BulletItem(_)));
    assert!(matches!(blocks[3], Block::NumberedItem(_)));
    assert!(matches!(blocks[4], Block::Rule(_)));
}

#[test]
fn test_crlf_input() {
    let blocks = parse("# Title\r\n\r\ntext\r\n");
    assert_eq!(blocks.len(), 2);
    let Block::Heading(h) = &blocks[0] else {
        panic!("Expected heading");
    };
    let Inline::Text(t) = &h.content[0] else {
        panic!("Expected plain text");
    };
    assert_eq!(t.content, "Title");
}

#[test]
fn test_empty_input() {
    assert!(parse("").is_empty());
}
