//! # mdpack-core
//!
//! Line-oriented parser for a small Markdown subset: headings (levels
//! 1-4), bulleted and numbered list items, fenced code blocks, horizontal
//! rules and paragraphs, with bold, inline-code and link spans inside
//! text blocks.
//!
//! The parser is deliberately forgiving: any line that matches no block
//! form is a paragraph, and any malformed inline markup falls back to
//! literal text. It therefore never fails; anomalies are reported as
//! warnings alongside the document.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdpack_core::Parser;
//!
//! let input = "# Hello\n\nSome **bold** text.";
//! let mut parser = Parser::new();
//! let result = parser.parse(input);
//!
//! assert_eq!(result.document.blocks.len(), 2);
//! assert!(result.is_clean());
//! ```

pub mod ast;
pub mod error;
pub mod inline;
pub mod lexer;
pub mod parser;
pub mod span;

pub use ast::{Block, Document, Inline};
pub use error::{ParseWarning, ParseWarnings, WarningKind};
pub use parser::{ParseResult, Parser};
