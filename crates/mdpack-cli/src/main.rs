//! mdpack CLI - Convert Markdown-subset documents to docx packages
//!
//! Usage:
//!   mdpack [OPTIONS] [COMMAND] <FILE>
//!
//! Commands:
//!   convert   Produce a .docx package from the input (default)
//!   parse     Parse and display the block structure
//!   stats     Show document statistics

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use mdpack_core::ast::{Block, Inline};
use mdpack_core::{Document, ParseWarnings, Parser};
use serde::Serialize;

fn main() {
    let args: Vec<String> = env::args().collect();

    if let Err(e) = run(&args) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let config = parse_args(args)?;

    let input = fs::read_to_string(&config.file)
        .with_context(|| format!("failed to read input '{}'", config.file.display()))?;

    let mut parser = Parser::new();
    let result = parser.parse(&input);

    for warning in result.warnings.iter() {
        eprintln!("warning: {}", warning);
    }

    match config.command {
        Command::Convert => cmd_convert(&result.document, &config),
        Command::Parse => cmd_parse(&result.document, &config),
        Command::Stats => {
            cmd_stats(&result.document, &result.warnings, &input);
            Ok(())
        }
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    file: PathBuf,
    output: Option<PathBuf>,
    archive: bool,
    format: OutputFormat,
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Convert,
    Parse,
    Stats,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Config> {
    let mut command = Command::Convert;
    let mut output = None;
    let mut archive = false;
    let mut format = OutputFormat::Text;
    let mut verbose = false;
    let mut file = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("mdpack {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "-j" | "--json" => format = OutputFormat::Json,
            "-z" | "--zip" => archive = true,
            "-o" | "--output" => {
                i += 1;
                match args.get(i) {
                    Some(path) => output = Some(PathBuf::from(path)),
                    None => bail!("option {} requires a path", arg),
                }
            }
            "convert" => command = Command::Convert,
            "parse" => command = Command::Parse,
            "stats" => command = Command::Stats,
            _ if arg.starts_with('-') => {
                bail!("unknown option: {}", arg);
            }
            _ => {
                if file.is_some() {
                    bail!("multiple files specified");
                }
                file = Some(PathBuf::from(arg));
            }
        }
        i += 1;
    }

    let file = match file {
        Some(file) => file,
        None => bail!("no input file specified"),
    };

    Ok(Config {
        command,
        file,
        output,
        archive,
        format,
        verbose,
    })
}

fn print_help() {
    eprintln!(
        r#"mdpack - Markdown-subset to docx converter

USAGE:
    mdpack [OPTIONS] [COMMAND] <FILE>

COMMANDS:
    convert     Produce a .docx package from the input (default)
    parse       Parse and display the block structure
    stats       Show document statistics

OPTIONS:
    -o, --output <PATH>  Destination for the .docx package
    -z, --zip            Also wrap the package in an outer .zip archive
    -v, --verbose        Show detailed block structure (parse)
    -j, --json           Output in JSON format (parse)
    -h, --help           Print help information
    -V, --version        Print version information

EXAMPLES:
    mdpack notes.md               Write notes.docx
    mdpack -z notes.md            Write notes.docx and notes.zip
    mdpack parse -v notes.md      Show the parsed block tree
    mdpack parse -j notes.md      Dump the block tree as JSON
    mdpack stats notes.md         Show document statistics
"#
    );
}

// =============================================================================
// Convert Command
// =============================================================================

fn cmd_convert(document: &Document, config: &Config) -> Result<()> {
    let model = mdpack_docx::render(document);

    let docx_path = match &config.output {
        Some(path) => path.clone(),
        None => config.file.with_extension("docx"),
    };

    mdpack_docx::save_package(&model, &docx_path)
        .with_context(|| format!("failed to write package '{}'", docx_path.display()))?;
    println!("wrote {}", docx_path.display());

    if config.archive {
        let zip_path = docx_path.with_extension("zip");
        mdpack_docx::archive::wrap_in_zip(&docx_path, &zip_path)
            .with_context(|| format!("failed to write archive '{}'", zip_path.display()))?;
        println!("wrote {}", zip_path.display());
    }

    Ok(())
}

// =============================================================================
// Parse Command
// =============================================================================

fn cmd_parse(document: &Document, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Json => print_json(document)?,
        OutputFormat::Text => {
            println!("Blocks: {}", document.blocks.len());
            for (i, block) in document.blocks.iter().enumerate() {
                println!("  [{}] {}", i + 1, describe_block(block));
                if config.verbose {
                    if let Some(content) = block_content(block) {
                        println!("      {}", format_inlines(content));
                    }
                }
            }
        }
    }
    Ok(())
}

fn describe_block(block: &Block) -> String {
    match block {
        Block::Heading(h) => format!("Heading (level {})", h.level),
        Block::Paragraph(_) => "Paragraph".to_string(),
        Block::BulletItem(_) => "BulletItem".to_string(),
        Block::NumberedItem(_) => "NumberedItem".to_string(),
        Block::CodeLine(line) => match &line.lang {
            Some(lang) => format!("CodeLine (lang: {})", lang),
            None => "CodeLine".to_string(),
        },
        Block::Rule(_) => "Rule".to_string(),
    }
}

fn block_content<'a>(block: &'a Block) -> Option<&'a [Inline<'a>]> {
    match block {
        Block::Heading(h) => Some(&h.content),
        Block::Paragraph(p) => Some(&p.content),
        Block::BulletItem(item) | Block::NumberedItem(item) => Some(&item.content),
        Block::CodeLine(_) | Block::Rule(_) => None,
    }
}

/// Reconstitute inline content with its markup delimiters for display.
fn format_inlines(inlines: &[Inline]) -> String {
    let mut result = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(t) => result.push_str(&t.content),
            Inline::Strong(s) => {
                result.push_str("**");
                result.push_str(&s.content);
                result.push_str("**");
            }
            Inline::CodeSpan(c) => {
                result.push('`');
                result.push_str(&c.content);
                result.push('`');
            }
            Inline::Link(l) => {
                result.push('[');
                result.push_str(&l.label);
                result.push_str("](");
                result.push_str(&l.url);
                result.push(')');
            }
        }
    }
    result
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(document: &Document, warnings: &ParseWarnings, input: &str) {
    let mut headings = 0;
    let mut paragraphs = 0;
    let mut bullets = 0;
    let mut numbered = 0;
    let mut code_lines = 0;
    let mut rules = 0;

    for block in &document.blocks {
        match block {
            Block::Heading(_) => headings += 1,
            Block::Paragraph(_) => paragraphs += 1,
            Block::BulletItem(_) => bullets += 1,
            Block::NumberedItem(_) => numbered += 1,
            Block::CodeLine(_) => code_lines += 1,
            Block::Rule(_) => rules += 1,
        }
    }

    println!("Document Statistics");
    println!("-------------------");
    println!("Blocks:           {}", document.blocks.len());
    println!("  Headings:       {}", headings);
    println!("  Paragraphs:     {}", paragraphs);
    println!("  Bullet items:   {}", bullets);
    println!("  Numbered items: {}", numbered);
    println!("  Code lines:     {}", code_lines);
    println!("  Rules:          {}", rules);
    println!();
    println!("Size:");
    println!("  Characters:     {}", input.len());
    println!("  Words (est.):   {}", input.split_whitespace().count());
    println!("  Lines:          {}", input.lines().count());
    println!();
    println!("Warnings:         {}", warnings.len());
}

// =============================================================================
// JSON Output
// =============================================================================

#[derive(Serialize)]
struct JsonDocument<'a> {
    blocks: Vec<JsonBlock<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonBlock<'a> {
    Heading {
        level: u8,
        content: Vec<JsonInline<'a>>,
    },
    Paragraph {
        content: Vec<JsonInline<'a>>,
    },
    BulletItem {
        content: Vec<JsonInline<'a>>,
    },
    NumberedItem {
        content: Vec<JsonInline<'a>>,
    },
    CodeLine {
        text: &'a str,
        lang: Option<&'a str>,
    },
    Rule,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonInline<'a> {
    Text { content: &'a str },
    Strong { content: &'a str },
    CodeSpan { content: &'a str },
    Link { label: &'a str, url: &'a str },
}

fn print_json(document: &Document) -> Result<()> {
    let json_doc = JsonDocument {
        blocks: document.blocks.iter().map(convert_block).collect(),
    };
    let rendered =
        serde_json::to_string_pretty(&json_doc).context("failed to serialize block tree")?;
    println!("{}", rendered);
    Ok(())
}

fn convert_block<'a>(block: &'a Block) -> JsonBlock<'a> {
    match block {
        Block::Heading(h) => JsonBlock::Heading {
            level: h.level,
            content: h.content.iter().map(convert_inline).collect(),
        },
        Block::Paragraph(p) => JsonBlock::Paragraph {
            content: p.content.iter().map(convert_inline).collect(),
        },
        Block::BulletItem(item) => JsonBlock::BulletItem {
            content: item.content.iter().map(convert_inline).collect(),
        },
        Block::NumberedItem(item) => JsonBlock::NumberedItem {
            content: item.content.iter().map(convert_inline).collect(),
        },
        Block::CodeLine(line) => JsonBlock::CodeLine {
            text: &line.text,
            lang: line.lang.as_deref(),
        },
        Block::Rule(_) => JsonBlock::Rule,
    }
}

fn convert_inline<'a>(inline: &'a Inline) -> JsonInline<'a> {
    match inline {
        Inline::Text(t) => JsonInline::Text {
            content: &t.content,
        },
        Inline::Strong(s) => JsonInline::Strong {
            content: &s.content,
        },
        Inline::CodeSpan(c) => JsonInline::CodeSpan {
            content: &c.content,
        },
        Inline::Link(l) => JsonInline::Link {
            label: &l.label,
            url: &l.url,
        },
    }
}
