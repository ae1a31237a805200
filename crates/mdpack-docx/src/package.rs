//! WordprocessingML package assembly.
//!
//! A `.docx` file is a zip container of XML parts. The writer emits the
//! minimum conforming inventory: the content-types manifest, the package
//! relationships, the document body and a styles part, plus the body's
//! own relationships pointing at the styles.

use std::fs;
use std::io::{Seek, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::PackageError;
use crate::model::{DocumentModel, ModelParagraph, ModelRun, ParagraphStyle};
use crate::xml;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

/// Base style set: Calibri 11pt body, bold headings, indented list
/// styles, and a tight Consolas 9pt style for code lines.
const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:qFormat/>
    <w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri"/><w:sz w:val="22"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading1">
    <w:name w:val="heading 1"/>
    <w:basedOn w:val="Normal"/>
    <w:qFormat/>
    <w:pPr><w:spacing w:before="240" w:after="120"/><w:outlineLvl w:val="0"/></w:pPr>
    <w:rPr><w:b/><w:sz w:val="32"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading2">
    <w:name w:val="heading 2"/>
    <w:basedOn w:val="Normal"/>
    <w:qFormat/>
    <w:pPr><w:spacing w:before="200" w:after="100"/><w:outlineLvl w:val="1"/></w:pPr>
    <w:rPr><w:b/><w:sz w:val="28"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading3">
    <w:name w:val="heading 3"/>
    <w:basedOn w:val="Normal"/>
    <w:qFormat/>
    <w:pPr><w:spacing w:before="160" w:after="80"/><w:outlineLvl w:val="2"/></w:pPr>
    <w:rPr><w:b/><w:sz w:val="26"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading4">
    <w:name w:val="heading 4"/>
    <w:basedOn w:val="Normal"/>
    <w:qFormat/>
    <w:pPr><w:spacing w:before="120" w:after="60"/><w:outlineLvl w:val="3"/></w:pPr>
    <w:rPr><w:b/><w:sz w:val="24"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="ListBullet">
    <w:name w:val="List Bullet"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:ind w:left="720"/></w:pPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="ListNumber">
    <w:name w:val="List Number"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:ind w:left="720"/></w:pPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="CodeLine">
    <w:name w:val="Code Line"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:spacing w:after="0"/></w:pPr>
    <w:rPr><w:rFonts w:ascii="Consolas" w:hAnsi="Consolas"/><w:sz w:val="18"/></w:rPr>
  </w:style>
</w:styles>"#;

/// Write the full package to any seekable sink.
pub fn write_package<W: Write + Seek>(
    model: &DocumentModel,
    writer: W,
) -> Result<(), PackageError> {
    let mut zip = ZipWriter::new(writer);
    let opts = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", opts)?;
    zip.write_all(CONTENT_TYPES.as_bytes())?;

    zip.start_file("_rels/.rels", opts)?;
    zip.write_all(ROOT_RELS.as_bytes())?;

    zip.start_file("word/document.xml", opts)?;
    zip.write_all(document_xml(model).as_bytes())?;

    zip.start_file("word/_rels/document.xml.rels", opts)?;
    zip.write_all(DOCUMENT_RELS.as_bytes())?;

    zip.start_file("word/styles.xml", opts)?;
    zip.write_all(STYLES.as_bytes())?;

    zip.finish()?;
    Ok(())
}

/// Write the package to `path`, going through a temporary file in the
/// same directory so a failed write never leaves a truncated package
/// that looks valid.
pub fn save_package(model: &DocumentModel, path: &Path) -> Result<(), PackageError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    write_package(model, tmp.as_file_mut())?;
    tmp.persist(path).map_err(|e| PackageError::Io(e.error))?;
    Ok(())
}

fn document_xml(model: &DocumentModel) -> String {
    let mut body = String::with_capacity(256 * model.paragraphs.len());
    for paragraph in &model.paragraphs {
        push_paragraph(&mut body, paragraph);
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    {body}
    <w:sectPr>
      <w:pgSz w:w="12240" w:h="15840"/>
      <w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440"/>
    </w:sectPr>
  </w:body>
</w:document>"#
    )
}

fn push_paragraph(out: &mut String, paragraph: &ModelParagraph) {
    out.push_str("<w:p>");
    if let Some(style_id) = style_id(paragraph.style) {
        out.push_str("<w:pPr><w:pStyle w:val=\"");
        out.push_str(style_id);
        out.push_str("\"/></w:pPr>");
    }
    for run in &paragraph.runs {
        push_run(out, run);
    }
    out.push_str("</w:p>");
}

/// Style id for a paragraph tag; body text and rules use the default
/// style and carry no `pStyle`.
fn style_id(style: ParagraphStyle) -> Option<&'static str> {
    match style {
        ParagraphStyle::Heading(1) => Some("Heading1"),
        ParagraphStyle::Heading(2) => Some("Heading2"),
        ParagraphStyle::Heading(3) => Some("Heading3"),
        ParagraphStyle::Heading(_) => Some("Heading4"),
        ParagraphStyle::ListBullet => Some("ListBullet"),
        ParagraphStyle::ListNumber => Some("ListNumber"),
        ParagraphStyle::Code => Some("CodeLine"),
        ParagraphStyle::Body | ParagraphStyle::Rule => None,
    }
}

fn push_run(out: &mut String, run: &ModelRun) {
    out.push_str("<w:r>");
    if run.bold || run.monospace {
        out.push_str("<w:rPr>");
        if run.bold {
            out.push_str("<w:b/>");
        }
        if run.monospace {
            out.push_str(
                r#"<w:rFonts w:ascii="Consolas" w:hAnsi="Consolas"/><w:sz w:val="20"/>"#,
            );
        }
        out.push_str("</w:rPr>");
    }
    out.push_str(r#"<w:t xml:space="preserve">"#);
    out.push_str(&xml::escape_text(&run.text));
    out.push_str("</w:t></w:r>");
}
