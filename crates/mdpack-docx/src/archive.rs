//! Outer archive wrapping for finished packages.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::PackageError;

/// Bundle a single file into a deflated zip archive at `dest`.
///
/// The entry is named after the source file, without any directory
/// prefix.
pub fn wrap_in_zip(src: &Path, dest: &Path) -> Result<(), PackageError> {
    let name = src
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document.docx");

    let mut contents = Vec::new();
    File::open(src)?.read_to_end(&mut contents)?;

    let out = File::create(dest)?;
    let mut zip = ZipWriter::new(out);
    let opts = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(name, opts)?;
    zip.write_all(&contents)?;
    zip.finish()?;
    Ok(())
}
