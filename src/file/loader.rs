//! YAML data file loading.
//!
//! This module reads the data file a keypath is applied to, and the value
//! `set` reads from stdin when `--stdin` is given.

use crate::document::node::Document;
use crate::document::parser::parse_yaml;
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Loads and parses a YAML data file.
///
/// Files whose name ends in `.gz` are decompressed first. A file that is
/// empty decodes to an empty map.
///
/// # Examples
///
/// ```no_run
/// use yql::file::loader::load_document;
///
/// let doc = load_document("settings.yaml").unwrap();
/// assert!(doc.is_map());
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - A `.gz` file is not valid gzip
/// - The contents are not valid YAML
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path_ref = path.as_ref();

    let content = if is_gzipped(path_ref) {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read data file {}", path_ref.display()))?
    };

    parse_yaml(&content).with_context(|| format!("Failed to parse YAML in {}", path_ref.display()))
}

/// Reads a `set` value from `reader` until EOF.
///
/// One trailing line terminator is dropped so `echo 5 | yset --stdin k`
/// stores `5` rather than `"5\n"`.
pub fn read_value_from<R: Read>(mut reader: R) -> Result<String> {
    let mut buffer = String::new();
    reader
        .read_to_string(&mut buffer)
        .context("Failed to read value from stdin")?;

    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}

/// Returns true when the file name ends in `.gz`.
pub(crate) fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false)
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file(path: &Path) -> Result<String> {
    use flate2::read::GzDecoder;

    let file = fs::File::open(path)
        .with_context(|| format!("Failed to read data file {}", path.display()))?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}
