//! YAML data file saving.
//!
//! This module writes a mutated [`Document`] back to its data file with an
//! atomic write and optional backup creation.

use super::loader::is_gzipped;
use crate::config::Config;
use crate::document::node::Document;
use crate::document::parser::to_yaml_string;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Saves a document to `path`.
///
/// When `config.create_backup` is set and the file already exists, it is
/// first copied to `<name>.bak`. The new contents are written to a
/// temporary file and renamed over the target, so a crash never leaves a
/// half-written data file. Files named `*.gz` are gzip-compressed.
///
/// # Examples
///
/// ```no_run
/// use yql::config::Config;
/// use yql::document::node::Document;
/// use yql::file::saver::save_document;
///
/// save_document("out.yaml", &Document::empty_map(), &Config::default()).unwrap();
/// ```
pub fn save_document<P: AsRef<Path>>(path: P, doc: &Document, config: &Config) -> Result<()> {
    let path = path.as_ref();

    if config.create_backup && path.exists() {
        create_backup(path)?;
    }

    let yaml = to_yaml_string(doc)?;
    write_file_atomic(path, yaml.as_bytes(), is_gzipped(path))
        .with_context(|| format!("Failed to write data file {}", path.display()))
}

/// Creates a backup of a file by copying it with a .bak extension.
fn create_backup(path: &Path) -> Result<()> {
    let mut backup_path = path.to_path_buf();
    let original_name = backup_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name"))?;
    backup_path.set_file_name(format!("{}.bak", original_name));
    fs::copy(path, backup_path).context("Failed to create backup")?;
    Ok(())
}

/// Writes data to a file atomically, optionally compressing with gzip.
///
/// The temporary file is created next to `path` under a unique name and
/// is removed if anything fails before it replaces the target.
fn write_file_atomic(path: &Path, data: &[u8], compress: bool) -> Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).context("Failed to create temp file")?;

    if compress {
        let mut encoder = GzEncoder::new(temp.as_file_mut(), Compression::default());
        encoder
            .write_all(data)
            .context("Failed to write compressed data")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        temp.write_all(data).context("Failed to write temp file")?;
    }

    // Keep the data file's mode instead of the temp file's 0600.
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp.path(), metadata.permissions())
            .context("Failed to copy file permissions")?;
    }

    temp.persist(path).context("Failed to rename temp file")?;

    Ok(())
}
