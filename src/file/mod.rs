//! File I/O for yql data files.
//!
//! This module loads YAML data files (optionally gzipped) and saves them
//! back with atomic write operations and optional backups.

pub mod loader;
pub mod saver;
