//! yql - read and write single values in YAML files.
//!
//! A keypath such as `server.ports[1]` is compiled into a [`keypath::KeyPath`]
//! and applied to a [`document::Document`] decoded from the data file.

pub mod cli;
pub mod config;
pub mod document;
pub mod file;
pub mod keypath;
pub mod logging;
