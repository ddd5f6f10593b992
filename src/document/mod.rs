//! Document model for yql.
//!
//! This module holds the in-memory tree a data file decodes into and the
//! YAML conversion routines around it.

pub mod node;
pub mod parser;

pub use node::{Document, Scalar};
