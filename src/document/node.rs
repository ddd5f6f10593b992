//! In-memory document tree.
//!
//! A decoded YAML file is held as a [`Document`]: maps, sequences and scalar
//! leaves. Every access site matches exhaustively on the variant, so "this
//! is not a map" is a normal branch rather than a failed downcast.
//!
//! # Example
//!
//! ```
//! use yql::document::node::{Document, Scalar};
//! use indexmap::IndexMap;
//!
//! let mut map = IndexMap::new();
//! map.insert("name".to_string(), Document::from("yql"));
//! map.insert("version".to_string(), Document::from(1_i64));
//! let doc = Document::Map(map);
//!
//! assert!(doc.is_map());
//! assert_eq!(doc.as_map().unwrap()["version"], Document::Scalar(Scalar::Int(1)));
//! ```

use indexmap::IndexMap;
use std::fmt;

/// A scalar leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(fl) => write!(f, "{}", fl),
            Scalar::String(s) => write!(f, "{}", s),
        }
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// A mapping from string keys to child documents, in insertion order
    Map(IndexMap<String, Document>),
    /// An ordered list of child documents
    Sequence(Vec<Document>),
    /// A leaf value
    Scalar(Scalar),
}

impl Document {
    /// Creates an empty map.
    pub fn empty_map() -> Self {
        Document::Map(IndexMap::new())
    }

    /// Creates a null scalar.
    pub fn null() -> Self {
        Document::Scalar(Scalar::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Document::Map(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Document::Sequence(_))
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Document>> {
        match self {
            Document::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Document]> {
        match self {
            Document::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Document::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Human-readable type name used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Document::Map(_) => "map",
            Document::Sequence(_) => "array",
            Document::Scalar(Scalar::Null) => "null",
            Document::Scalar(Scalar::Bool(_)) => "bool",
            Document::Scalar(Scalar::Int(_)) => "integer",
            Document::Scalar(Scalar::Float(_)) => "float",
            Document::Scalar(Scalar::String(_)) => "string",
        }
    }
}

impl Default for Document {
    /// An empty map, which is what a blank data file decodes to.
    fn default() -> Self {
        Document::empty_map()
    }
}

/// Scalars print bare; maps and sequences print as block YAML.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Scalar(scalar) => write!(f, "{}", scalar),
            Document::Map(_) | Document::Sequence(_) => {
                let yaml = super::parser::to_yaml_string(self).map_err(|_| fmt::Error)?;
                write!(f, "{}", yaml.trim_end())
            }
        }
    }
}

impl From<Scalar> for Document {
    fn from(scalar: Scalar) -> Self {
        Document::Scalar(scalar)
    }
}

impl From<i64> for Document {
    fn from(value: i64) -> Self {
        Document::Scalar(Scalar::Int(value))
    }
}

impl From<f64> for Document {
    fn from(value: f64) -> Self {
        Document::Scalar(Scalar::Float(value))
    }
}

impl From<bool> for Document {
    fn from(value: bool) -> Self {
        Document::Scalar(Scalar::Bool(value))
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Document::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Document::Scalar(Scalar::String(value))
    }
}

impl From<Vec<Document>> for Document {
    fn from(items: Vec<Document>) -> Self {
        Document::Sequence(items)
    }
}

impl From<IndexMap<String, Document>> for Document {
    fn from(map: IndexMap<String, Document>) -> Self {
        Document::Map(map)
    }
}
