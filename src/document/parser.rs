//! YAML decoding and encoding for [`Document`] trees.
//!
//! `serde_yaml` does the actual text work; this module only maps its
//! untyped `Value` onto our closed `Document` type and back.
//!
//! # Example
//!
//! ```
//! use yql::document::parser::{parse_yaml, to_yaml_string};
//!
//! let doc = parse_yaml("name: yql\nports: [80, 443]\n").unwrap();
//! assert!(doc.is_map());
//! assert_eq!(to_yaml_string(&doc).unwrap(), "name: yql\nports:\n- 80\n- 443\n");
//! ```

use super::node::{Document, Scalar};
use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde_yaml::{Mapping, Number, Value};

/// Parses YAML text into a [`Document`].
///
/// An empty input, or one whose root is `null`, yields an empty map so a
/// blank data file can be populated with `set`.
pub fn parse_yaml(yaml_str: &str) -> Result<Document> {
    if yaml_str.trim().is_empty() {
        return Ok(Document::empty_map());
    }
    let value: Value = serde_yaml::from_str(yaml_str).context("Invalid YAML")?;
    match value {
        Value::Null => Ok(Document::empty_map()),
        other => convert_value(other),
    }
}

/// Serializes a [`Document`] as block-style YAML.
pub fn to_yaml_string(doc: &Document) -> Result<String> {
    serde_yaml::to_string(&to_value(doc)).context("Failed to serialize YAML")
}

fn convert_value(value: Value) -> Result<Document> {
    Ok(match value {
        Value::Null => Document::null(),
        Value::Bool(b) => Document::from(b),
        Value::Number(n) => Document::Scalar(convert_number(&n)),
        Value::String(s) => Document::from(s),
        Value::Sequence(items) => Document::Sequence(
            items
                .into_iter()
                .map(convert_value)
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Mapping(mapping) => {
            let mut map = IndexMap::with_capacity(mapping.len());
            for (key, child) in mapping {
                map.insert(key_to_string(key)?, convert_value(child)?);
            }
            Document::Map(map)
        }
        Value::Tagged(tagged) => convert_value(tagged.value)?,
    })
}

fn convert_number(n: &Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Int(i)
    } else {
        // u64 beyond i64::MAX, or a real float
        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Map keys must be scalars; non-string scalars are stringified.
fn key_to_string(key: Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => key_to_string(tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => {
            bail!("Unsupported map key: only scalar keys are allowed")
        }
    }
}

fn to_value(doc: &Document) -> Value {
    match doc {
        Document::Map(map) => {
            let mut mapping = Mapping::with_capacity(map.len());
            for (key, child) in map {
                mapping.insert(Value::String(key.clone()), to_value(child));
            }
            Value::Mapping(mapping)
        }
        Document::Sequence(items) => Value::Sequence(items.iter().map(to_value).collect()),
        Document::Scalar(scalar) => match scalar {
            Scalar::Null => Value::Null,
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::Int(i) => Value::Number(Number::from(*i)),
            Scalar::Float(f) => Value::Number(Number::from(*f)),
            Scalar::String(s) => Value::String(s.clone()),
        },
    }
}
