//! Applies a compiled [`KeyPath`] to a [`Document`].
//!
//! Both directions are a single left-to-right walk with one cursor. Reads
//! borrow the live tree; writes borrow it mutably for the whole call, so no
//! other handle can observe a half-written document.

use super::ast::{KeyPath, PathElement};
use super::error::EvalError;
use crate::document::node::{Document, Scalar};
use indexmap::map::Entry;
use tracing::{debug, trace};

/// Label used for diagnostics before any map key has been resolved.
pub const ROOT_LABEL: &str = "root";

/// Returns the value at `path`, borrowed from `root`.
pub fn get<'a>(root: &'a Document, path: &KeyPath) -> Result<&'a Document, EvalError> {
    let mut current = root;
    let mut label = ROOT_LABEL;

    for element in path {
        trace!(at = label, step = ?element, "get step");
        current = match element {
            PathElement::Key(key) => {
                let Document::Map(map) = current else {
                    return Err(EvalError::NotAMap { at: label.to_string() });
                };
                let child = map.get(key).ok_or_else(|| EvalError::KeyNotFound {
                    at: label.to_string(),
                    key: key.clone(),
                })?;
                label = key.as_str();
                child
            }
            PathElement::Index(index) => {
                let Document::Sequence(items) = current else {
                    return Err(EvalError::NotASequence { at: label.to_string() });
                };
                items.get(*index).ok_or(EvalError::IndexOutOfBounds {
                    at: label.to_string(),
                    index: *index,
                    len: items.len(),
                })?
            }
        };
    }

    Ok(current)
}

/// Stores `raw_value` at `path`, creating missing intermediate maps.
///
/// The raw value becomes an integer when it parses as one and a string
/// otherwise (see [`parse_scalar`]). Returns the value that was replaced,
/// which is `null` when the final key did not exist yet.
pub fn set(root: &mut Document, path: &KeyPath, raw_value: &str) -> Result<Document, EvalError> {
    set_value(root, path, Document::Scalar(parse_scalar(raw_value)))
}

/// Stores an arbitrary document at `path`.
///
/// The write is all-or-nothing: the path is checked against the tree before
/// any container is created, so on error `root` is left exactly as it was.
pub fn set_value(
    root: &mut Document,
    path: &KeyPath,
    value: Document,
) -> Result<Document, EvalError> {
    check_writable(root, path)?;
    let slot = descend_creating(root, path)?;
    debug!(previous = slot.kind(), new = value.kind(), "overwriting value");
    Ok(std::mem::replace(slot, value))
}

/// Converts a raw command-line value: integers first, anything else a string.
pub fn parse_scalar(raw: &str) -> Scalar {
    match raw.parse::<i64>() {
        Ok(i) => Scalar::Int(i),
        Err(_) => Scalar::String(raw.to_string()),
    }
}

/// What a missing map key would be filled with, given the element after it.
fn placeholder_for(key: &str, next: Option<&PathElement>) -> Result<Document, EvalError> {
    match next {
        None => Ok(Document::null()),
        Some(PathElement::Key(_)) => Ok(Document::empty_map()),
        Some(PathElement::Index(_)) => Err(EvalError::CannotAutoCreateSequence {
            key: key.to_string(),
        }),
    }
}

/// Read-only dry run of [`descend_creating`].
///
/// `current` becomes `None` once the walk enters a map that does not exist
/// yet; from there every key is missing by construction.
fn check_writable(root: &Document, path: &KeyPath) -> Result<(), EvalError> {
    let elements = path.elements();
    let mut current = Some(root);
    let mut label = ROOT_LABEL;

    for (idx, element) in elements.iter().enumerate() {
        match element {
            PathElement::Key(key) => {
                let child = match current {
                    Some(Document::Map(map)) => map.get(key),
                    Some(_) => return Err(EvalError::NotAMap { at: label.to_string() }),
                    None => None,
                };
                if child.is_none() {
                    placeholder_for(key, elements.get(idx + 1))?;
                }
                current = child;
                label = key.as_str();
            }
            PathElement::Index(index) => {
                current = match current {
                    Some(Document::Sequence(items)) => {
                        Some(items.get(*index).ok_or(EvalError::IndexOutOfBounds {
                            at: label.to_string(),
                            index: *index,
                            len: items.len(),
                        })?)
                    }
                    Some(_) => return Err(EvalError::NotASequence { at: label.to_string() }),
                    // placeholder_for already rejected an index after a missing key
                    None => {
                        return Err(EvalError::CannotAutoCreateSequence {
                            key: label.to_string(),
                        })
                    }
                };
            }
        }
    }

    Ok(())
}

/// Walks to the final slot, inserting placeholders for missing keys.
fn descend_creating<'a>(
    root: &'a mut Document,
    path: &KeyPath,
) -> Result<&'a mut Document, EvalError> {
    let elements = path.elements();
    let mut current = root;
    let mut label = ROOT_LABEL;

    for (idx, element) in elements.iter().enumerate() {
        trace!(at = label, step = ?element, "set step");
        current = match element {
            PathElement::Key(key) => {
                let Document::Map(map) = current else {
                    return Err(EvalError::NotAMap { at: label.to_string() });
                };
                label = key.as_str();
                match map.entry(key.clone()) {
                    Entry::Occupied(entry) => entry.into_mut(),
                    Entry::Vacant(entry) => {
                        let fill = placeholder_for(key, elements.get(idx + 1))?;
                        debug!(key = key.as_str(), kind = fill.kind(), "creating missing key");
                        entry.insert(fill)
                    }
                }
            }
            PathElement::Index(index) => {
                let Document::Sequence(items) = current else {
                    return Err(EvalError::NotASequence { at: label.to_string() });
                };
                let len = items.len();
                items.get_mut(*index).ok_or(EvalError::IndexOutOfBounds {
                    at: label.to_string(),
                    index: *index,
                    len,
                })?
            }
        };
    }

    Ok(current)
}
