//! Compiled keypath types.

use std::fmt;

/// A single step in a keypath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathElement {
    /// Descend into a map by key (`foo`, `.foo`)
    Key(String),
    /// Descend into a sequence by position (`[2]`)
    Index(usize),
}

impl PathElement {
    pub fn is_key(&self) -> bool {
        matches!(self, PathElement::Key(_))
    }

    pub fn is_index(&self) -> bool {
        matches!(self, PathElement::Index(_))
    }
}

/// A compiled keypath such as `foo.bar[2].baz`.
///
/// A `KeyPath` always holds at least one element and its first element is
/// always a [`PathElement::Key`]. The only way to build one outside this
/// module is [`KeyPath::compile`](super::parser::compile), which enforces both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    elements: Vec<PathElement>,
}

impl KeyPath {
    pub(crate) fn new(elements: Vec<PathElement>) -> Self {
        debug_assert!(matches!(elements.first(), Some(PathElement::Key(_))));
        Self { elements }
    }

    /// Compiles a raw keypath string.
    pub fn compile(raw: &str) -> Result<Self, super::CompileError> {
        super::parser::compile(raw)
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The key of the last map step, used to label diagnostics.
    pub fn last_key(&self) -> Option<&str> {
        self.elements.iter().rev().find_map(|element| match element {
            PathElement::Key(key) => Some(key.as_str()),
            PathElement::Index(_) => None,
        })
    }
}

/// Renders the canonical form: keys joined by `.`, indices in brackets.
impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            match element {
                PathElement::Key(key) if i == 0 => write!(f, "{}", key)?,
                PathElement::Key(key) => write!(f, ".{}", key)?,
                PathElement::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a KeyPath {
    type Item = &'a PathElement;
    type IntoIter = std::slice::Iter<'a, PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_canonical_form() {
        let path = KeyPath::new(vec![
            PathElement::Key("a".to_string()),
            PathElement::Key("b".to_string()),
            PathElement::Index(2),
            PathElement::Index(0),
            PathElement::Key("c".to_string()),
        ]);
        assert_eq!(path.to_string(), "a.b[2][0].c");
    }

    #[test]
    fn test_last_key_skips_indices() {
        let path = KeyPath::new(vec![
            PathElement::Key("items".to_string()),
            PathElement::Index(3),
        ]);
        assert_eq!(path.last_key(), Some("items"));
        assert_eq!(path.len(), 2);
        assert!(!path.is_empty());
    }
}
