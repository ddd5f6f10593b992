//! Property-based tests for keypath compilation and evaluation.
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use yql::document::node::{Document, Scalar};
use yql::keypath::{get, set, KeyPath, PathElement};

// ============================================================================
// Test Strategies
// ============================================================================

/// Strategy for generating map keys the grammar accepts
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,12}"
}

/// Strategy for generating a single non-leading step
fn step_strategy() -> impl Strategy<Value = PathElement> {
    prop_oneof![
        key_strategy().prop_map(PathElement::Key),
        (0usize..1000).prop_map(PathElement::Index),
    ]
}

/// Strategy for generating canonical keypath strings
fn keypath_strategy() -> impl Strategy<Value = String> {
    (key_strategy(), prop::collection::vec(step_strategy(), 0..8)).prop_map(|(first, steps)| {
        let mut raw = first;
        for step in steps {
            match step {
                PathElement::Key(key) => {
                    raw.push('.');
                    raw.push_str(&key);
                }
                PathElement::Index(index) => raw.push_str(&format!("[{}]", index)),
            }
        }
        raw
    })
}

/// Strategy for keypaths made only of map keys, which `set` can always create
fn map_only_keypath_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(key_strategy(), 1..6).prop_map(|keys| keys.join("."))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// compile -> render -> compile yields the same elements
    #[test]
    fn prop_compile_render_round_trip(raw in keypath_strategy()) {
        let path = KeyPath::compile(&raw).unwrap();
        prop_assert_eq!(path.to_string(), raw);
        let again = KeyPath::compile(&path.to_string()).unwrap();
        prop_assert_eq!(again, path);
    }

    /// Compilation never panics and never yields an empty path
    #[test]
    fn prop_compile_is_total(raw in "\\PC{0,24}") {
        if let Ok(path) = KeyPath::compile(&raw) {
            prop_assert!(!path.is_empty());
            prop_assert!(path.elements()[0].is_key());
        }
    }

    /// SET k v -> GET k returns v, parsed as an integer when possible
    #[test]
    fn prop_set_then_get(raw in map_only_keypath_strategy(), value in "[a-z0-9-]{1,10}") {
        let path = KeyPath::compile(&raw).unwrap();
        let mut doc = Document::empty_map();
        set(&mut doc, &path, &value).unwrap();

        let expected = match value.parse::<i64>() {
            Ok(i) => Scalar::Int(i),
            Err(_) => Scalar::String(value.clone()),
        };
        prop_assert_eq!(get(&doc, &path).unwrap(), &Document::Scalar(expected));
    }

    /// A set through a missing key followed by an index never mutates
    #[test]
    fn prop_failed_set_is_atomic(keys in prop::collection::vec(key_strategy(), 1..5), index in 0usize..10) {
        let raw = format!("{}[{}]", keys.join("."), index);
        let path = KeyPath::compile(&raw).unwrap();
        let mut doc = Document::empty_map();

        prop_assert!(set(&mut doc, &path, "1").is_err());
        prop_assert_eq!(doc, Document::empty_map());
    }
}
