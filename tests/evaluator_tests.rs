//! Integration tests for reading and writing documents by keypath.

use yql::document::node::{Document, Scalar};
use yql::document::parser::parse_yaml;
use yql::keypath::{get, set, set_value, EvalError, KeyPath};

fn path(raw: &str) -> KeyPath {
    KeyPath::compile(raw).unwrap()
}

fn int(value: i64) -> Document {
    Document::Scalar(Scalar::Int(value))
}

fn sample() -> Document {
    parse_yaml("a:\n  b: [1, 2, 3]\n").unwrap()
}

#[test]
fn test_get_sequence_element() {
    let doc = sample();
    assert_eq!(get(&doc, &path("a.b[1]")), Ok(&int(2)));
}

#[test]
fn test_get_returns_subtree() {
    let doc = sample();
    let b = get(&doc, &path("a.b")).unwrap();
    assert_eq!(b, &Document::Sequence(vec![int(1), int(2), int(3)]));
}

#[test]
fn test_get_index_out_of_bounds() {
    let doc = sample();
    assert_eq!(
        get(&doc, &path("a.b[5]")),
        Err(EvalError::IndexOutOfBounds {
            at: "b".to_string(),
            index: 5,
            len: 3,
        })
    );
}

#[test]
fn test_get_missing_key() {
    let doc = sample();
    assert_eq!(
        get(&doc, &path("a.zzz")),
        Err(EvalError::KeyNotFound {
            at: "a".to_string(),
            key: "zzz".to_string(),
        })
    );
    assert_eq!(
        get(&doc, &path("nope")),
        Err(EvalError::KeyNotFound {
            at: "root".to_string(),
            key: "nope".to_string(),
        })
    );
}

#[test]
fn test_get_index_on_map_fails() {
    let doc = sample();
    assert_eq!(
        get(&doc, &path("a[0]")),
        Err(EvalError::NotASequence { at: "a".to_string() })
    );
}

#[test]
fn test_set_creates_final_key_as_integer() {
    let mut doc = parse_yaml("a: {}\n").unwrap();
    let previous = set(&mut doc, &path("a.c"), "5").unwrap();

    assert_eq!(previous, Document::null());
    assert_eq!(get(&doc, &path("a.c")), Ok(&int(5)));
}

#[test]
fn test_set_creates_intermediate_maps() {
    let mut doc = parse_yaml("a: {}\n").unwrap();
    set(&mut doc, &path("a.x.y.z"), "deep").unwrap();

    assert!(get(&doc, &path("a.x")).unwrap().is_map());
    assert_eq!(get(&doc, &path("a.x.y.z")), Ok(&Document::from("deep")));
}

#[test]
fn test_set_refuses_to_create_sequence() {
    let mut doc = parse_yaml("a: {}\n").unwrap();
    let before = doc.clone();

    assert_eq!(
        set(&mut doc, &path("a.c[0]"), "1"),
        Err(EvalError::CannotAutoCreateSequence { key: "c".to_string() })
    );
    assert_eq!(doc, before);
}

#[test]
fn test_failed_set_leaves_no_partial_maps() {
    let mut doc = parse_yaml("a: {}\n").unwrap();
    let before = doc.clone();

    assert!(set(&mut doc, &path("a.x.y[0]"), "1").is_err());
    assert_eq!(doc, before);

    let mut doc = parse_yaml("a:\n  list: [1]\n").unwrap();
    let before = doc.clone();
    assert!(matches!(
        set(&mut doc, &path("a.new.list[3]"), "1"),
        Err(EvalError::CannotAutoCreateSequence { .. })
    ));
    assert_eq!(doc, before);
}

#[test]
fn test_set_overwrites_sequence_element_as_string() {
    let mut doc = parse_yaml("a: [1, 2]\n").unwrap();
    let previous = set(&mut doc, &path("a[0]"), "x").unwrap();

    assert_eq!(previous, int(1));
    assert_eq!(get(&doc, &path("a[0]")), Ok(&Document::from("x")));
    assert_eq!(get(&doc, &path("a[1]")), Ok(&int(2)));
}

#[test]
fn test_set_never_grows_sequences() {
    let mut doc = parse_yaml("a: [1, 2]\n").unwrap();
    let before = doc.clone();

    assert_eq!(
        set(&mut doc, &path("a[2]"), "3"),
        Err(EvalError::IndexOutOfBounds {
            at: "a".to_string(),
            index: 2,
            len: 2,
        })
    );
    assert_eq!(doc, before);
}

#[test]
fn test_set_replaces_whole_subtree() {
    let mut doc = sample();
    let previous = set(&mut doc, &path("a"), "flat").unwrap();

    assert!(previous.is_map());
    assert_eq!(get(&doc, &path("a")), Ok(&Document::from("flat")));
}

#[test]
fn test_set_through_scalar_fails() {
    let mut doc = parse_yaml("a: 1\n").unwrap();
    assert_eq!(
        set(&mut doc, &path("a.b"), "2"),
        Err(EvalError::NotAMap { at: "a".to_string() })
    );
}

#[test]
fn test_set_index_into_nested_map() {
    let mut doc = parse_yaml("servers:\n  - name: a\n  - name: b\n").unwrap();
    set(&mut doc, &path("servers[1].port"), "8080").unwrap();

    assert_eq!(get(&doc, &path("servers[1].port")), Ok(&int(8080)));
    assert_eq!(
        get(&doc, &path("servers[0].port")),
        Err(EvalError::KeyNotFound {
            at: "servers".to_string(),
            key: "port".to_string(),
        })
    );
}

#[test]
fn test_set_value_stores_arbitrary_documents() {
    let mut doc = Document::empty_map();
    set_value(&mut doc, &path("list"), Document::Sequence(vec![int(7)])).unwrap();
    assert_eq!(get(&doc, &path("list[0]")), Ok(&int(7)));
}

#[test]
fn test_new_keys_are_appended() {
    let mut doc = parse_yaml("first: 1\nsecond: 2\n").unwrap();
    set(&mut doc, &path("third"), "3").unwrap();

    let keys: Vec<&str> = doc.as_map().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["first", "second", "third"]);
}

#[test]
fn test_eval_error_messages() {
    assert_eq!(
        EvalError::NotAMap { at: "root".to_string() }.to_string(),
        "root is not a map"
    );
    assert_eq!(
        EvalError::KeyNotFound {
            at: "a".to_string(),
            key: "b".to_string()
        }
        .to_string(),
        "a.b not found"
    );
    assert_eq!(
        EvalError::CannotAutoCreateSequence { key: "c".to_string() }.to_string(),
        "Cannot create an array at c"
    );
}
