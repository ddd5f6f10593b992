//! Error types for keypath compilation and evaluation.

use std::fmt;

/// Errors that can occur while compiling a keypath string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The keypath string was empty.
    EmptyPath,
    /// The keypath began with `.` or `[` instead of a map key.
    InvalidStart { found: char },
    /// A step was malformed (bad character, dangling `.`, etc.).
    SyntaxError {
        position: usize,
        found: Option<char>,
        expected: String,
    },
    /// An index step was not a non-negative integer closed by `]`.
    MalformedIndex { position: usize, message: String },
}

fn describe(found: Option<char>) -> String {
    match found {
        Some(ch) => format!("'{}'", ch),
        None => "end of input".to_string(),
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::EmptyPath => write!(f, "Requires keypath argument"),
            CompileError::InvalidStart { found } => write!(
                f,
                "First element of keypath must be a map key, found '{}'",
                found
            ),
            CompileError::SyntaxError {
                position,
                found,
                expected,
            } => write!(
                f,
                "Unexpected {} at position {} in keypath, expected {}",
                describe(*found),
                position,
                expected
            ),
            CompileError::MalformedIndex { position, message } => {
                write!(f, "Malformed index at position {}: {}", position, message)
            }
        }
    }
}

impl std::error::Error for CompileError {}

/// Errors that can occur while applying a keypath to a document.
///
/// `at` is the most recently resolved map key ("root" before any key), and
/// only exists to make messages readable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    NotAMap { at: String },
    NotASequence { at: String },
    KeyNotFound { at: String, key: String },
    IndexOutOfBounds { at: String, index: usize, len: usize },
    CannotAutoCreateSequence { key: String },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::NotAMap { at } => write!(f, "{} is not a map", at),
            EvalError::NotASequence { at } => write!(f, "{} is not an array", at),
            EvalError::KeyNotFound { at, key } => write!(f, "{}.{} not found", at, key),
            EvalError::IndexOutOfBounds { at, index, len } => write!(
                f,
                "{}[{}] index out of bounds (length {}); arrays are never grown",
                at, index, len
            ),
            EvalError::CannotAutoCreateSequence { key } => {
                write!(f, "Cannot create an array at {}", key)
            }
        }
    }
}

impl std::error::Error for EvalError {}
