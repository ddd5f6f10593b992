//! Keypath string compiler.
//!
//! Grammar:
//!
//! ```text
//! path      := identifier step*
//! step      := '.' identifier | '[' digits ']'
//! ```
//!
//! Compilation is all-or-nothing: the first problem aborts with a single
//! [`CompileError`] and no partial path is returned.

use super::ast::{KeyPath, PathElement};
use super::error::CompileError;

/// Compiles a raw keypath into a [`KeyPath`].
pub fn compile(raw: &str) -> Result<KeyPath, CompileError> {
    Parser::new(raw).parse_path()
}

/// Scanner state over the keypath characters.
struct Parser {
    input: Vec<char>,
    position: usize,
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

impl Parser {
    fn new(raw: &str) -> Self {
        Self {
            input: raw.chars().collect(),
            position: 0,
        }
    }

    fn parse_path(&mut self) -> Result<KeyPath, CompileError> {
        match self.peek() {
            None => return Err(CompileError::EmptyPath),
            Some(ch) if !is_identifier_char(ch) => {
                return Err(CompileError::InvalidStart { found: ch })
            }
            Some(_) => {}
        }

        let mut elements = vec![PathElement::Key(self.parse_identifier()?)];

        while let Some(ch) = self.peek() {
            match ch {
                '.' => {
                    self.next();
                    elements.push(PathElement::Key(self.parse_identifier()?));
                }
                '[' => elements.push(PathElement::Index(self.parse_index()?)),
                other => {
                    return Err(CompileError::SyntaxError {
                        position: self.position,
                        found: Some(other),
                        expected: "'.' or '['".to_string(),
                    })
                }
            }
        }

        Ok(KeyPath::new(elements))
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    /// Parses a map key. Fails if no identifier character is present.
    fn parse_identifier(&mut self) -> Result<String, CompileError> {
        let start = self.position;
        let mut name = String::new();
        while let Some(ch) = self.peek().filter(|ch| is_identifier_char(*ch)) {
            name.push(ch);
            self.next();
        }
        if name.is_empty() {
            Err(CompileError::SyntaxError {
                position: start,
                found: self.peek(),
                expected: "identifier".to_string(),
            })
        } else {
            Ok(name)
        }
    }

    /// Parses `[digits]` starting at the opening bracket.
    fn parse_index(&mut self) -> Result<usize, CompileError> {
        let open = self.position;
        self.next();

        let mut digits = String::new();
        while let Some(ch) = self.peek().filter(char::is_ascii_digit) {
            digits.push(ch);
            self.next();
        }
        if digits.is_empty() {
            return Err(CompileError::MalformedIndex {
                position: open,
                message: match self.peek() {
                    Some(ch) => format!("expected non-negative integer after '[', found '{}'", ch),
                    None => "expected non-negative integer after '['".to_string(),
                },
            });
        }

        let index = digits
            .parse::<usize>()
            .map_err(|_| CompileError::MalformedIndex {
                position: open,
                message: format!("index {} is too large", digits),
            })?;

        match self.next() {
            Some(']') => Ok(index),
            Some(ch) => Err(CompileError::MalformedIndex {
                position: open,
                message: format!("expected ']' after index, found '{}'", ch),
            }),
            None => Err(CompileError::MalformedIndex {
                position: open,
                message: "expected ']' after index".to_string(),
            }),
        }
    }
}
