//! Keypath compiler and evaluator.
//!
//! A keypath addresses exactly one location in a document tree.
//!
//! # Supported Syntax
//!
//! - `name` - Map key (the path must start with one)
//! - `.name` - Nested map key
//! - `[index]` - Sequence position, non-negative
//!
//! Keys are made of letters, digits and underscores; there is no quoting, so
//! a key containing `.`, `[` or `]` cannot be addressed.
//!
//! # Examples
//!
//! ```
//! use yql::document::parser::parse_yaml;
//! use yql::keypath::{self, KeyPath};
//!
//! let mut doc = parse_yaml("server:\n  ports: [80, 443]\n").unwrap();
//! let path = KeyPath::compile("server.ports[1]").unwrap();
//! assert_eq!(keypath::get(&doc, &path).unwrap().to_string(), "443");
//!
//! let name = KeyPath::compile("server.name").unwrap();
//! keypath::set(&mut doc, &name, "edge").unwrap();
//! assert_eq!(keypath::get(&doc, &name).unwrap().to_string(), "edge");
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod parser;

pub use ast::{KeyPath, PathElement};
pub use error::{CompileError, EvalError};
pub use evaluator::{get, parse_scalar, set, set_value};
pub use parser::compile;
