//! # Introduction
//!
//! gilt is the front end of a small C-like expression language: a tokenizer
//! and a Pratt parser that turns source text into a typed syntax tree while
//! collecting diagnostics instead of stopping at the first error.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Program + Diagnostics
//! ```
//!
//! 1. [`parser`]: [`parser::Lexer`] turns text into [`parser::Token`]s and
//!    [`parser::Parser`] builds an [`parser::ast::Program`] with operator
//!    precedence and left associativity.
//! 2. [`repl`]: a line-oriented read loop printing tokens or rendered trees.
//! 3. [`ui`]: ratatui inspector that re-parses an editable line on every key.
//! 4. [`cli`] and [`error`]: the `gilt` command line surface.
//!
//! ```
//! let (program, errors) = gilt::parser::parse_source("-a * b + 5;");
//! assert!(errors.is_empty());
//! assert_eq!(program.to_string(), "(((-a) * b) + 5);");
//! ```

pub mod cli;
pub mod error;
pub mod parser;
pub mod repl;
pub mod ui;
