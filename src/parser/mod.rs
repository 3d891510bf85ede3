//! gilt source parser
//!
//! This module transforms gilt source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens, pulled one at a time)
//! - [`parse`]: The [`Parser`] itself, its lookahead window and diagnostics
//! - `statements`, `expressions`: `impl Parser` blocks for each grammar layer
//! - [`ast`]: AST node definitions and rendering
//!
//! # Language
//!
//! - Statements: `let name = ...;`, `return ...;`, bare expressions
//! - Expressions: identifiers, 64-bit integers, prefix `!` `-`, infix
//!   `== != < > + - * /`
//! - `fn`, `if`, `else`, `true`, `false` are reserved by the lexer but have no
//!   expression rules yet
//!
//! # Parser Implementation
//!
//! Hand-written Pratt parser. Parse errors never stop the parser; they are
//! collected and returned with the program.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;

pub use expressions::Precedence;
pub use lexer::{Lexer, Token, TokenKind};
pub use parse::{ParseError, Parser};

/// Parse `source` in one go.
pub fn parse_source(source: &str) -> (ast::Program, Vec<ParseError>) {
    Parser::from_source(source).parse_program()
}
