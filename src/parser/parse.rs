//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its diagnostics type and the
//! token-window helpers shared by the other parser modules.
//!
//! # Parser Architecture
//!
//! - This module: Parser struct, lookahead window, program loop
//! - `statements`: `let`, `return` and expression statements
//! - `expressions`: Pratt (precedence climbing) expression parsing
//!
//! Parser methods are split across files using `impl Parser` blocks, as each
//! module extends the Parser with related functionality.
//!
//! # Error handling
//!
//! Parsing never stops on a bad token. Each problem is recorded as a
//! [`ParseError`] and the parser carries on with the next statement, so a
//! caller always gets a (possibly partial) [`Program`] back together with every
//! diagnostic.

use crate::parser::ast::*;
use crate::parser::lexer::{Lexer, Token, TokenKind};
use thiserror::Error;

/// A non-fatal problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A specific token kind was required after the current one.
    #[error("expected next token to be {expected} but got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },

    /// The token cannot start an expression.
    #[error("no prefix parse function for {0} found")]
    NoPrefixRule(TokenKind),

    /// An integer literal that does not fit in an `i64`.
    #[error("could not parse {0:?} as integer")]
    InvalidInteger(String),
}

/// Pratt parser over a [`Lexer`] with a two-token lookahead window.
#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    pub(crate) current: Token,
    pub(crate) peek: Token,
    errors: Vec<ParseError>,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Self {
            lexer,
            current: Token::eof(),
            peek: Token::eof(),
            errors: Vec::new(),
        };
        parser.next_token();
        parser.next_token();
        parser
    }

    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// Parse the whole input. Statements that failed to parse are left out of
    /// the program; their diagnostics are returned alongside it.
    pub fn parse_program(mut self) -> (Program, Vec<ParseError>) {
        let mut program = Program::new();
        program.statements.extend(self.by_ref());

        tracing::debug!(
            statements = program.statements.len(),
            diagnostics = self.errors.len(),
            "parsed program"
        );

        (program, self.errors)
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &[ParseError] {
        &self.errors
    }

    // ===== Helper methods =====

    pub(crate) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
        tracing::trace!(current = %self.current, "advance");
    }

    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advance if the peek token has the given kind; otherwise record an
    /// `UnexpectedToken` diagnostic and stay put.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            let found = self.peek.kind;
            self.record(ParseError::UnexpectedToken {
                expected: kind,
                found,
            });
            false
        }
    }

    /// Move forward until the current token is `;` or the input is exhausted.
    pub(crate) fn skip_to_semicolon(&mut self) {
        while !self.current_is(TokenKind::Semicolon) && !self.current_is(TokenKind::Eof) {
            self.next_token();
        }
    }

    pub(crate) fn record(&mut self, error: ParseError) {
        tracing::debug!(%error, "parse diagnostic");
        self.errors.push(error);
    }
}

/// Yields top-level statements in source order until the input is exhausted.
/// Statements that fail to parse are skipped; see [`Parser::diagnostics`].
impl Iterator for Parser {
    type Item = Statement;

    fn next(&mut self) -> Option<Statement> {
        while !self.current_is(TokenKind::Eof) {
            let statement = self.parse_statement();
            self.next_token();
            if statement.is_some() {
                return statement;
            }
        }
        None
    }
}
