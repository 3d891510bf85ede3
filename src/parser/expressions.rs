//! Expression parsing implementation
//!
//! Expressions are parsed with precedence climbing (Pratt parsing). Each token
//! kind may have a *prefix* rule (it can start an expression) and an *infix*
//! rule (it can continue one, with a binding [`Precedence`]). Both tables are
//! exhaustive matches over [`TokenKind`].
//!
//! # Supported Expressions
//!
//! - Identifiers and integer literals
//! - Prefix operators: `!`, `-`
//! - Infix operators: `==`, `!=`, `<`, `>`, `+`, `-`, `*`, `/`
//!
//! # Precedence
//!
//! All binary operators are left-associative: the right operand is parsed at
//! the operator's own precedence, so an equal-precedence operator that follows
//! is folded by the enclosing call instead.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

/// Binding power, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// `-x` `!x`
    Prefix,
    /// `f(x)`, no rule uses it yet
    Call,
}

impl Precedence {
    /// Infix binding power of a token, or `None` when the token cannot continue
    /// an expression.
    pub fn of(kind: TokenKind) -> Option<Precedence> {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Some(Precedence::Equals),
            TokenKind::Lt | TokenKind::Gt => Some(Precedence::LessGreater),
            TokenKind::Plus | TokenKind::Minus => Some(Precedence::Sum),
            TokenKind::Asterisk | TokenKind::Slash => Some(Precedence::Product),
            TokenKind::Illegal
            | TokenKind::Eof
            | TokenKind::Ident
            | TokenKind::Int
            | TokenKind::Assign
            | TokenKind::Bang
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBrace
            | TokenKind::RBrace
            | TokenKind::Function
            | TokenKind::Let
            | TokenKind::True
            | TokenKind::False
            | TokenKind::If
            | TokenKind::Else
            | TokenKind::Return => None,
        }
    }
}

/// What to do with a token found where an expression must start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrefixRule {
    Identifier,
    Integer,
    Operator,
}

impl PrefixRule {
    fn of(kind: TokenKind) -> Option<PrefixRule> {
        match kind {
            TokenKind::Ident => Some(PrefixRule::Identifier),
            TokenKind::Int => Some(PrefixRule::Integer),
            TokenKind::Bang | TokenKind::Minus => Some(PrefixRule::Operator),
            TokenKind::Illegal
            | TokenKind::Eof
            | TokenKind::Assign
            | TokenKind::Plus
            | TokenKind::Slash
            | TokenKind::Asterisk
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBrace
            | TokenKind::RBrace
            | TokenKind::Function
            | TokenKind::Let
            | TokenKind::True
            | TokenKind::False
            | TokenKind::If
            | TokenKind::Else
            | TokenKind::Return => None,
        }
    }
}

impl Parser {
    /// Parse an expression whose operators all bind tighter than `precedence`.
    ///
    /// Starts with the first token of the expression as `current` and leaves
    /// `current` on its last token. Returns `None` after recording a diagnostic
    /// when no expression can be built.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(rule) = PrefixRule::of(self.current.kind) else {
            let kind = self.current.kind;
            self.record(ParseError::NoPrefixRule(kind));
            return None;
        };

        let mut left = match rule {
            PrefixRule::Identifier => self.parse_identifier(),
            PrefixRule::Integer => self.parse_integer_literal()?,
            PrefixRule::Operator => self.parse_prefix_expression()?,
        };

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            self.next_token();
            left = self.parse_infix_expression(left)?;
        }

        Some(left)
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind).unwrap_or(Precedence::Lowest)
    }

    fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind).unwrap_or(Precedence::Lowest)
    }

    fn parse_identifier(&self) -> Expression {
        Expression::Identifier(Identifier::new(self.current.clone()))
    }

    /// Integer literals are plain decimal. A leading zero does not switch to
    /// octal, so `010` is ten and `08` is accepted; the literal text is kept
    /// verbatim for rendering.
    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
            Err(_) => {
                self.record(ParseError::InvalidInteger(token.literal));
                None
            }
        }
    }

    /// A run of prefix operators (`!-!-x`) is collected in a loop and wrapped
    /// around the operand from the inside out, so its length never turns into
    /// call depth.
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let mut operators = vec![self.current.clone()];
        while self.peek_is(TokenKind::Bang) || self.peek_is(TokenKind::Minus) {
            self.next_token();
            operators.push(self.current.clone());
        }

        self.next_token();
        let mut operand = self.parse_expression(Precedence::Prefix)?;

        while let Some(token) = operators.pop() {
            operand = Expression::Prefix(PrefixExpression {
                operator: token.literal.clone(),
                token,
                operand: Box::new(operand),
            });
        }

        Some(operand)
    }

    /// `current` is the operator; `left` is everything folded so far.
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let precedence = self.current_precedence();
        tracing::trace!(%left, operator = %token.literal, "fold infix");

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix(InfixExpression {
            operator: token.literal.clone(),
            token,
            left: Box::new(left),
            right: Box::new(right),
        }))
    }
}
