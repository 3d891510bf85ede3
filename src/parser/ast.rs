// AST (Abstract Syntax Tree) definitions for gilt
//
// Every node keeps the token that introduced it, which is where
// `token_literal()` comes from. `Display` renders the node back to
// source-like text with every operator application parenthesized.
//
// Operator nodes can nest arbitrarily deep (`----…1`), so rendering and
// dropping walk the tree with an explicit stack instead of recursing.

use crate::parser::lexer::{Token, TokenKind};
use std::fmt;
use std::mem;

/// Identifier reference, e.g. `foobar`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let name = token.literal.clone();
        Identifier { token, name }
    }
}

/// Integer literal. The token keeps the source text; `value` is the parsed number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

/// Unary operator application: `!x`, `-x`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    pub operand: Box<Expression>,
}

/// Binary operator application: `left op right`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}

/// `let <name> = <value>;`
///
/// The parser does not read the value expression yet, so `value` is always
/// `None` for parsed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

/// `return <value>;` (value not parsed yet, see [`LetStatement`])
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Option<Expression>,
}

/// A bare expression used as a statement. `token` is the first token of the
/// expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub value: Expression,
}

/// Expression nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
}

impl Expression {
    /// The keyword, operator or literal text that defines this node.
    pub fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => &ident.token.literal,
            Expression::Integer(int) => &int.token.literal,
            Expression::Prefix(prefix) => &prefix.token.literal,
            Expression::Infix(infix) => &infix.token.literal,
        }
    }
}

/// Statement nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Statement {
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => &stmt.token.literal,
            Statement::Return(stmt) => &stmt.token.literal,
            Statement::Expression(stmt) => &stmt.token.literal,
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    /// Literal of the first statement, or the empty string for an empty program.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(Statement::token_literal)
            .unwrap_or("")
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A unit of pending output while rendering an expression.
enum Piece<'a> {
    Node(&'a Expression),
    Text(&'a str),
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];

        while let Some(piece) = pending.pop() {
            let node = match piece {
                Piece::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Piece::Node(node) => node,
            };

            match node {
                Expression::Identifier(ident) => f.write_str(&ident.name)?,
                Expression::Integer(int) => f.write_str(&int.token.literal)?,
                Expression::Prefix(prefix) => {
                    f.write_str("(")?;
                    f.write_str(&prefix.operator)?;
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Node(&*prefix.operand));
                }
                Expression::Infix(infix) => {
                    f.write_str("(")?;
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Node(&*infix.right));
                    pending.push(Piece::Text(" "));
                    pending.push(Piece::Text(infix.operator.as_str()));
                    pending.push(Piece::Text(" "));
                    pending.push(Piece::Node(&*infix.left));
                }
            }
        }

        Ok(())
    }
}

// ===== Non-recursive drop =====

/// Leaf left behind in a slot whose operand was detached.
fn detached_leaf() -> Expression {
    Expression::Integer(IntegerLiteral {
        token: Token::new(TokenKind::Int, String::new()),
        value: 0,
    })
}

/// Move an operator node out of `slot`. Leaves stay where they are.
fn detach(slot: &mut Expression) -> Option<Expression> {
    match slot {
        Expression::Prefix(_) | Expression::Infix(_) => Some(mem::replace(slot, detached_leaf())),
        Expression::Identifier(_) | Expression::Integer(_) => None,
    }
}

/// Drop a list of subtrees one node at a time. Each node is stripped of its
/// operator operands before it goes out of scope, so its own `Drop` has
/// nothing left to recurse into.
fn drop_detached(mut pending: Vec<Expression>) {
    while let Some(mut expression) = pending.pop() {
        match &mut expression {
            Expression::Prefix(prefix) => pending.extend(detach(&mut prefix.operand)),
            Expression::Infix(infix) => {
                pending.extend(detach(&mut infix.left));
                pending.extend(detach(&mut infix.right));
            }
            Expression::Identifier(_) | Expression::Integer(_) => {}
        }
    }
}

impl Drop for PrefixExpression {
    fn drop(&mut self) {
        drop_detached(detach(&mut self.operand).into_iter().collect());
    }
}

impl Drop for InfixExpression {
    fn drop(&mut self) {
        drop_detached(
            detach(&mut self.left)
                .into_iter()
                .chain(detach(&mut self.right))
                .collect(),
        );
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => {
                write!(f, "{} {} = ", stmt.token.literal, stmt.name)?;
                if let Some(value) = &stmt.value {
                    write!(f, "{}", value)?;
                }
                f.write_str(";")
            }
            Statement::Return(stmt) => {
                write!(f, "{} ", stmt.token.literal)?;
                if let Some(value) = &stmt.value {
                    write!(f, "{}", value)?;
                }
                f.write_str(";")
            }
            Statement::Expression(stmt) => write!(f, "{};", stmt.value),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::TokenKind;

    fn ident(name: &str) -> Identifier {
        Identifier::new(Token::new(TokenKind::Ident, name))
    }

    fn int(value: i64) -> Expression {
        Expression::Integer(IntegerLiteral {
            token: Token::new(TokenKind::Int, value.to_string()),
            value,
        })
    }

    #[test]
    fn test_render_let_statement() {
        let program = Program {
            statements: vec![Statement::Let(LetStatement {
                token: Token::new(TokenKind::Let, "let"),
                name: ident("myVar"),
                value: Some(Expression::Identifier(ident("anotherVar"))),
            })],
        };

        assert_eq!(program.to_string(), "let myVar = anotherVar;");
        assert_eq!(program.token_literal(), "let");
    }

    #[test]
    fn test_render_statements_without_values() {
        let let_stmt = Statement::Let(LetStatement {
            token: Token::new(TokenKind::Let, "let"),
            name: ident("x"),
            value: None,
        });
        let return_stmt = Statement::Return(ReturnStatement {
            token: Token::new(TokenKind::Return, "return"),
            value: None,
        });

        assert_eq!(let_stmt.to_string(), "let x = ;");
        assert_eq!(return_stmt.to_string(), "return ;");
    }

    #[test]
    fn test_render_nested_expression() {
        let negated = Expression::Prefix(PrefixExpression {
            token: Token::new(TokenKind::Minus, "-"),
            operator: "-".to_string(),
            operand: Box::new(int(1)),
        });
        let sum = Expression::Infix(InfixExpression {
            token: Token::new(TokenKind::Plus, "+"),
            left: Box::new(negated),
            operator: "+".to_string(),
            right: Box::new(int(2)),
        });

        assert_eq!(sum.to_string(), "((-1) + 2)");
        assert_eq!(sum.token_literal(), "+");
    }

    fn negate(operand: Expression) -> Expression {
        Expression::Prefix(PrefixExpression {
            token: Token::new(TokenKind::Minus, "-"),
            operator: "-".to_string(),
            operand: Box::new(operand),
        })
    }

    #[test]
    fn test_render_and_drop_deep_prefix_chain() {
        let depth = 100_000;
        let mut expr = int(1);
        for _ in 0..depth {
            expr = negate(expr);
        }

        let rendered = expr.to_string();
        assert_eq!(rendered.len(), depth * 3 + 1);
        assert!(rendered.starts_with("(-(-(-"));
        assert!(rendered.ends_with("1)))"));

        drop(expr);
    }

    #[test]
    fn test_drop_deep_left_spine() {
        let mut expr = int(0);
        for i in 1..100_000 {
            expr = Expression::Infix(InfixExpression {
                token: Token::new(TokenKind::Plus, "+"),
                left: Box::new(expr),
                operator: "+".to_string(),
                right: Box::new(negate(int(i))),
            });
        }
        assert_eq!(expr.token_literal(), "+");
    }

    #[test]
    fn test_empty_program() {
        let program = Program::new();
        assert_eq!(program.token_literal(), "");
        assert_eq!(program.to_string(), "");
    }
}
