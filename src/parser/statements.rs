//! Statement parsing implementation
//!
//! Statements are chosen by the current token:
//!
//! - `let <ident> = ... ;`
//! - `return ... ;`
//! - anything else is an expression statement with an optional trailing `;`
//!
//! `let` and `return` do not parse their value expressions yet. Everything up
//! to the terminating `;` is skipped and the node's `value` stays `None`.
//!
//! Each method starts with the first token of the statement as `current` and
//! leaves `current` on the last token belonging to it.

use crate::parser::ast::*;
use crate::parser::expressions::Precedence;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl Parser {
    /// Parse one statement. `None` means the statement was malformed and a
    /// diagnostic has been recorded.
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => Some(Statement::Return(self.parse_return_statement())),
            _ => self
                .parse_expression_statement()
                .map(Statement::Expression),
        }
    }

    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Ident) {
            self.skip_to_semicolon();
            return None;
        }
        let name = Identifier::new(self.current.clone());

        if !self.expect_peek(TokenKind::Assign) {
            self.skip_to_semicolon();
            return None;
        }

        self.skip_to_semicolon();

        Some(LetStatement {
            token,
            name,
            value: None,
        })
    }

    fn parse_return_statement(&mut self) -> ReturnStatement {
        let token = self.current.clone();

        self.next_token();
        self.skip_to_semicolon();

        ReturnStatement { token, value: None }
    }

    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let token = self.current.clone();
        let value = self.parse_expression(Precedence::Lowest);

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(ExpressionStatement { token, value: value? })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::lexer::TokenKind;
    use crate::parser::parse::{ParseError, Parser};

    fn parse(source: &str) -> (Program, Vec<ParseError>) {
        Parser::from_source(source).parse_program()
    }

    #[test]
    fn test_let_statements() {
        let (program, errors) = parse(
            "
            let x = 5;
            let y = 10;
            let foobar = 100;
            ",
        );

        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        assert_eq!(program.statements.len(), 3);

        for (statement, expected) in program.statements.iter().zip(["x", "y", "foobar"]) {
            assert_eq!(statement.token_literal(), "let");
            match statement {
                Statement::Let(LetStatement { name, value, .. }) => {
                    assert_eq!(name.name, expected);
                    assert_eq!(name.token.literal, expected);
                    assert!(value.is_none(), "let values are not parsed");
                }
                other => panic!("Expected let statement, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_return_statements() {
        let (program, errors) = parse("return 5; return 10; return 99322;");

        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        assert_eq!(program.statements.len(), 3);

        for statement in &program.statements {
            match statement {
                Statement::Return(stmt) => {
                    assert_eq!(stmt.token.literal, "return");
                    assert!(stmt.value.is_none());
                }
                other => panic!("Expected return statement, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_let_missing_assign() {
        let (program, errors) = parse("let x 5;");

        assert!(program.statements.is_empty());
        assert_eq!(
            errors,
            vec![ParseError::UnexpectedToken {
                expected: TokenKind::Assign,
                found: TokenKind::Int,
            }]
        );
    }

    #[test]
    fn test_let_missing_identifier() {
        let (program, errors) = parse("let = 10; let 838383;");

        assert!(program.statements.is_empty());
        assert_eq!(
            errors,
            vec![
                ParseError::UnexpectedToken {
                    expected: TokenKind::Ident,
                    found: TokenKind::Assign,
                },
                ParseError::UnexpectedToken {
                    expected: TokenKind::Ident,
                    found: TokenKind::Int,
                },
            ]
        );
    }

    #[test]
    fn test_recovery_continues_after_bad_let() {
        let (program, errors) = parse("let x 5; let y = 2; y;");

        assert_eq!(errors.len(), 1);
        assert_eq!(program.statements.len(), 2);
        assert!(matches!(&program.statements[0], Statement::Let(s) if s.name.name == "y"));
        assert_eq!(program.statements[1].to_string(), "y;");
    }

    #[test]
    fn test_unterminated_statements_stop_at_eof() {
        let (program, errors) = parse("let x = 5");
        assert!(errors.is_empty());
        assert_eq!(program.statements.len(), 1);

        let (program, errors) = parse("return 1 + 2");
        assert!(errors.is_empty());
        assert_eq!(program.statements.len(), 1);

        let (program, errors) = parse("let x");
        assert!(program.statements.is_empty());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_expression_statement_semicolon_optional() {
        let (program, errors) = parse("foobar");
        assert!(errors.is_empty());
        assert_eq!(program.to_string(), "foobar;");

        let (program, errors) = parse("a b; c");
        assert!(errors.is_empty());
        assert_eq!(program.statements.len(), 3);
        assert_eq!(program.to_string(), "a;b;c;");
    }

    #[test]
    fn test_expression_statement_token_is_first_token() {
        let (program, _) = parse("1 + 2;");
        assert_eq!(program.statements[0].token_literal(), "1");
    }
}
