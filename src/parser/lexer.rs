//! Lexer (tokenizer) for gilt source code
//!
//! Converts raw source text into [`Token`]s, one per call to
//! [`Lexer::next_token`]. The lexer never fails: characters it does not
//! recognize come out as [`TokenKind::Illegal`] tokens and are judged by the
//! parser instead.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// All token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    // Identifiers and literals
    Ident,
    Int,

    // Operators
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Bang,     // !
    Slash,    // /
    Asterisk, // *
    Lt,       // <
    Gt,       // >
    Eq,       // ==
    NotEq,    // !=

    // Delimiters
    Comma,     // ,
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// Canonical name of the kind, as used in diagnostics and token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Slash => "/",
            TokenKind::Asterisk => "*",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexical token: its kind plus the exact source text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Type:{} Literal:{:?}}}", self.kind, self.literal)
    }
}

/// Reserved words, looked up after an identifier-shaped run is scanned.
fn keywords() -> &'static FxHashMap<&'static str, TokenKind> {
    static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    KEYWORDS.get_or_init(|| {
        let mut table = FxHashMap::default();
        table.insert("fn", TokenKind::Function);
        table.insert("let", TokenKind::Let);
        table.insert("true", TokenKind::True);
        table.insert("false", TokenKind::False);
        table.insert("if", TokenKind::If);
        table.insert("else", TokenKind::Else);
        table.insert("return", TokenKind::Return);
        table
    })
}

/// Classify an identifier-shaped word as a keyword or a plain identifier.
pub fn lookup_ident(word: &str) -> TokenKind {
    keywords().get(word).copied().unwrap_or(TokenKind::Ident)
}

/// Lexer for gilt source code
#[derive(Debug, Clone)]
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the remaining input, ending with a single `Eof` token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    /// Produce the next token. Once the input is exhausted this keeps
    /// returning `Eof`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.advance() else {
            return Token::eof();
        };

        match ch {
            '0'..='9' => self.number_literal(ch),
            c if is_letter(c) => self.identifier_or_keyword(ch),

            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::Eq, "==")
                } else {
                    Token::new(TokenKind::Assign, "=")
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            '+' => Token::new(TokenKind::Plus, "+"),
            '-' => Token::new(TokenKind::Minus, "-"),
            '/' => Token::new(TokenKind::Slash, "/"),
            '*' => Token::new(TokenKind::Asterisk, "*"),
            '<' => Token::new(TokenKind::Lt, "<"),
            '>' => Token::new(TokenKind::Gt, ">"),
            ',' => Token::new(TokenKind::Comma, ","),
            ';' => Token::new(TokenKind::Semicolon, ";"),
            '(' => Token::new(TokenKind::LParen, "("),
            ')' => Token::new(TokenKind::RParen, ")"),
            '{' => Token::new(TokenKind::LBrace, "{"),
            '}' => Token::new(TokenKind::RBrace, "}"),

            other => Token::new(TokenKind::Illegal, other.to_string()),
        }
    }

    /// Scan a run of decimal digits. The text is kept verbatim; conversion to
    /// a number happens in the parser.
    fn number_literal(&mut self, first_digit: char) -> Token {
        let mut digits = String::new();
        digits.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::Int, digits)
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, first_char: char) -> Token {
        let mut word = String::new();
        word.push(first_char);

        while let Some(ch) = self.peek() {
            if is_letter(ch) {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(lookup_ident(&word), word)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.peek() {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }
}

/// Yields every token before `Eof`. This is the shape the read loop wants:
/// `for token in Lexer::new(line) { ... }`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).tokenize().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_let_statement_tokens() {
        let mut lexer = Lexer::new("let five = 5;");

        assert_eq!(lexer.next_token(), Token::new(TokenKind::Let, "let"));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "five"));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Assign, "="));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Int, "5"));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Semicolon, ";"));
        assert_eq!(lexer.next_token(), Token::eof());
        assert_eq!(lexer.next_token(), Token::eof());
        assert_eq!(lexer.next_token(), Token::eof());
    }

    #[test]
    fn test_full_token_stream() {
        let input = "let five = 5;
            let ten = 10;
            let add = fn(x,y){
            x+y;
            };
            let result = add(five,ten);
            !-/*5;
            5 < 10 > 5;
            if (5<10){
                return true;
            }
            else{
                return false;
            }
            10 == 10;
            10 !=9;
            ";

        let expected = [
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "five"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "ten"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "add"),
            (TokenKind::Assign, "="),
            (TokenKind::Function, "fn"),
            (TokenKind::LParen, "("),
            (TokenKind::Ident, "x"),
            (TokenKind::Comma, ","),
            (TokenKind::Ident, "y"),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Ident, "x"),
            (TokenKind::Plus, "+"),
            (TokenKind::Ident, "y"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "result"),
            (TokenKind::Assign, "="),
            (TokenKind::Ident, "add"),
            (TokenKind::LParen, "("),
            (TokenKind::Ident, "five"),
            (TokenKind::Comma, ","),
            (TokenKind::Ident, "ten"),
            (TokenKind::RParen, ")"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Bang, "!"),
            (TokenKind::Minus, "-"),
            (TokenKind::Slash, "/"),
            (TokenKind::Asterisk, "*"),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Int, "5"),
            (TokenKind::Lt, "<"),
            (TokenKind::Int, "10"),
            (TokenKind::Gt, ">"),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::If, "if"),
            (TokenKind::LParen, "("),
            (TokenKind::Int, "5"),
            (TokenKind::Lt, "<"),
            (TokenKind::Int, "10"),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::True, "true"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Else, "else"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::False, "false"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Int, "10"),
            (TokenKind::Eq, "=="),
            (TokenKind::Int, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Int, "10"),
            (TokenKind::NotEq, "!="),
            (TokenKind::Int, "9"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ];

        let tokens = Lexer::new(input).tokenize();
        assert_eq!(tokens.len(), expected.len());

        for (i, (got, (kind, literal))) in tokens.iter().zip(expected.iter()).enumerate() {
            assert_eq!(got.kind, *kind, "unexpected kind in token {}", i);
            assert_eq!(got.literal, *literal, "unexpected literal in token {}", i);
        }
    }

    #[test]
    fn test_illegal_characters_are_tokens() {
        let tokens = Lexer::new("a @ 1 #").tokenize();

        assert_eq!(tokens[0], Token::new(TokenKind::Ident, "a"));
        assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "@"));
        assert_eq!(tokens[2], Token::new(TokenKind::Int, "1"));
        assert_eq!(tokens[3], Token::new(TokenKind::Illegal, "#"));
        assert_eq!(tokens[4], Token::eof());
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(
            kinds("Let LET let Fn fn"),
            vec![
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::Let,
                TokenKind::Ident,
                TokenKind::Function,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_identifier_runs() {
        let tokens = Lexer::new("foo_bar x1 _").tokenize();

        assert_eq!(tokens[0], Token::new(TokenKind::Ident, "foo_bar"));
        // Digits end an identifier run.
        assert_eq!(tokens[1], Token::new(TokenKind::Ident, "x"));
        assert_eq!(tokens[2], Token::new(TokenKind::Int, "1"));
        assert_eq!(tokens[3], Token::new(TokenKind::Ident, "_"));
    }

    #[test]
    fn test_integer_literal_kept_verbatim() {
        let tokens = Lexer::new("007 99999999999999999999").tokenize();

        assert_eq!(tokens[0], Token::new(TokenKind::Int, "007"));
        assert_eq!(tokens[1], Token::new(TokenKind::Int, "99999999999999999999"));
    }

    #[test]
    fn test_two_character_operators() {
        assert_eq!(
            kinds("== = != ! =!= ==="),
            vec![
                TokenKind::Eq,
                TokenKind::Assign,
                TokenKind::NotEq,
                TokenKind::Bang,
                TokenKind::Assign,
                TokenKind::NotEq,
                TokenKind::Eq,
                TokenKind::Assign,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_whitespace_only_input() {
        let mut lexer = Lexer::new(" \t\r\n  ");
        assert_eq!(lexer.next_token(), Token::eof());
        assert_eq!(Lexer::new("").tokenize(), vec![Token::eof()]);
    }

    #[test]
    fn test_iterator_stops_before_eof() {
        let tokens: Vec<Token> = Lexer::new("x + 1").collect();

        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| !t.is(TokenKind::Eof)));
    }

    #[test]
    fn test_token_display() {
        assert_eq!(
            Token::new(TokenKind::Ident, "five").to_string(),
            r#"{Type:IDENT Literal:"five"}"#
        );
        assert_eq!(Token::new(TokenKind::Eq, "==").to_string(), r#"{Type:== Literal:"=="}"#);
    }
}
