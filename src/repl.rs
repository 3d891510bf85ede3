//! Line-oriented read loop.
//!
//! Every line read gets a fresh [`Lexer`]. In [`ReplMode::Tokens`] the raw token
//! stream is printed, one token per line. In [`ReplMode::Ast`] the line is
//! parsed and each statement is rendered, or the diagnostics are listed.

use crate::parser::{Lexer, Parser};
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = ">> ";

/// What the loop prints for each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplMode {
    #[default]
    Tokens,
    Ast,
}

/// Run the loop until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W, mode: ReplMode) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        tracing::debug!(?mode, line = line.trim_end(), "read line");

        match mode {
            ReplMode::Tokens => print_tokens(&line, &mut output)?,
            ReplMode::Ast => print_program(&line, &mut output)?,
        }
    }
}

/// Print every token of `source` up to end of input.
pub fn print_tokens<W: Write>(source: &str, output: &mut W) -> io::Result<()> {
    for token in Lexer::new(source) {
        writeln!(output, "{}", token)?;
    }
    Ok(())
}

/// Print the rendered statements of `source`, or its diagnostics if there are any.
pub fn print_program<W: Write>(source: &str, output: &mut W) -> io::Result<()> {
    let (program, errors) = Parser::from_source(source).parse_program();

    if !errors.is_empty() {
        writeln!(output, "parser errors:")?;
        for error in &errors {
            writeln!(output, "\t{}", error)?;
        }
        return Ok(());
    }

    for statement in &program.statements {
        writeln!(output, "{}", statement)?;
    }
    Ok(())
}

/// Name used in the greeting.
pub fn user_name() -> String {
    user_name_from(|key| std::env::var(key).ok())
}

/// `USER`, then `USERNAME`, then `stranger`. Empty values are skipped.
fn user_name_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    ["USER", "USERNAME"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| "stranger".to_string())
}
