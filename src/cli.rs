//! Command line arguments and the subcommands they dispatch to.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::{CliError, CliResult};
use crate::parser::{Lexer, Parser as SourceParser};
use crate::repl::{self, ReplMode};
use crate::ui::App;

//-------------------------------------------------------------------------------------------------
// Types
//-------------------------------------------------------------------------------------------------

/// gilt tokenizes and parses a small C-like expression language
#[derive(Debug, Parser)]
#[command(name = "gilt", author)]
pub struct GiltArgs {
    /// The subcommand to run
    #[command(subcommand)]
    pub subcommand: Option<GiltSubcommand>,

    /// Enable verbose logging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum GiltSubcommand {
    /// Read lines from stdin and print their tokens or syntax trees
    #[command(name = "repl")]
    Repl {
        /// Print parsed statements instead of tokens
        #[arg(long)]
        ast: bool,
    },

    /// Print the token stream of a file
    #[command(name = "tokens")]
    Tokens {
        /// Source file
        file: PathBuf,
    },

    /// Parse a file and print its statements and diagnostics
    #[command(name = "parse")]
    Parse {
        /// Source file
        file: PathBuf,
    },

    /// Open the interactive terminal inspector
    #[command(name = "inspect")]
    Inspect {
        /// Source file to start from
        file: Option<PathBuf>,
    },
}

//-------------------------------------------------------------------------------------------------
// Methods
//-------------------------------------------------------------------------------------------------

impl GiltArgs {
    /// The subcommand to run, `repl` when none was given.
    pub fn command(&self) -> GiltSubcommand {
        self.subcommand
            .clone()
            .unwrap_or(GiltSubcommand::Repl { ast: false })
    }
}

//-------------------------------------------------------------------------------------------------
// Functions
//-------------------------------------------------------------------------------------------------

/// Read a whole source file.
pub fn read_source(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Run the read loop over stdin and stdout.
pub fn run_repl(ast: bool) -> CliResult<()> {
    let mode = if ast { ReplMode::Ast } else { ReplMode::Tokens };
    let stdin = io::stdin();
    let stdout = io::stdout();

    println!("Welcome to gilt, {}!", repl::user_name());
    println!("Feel free to type in commands");

    repl::start(stdin.lock(), stdout.lock(), mode)?;
    Ok(())
}

/// Print every token of `path`, ending with `EOF`.
pub fn run_tokens<W: Write>(path: &Path, output: &mut W) -> CliResult<()> {
    let source = read_source(path)?;
    let mut count = 0;
    for token in Lexer::new(&source).tokenize() {
        writeln!(output, "{}", token)?;
        count += 1;
    }
    tracing::debug!(path = %path.display(), count, "tokenized file");
    Ok(())
}

/// Print each statement of `path` on its own line followed by any diagnostics.
///
/// Fails with [`CliError::Diagnostics`] after printing when the file has any.
pub fn run_parse<W: Write>(path: &Path, output: &mut W) -> CliResult<()> {
    let source = read_source(path)?;
    let (program, errors) = SourceParser::from_source(&source).parse_program();

    for statement in &program.statements {
        writeln!(output, "{}", statement)?;
    }

    if errors.is_empty() {
        return Ok(());
    }

    writeln!(output, "parser errors:")?;
    for error in &errors {
        writeln!(output, "\t{}", error)?;
    }

    Err(CliError::Diagnostics {
        path: path.to_path_buf(),
        count: errors.len(),
    })
}

/// Run the terminal inspector until the user quits.
pub fn run_inspect(file: Option<&Path>) -> CliResult<()> {
    let source = match file {
        Some(path) => read_source(path)?
            .lines()
            .collect::<Vec<_>>()
            .join(" "),
        None => String::new(),
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(CliError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_subcommand_is_repl() {
        let args = GiltArgs::parse_from(["gilt"]);
        assert!(matches!(args.command(), GiltSubcommand::Repl { ast: false }));
        assert!(!args.verbose);
    }

    #[test]
    fn test_verbose_is_global() {
        let args = GiltArgs::parse_from(["gilt", "parse", "prog.gilt", "-V"]);
        assert!(args.verbose);
        match args.command() {
            GiltSubcommand::Parse { file } => assert_eq!(file, PathBuf::from("prog.gilt")),
            other => panic!("unexpected subcommand {:?}", other),
        }
    }

    #[test]
    fn test_repl_ast_flag() {
        let args = GiltArgs::parse_from(["gilt", "repl", "--ast"]);
        assert!(matches!(args.command(), GiltSubcommand::Repl { ast: true }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let mut out = Vec::new();
        let err = run_tokens(Path::new("/nonexistent/gilt/source"), &mut out).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
        assert!(out.is_empty());
    }

    fn source_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_tokens_prints_full_stream() {
        let file = source_file("x;");
        let mut out = Vec::new();
        run_tokens(file.path(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{Type:IDENT Literal:\"x\"}\n{Type:; Literal:\";\"}\n{Type:EOF Literal:\"\"}\n"
        );
    }

    #[test]
    fn test_parse_prints_statements() {
        let file = source_file("1 + 2 * 3;\nlet x = 5;\n");
        let mut out = Vec::new();
        run_parse(file.path(), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "(1 + (2 * 3));\nlet x = ;\n");
    }

    #[test]
    fn test_parse_with_diagnostics_fails_after_printing() {
        let file = source_file("let x = 5; let 1; y * 2");
        let mut out = Vec::new();
        let err = run_parse(file.path(), &mut out).unwrap_err();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "let x = ;\n(y * 2);\nparser errors:\n\texpected next token to be IDENT but got INT instead\n"
        );
        match err {
            CliError::Diagnostics { path, count } => {
                assert_eq!(path.as_path(), file.path());
                assert_eq!(count, 1);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
