// gilt: tokenizer, Pratt parser and inspector for a small C-like language

use std::io;
use std::process;

use clap::Parser;
use tracing::Level;

use gilt::cli::{self, GiltArgs, GiltSubcommand};

fn main() {
    let args = GiltArgs::parse();
    let command = args.command();

    // The inspector owns the terminal, so it gets no subscriber
    if !matches!(command, GiltSubcommand::Inspect { .. }) {
        tracing_subscriber::fmt()
            .with_max_level(if args.verbose {
                Level::DEBUG
            } else {
                Level::WARN
            })
            .with_writer(io::stderr)
            .init();
    }

    let result = match command {
        GiltSubcommand::Repl { ast } => cli::run_repl(ast),
        GiltSubcommand::Tokens { file } => cli::run_tokens(&file, &mut io::stdout().lock()),
        GiltSubcommand::Parse { file } => cli::run_parse(&file, &mut io::stdout().lock()),
        GiltSubcommand::Inspect { file } => cli::run_inspect(file.as_deref()),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
