//! Errors surfaced by the command line front end.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for the command line front end.
pub type CliResult<T> = Result<T, CliError>;

/// Failures that end a `gilt` invocation with a non-zero status.
#[derive(Debug, Error)]
pub enum CliError {
    /// A source file could not be read.
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Terminal or stream I/O failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The file parsed with diagnostics.
    #[error("{} produced {count} diagnostic(s)", path.display())]
    Diagnostics { path: PathBuf, count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = CliError::Diagnostics {
            path: PathBuf::from("prog.gilt"),
            count: 2,
        };
        assert_eq!(err.to_string(), "prog.gilt produced 2 diagnostic(s)");

        let err = CliError::Read {
            path: PathBuf::from("missing.gilt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "could not read missing.gilt: not found");
    }
}
