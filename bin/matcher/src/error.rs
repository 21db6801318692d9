//! CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: matching error (empty table)
//! - 11: I/O error (reading the table, stdin or writing stdout)

use std::io;

use dinmatch::MatchError;
use thiserror::Error;

/// Errors produced by the matcher, each mapped to a distinct exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// The color table could not be searched.
    #[error(transparent)]
    Match(#[from] MatchError),
    /// Reading or writing failed.
    #[error("{context}: {source}")]
    Io {
        /// What was being done when the error happened.
        context: String,
        /// The underlying error.
        source: io::Error,
    },
}

impl CliError {
    /// Wrap an I/O error with a description of what failed.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        CliError::Io {
            context: context.into(),
            source,
        }
    }

    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Match(_) => 10,
            CliError::Io { .. } => 11,
        }
    }
}
