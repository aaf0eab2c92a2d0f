//! CLI-level errors

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Cannot open input (sysexits `EX_NOINPUT`).
pub const EXIT_NOINPUT: i32 = 66;
/// Can't create output file (sysexits `EX_CANTCREAT`).
pub const EXIT_CANTCREAT: i32 = 73;
/// Input/output error (sysexits `EX_IOERR`).
pub const EXIT_IOERR: i32 = 74;

/// Errors that end the program. These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("can't find file '{}'", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("can't create file '{}'", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub fn open(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Open {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn create(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Create {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>) -> impl FnOnce(io::Error) -> Self {
        let context = context.into();
        move |source| Self::Io { context, source }
    }

    /// Get the appropriate exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Open { .. } => EXIT_NOINPUT,
            CliError::Create { .. } => EXIT_CANTCREAT,
            CliError::Io { .. } => EXIT_IOERR,
        }
    }
}
