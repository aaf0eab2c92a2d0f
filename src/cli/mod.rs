//! Host program: argument parsing, dictionary loading and reporting

pub mod args;
pub mod error;
pub mod run;

pub use args::Cli;
pub use error::{CliError, CliResult};
pub use run::{DEFAULT_DOT_FILE, run};
