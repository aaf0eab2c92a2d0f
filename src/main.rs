use std::io::{self, Write};
use std::process;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use wordtree::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let stdin = io::stdin().lock();
    let mut stdout = io::BufWriter::new(io::stdout().lock());
    let mut stderr = io::stderr().lock();

    let result = cli::run(&cli, stdin, &mut stdout, &mut stderr);
    // Whatever was reported before a failure still reaches stdout.
    let flushed = stdout.flush().map_err(cli::CliError::io("flushing stdout"));

    if let Err(e) = result.and(flushed) {
        tracing::debug!(error = ?e, "run failed");
        eprintln!("Error: {e}");
        process::exit(e.exit_code());
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v` when set.
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_env_filter(filter)
        .init();
}
