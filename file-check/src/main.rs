// These Clippy lints are allowed because this is a CLI binary, not a library:
// - print_stderr: the fatal error is reported on stderr.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stderr, clippy::exit)]

mod cli;

use tracing_subscriber::{EnvFilter, fmt};

/// Diagnostics are off unless `FILE_CHECK_LOG` sets a filter, e.g. `debug`.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("FILE_CHECK_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
