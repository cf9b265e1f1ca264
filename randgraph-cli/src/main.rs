//! CLI entry point for randgraph.
//!
//! Parses arguments with clap, generates the graph, and renders the report
//! to stdout. Input and validation failures are printed to stdout as a single
//! line, logged through `tracing`, and mapped to a failing exit code.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use randgraph_cli::{
    cli::{Cli, CliError, render_report, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, and write either the report or
/// the user-facing error message to stdout.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    match run_cli(cli) {
        Ok(report) => {
            render_report(&report, &mut writer).context("failed to render report")?;
            writer.flush().context("failed to flush output")?;
            Ok(())
        }
        Err(err) => {
            writeln!(writer, "{err}").context("failed to write error message")?;
            writer.flush().context("failed to flush output")?;
            Err(err).context("failed to execute command")
        }
    }
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .map(|cli_error| field::display(cli_error.code()));
        error!(error = %format!("{err:#}"), code, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
