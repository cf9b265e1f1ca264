//! Command-line interface orchestration for randgraph.
//!
//! `run` reads `n seed p` from a file, `generate` takes them as flags. Both
//! build a connected graph, sort its edges with the requested algorithms,
//! and hand back a [`Report`] for [`render_report`].

mod commands;
mod input;
mod report;

pub use commands::{
    Cli, CliError, Command, GenerateCommand, ReportOptions, RunCommand, SortArg, run_cli,
};
pub use input::{GraphInput, parse_input, read_input};
pub use report::{DEFAULT_DETAIL_LIMIT, Report, render_report};

#[cfg(test)]
mod test_helpers;
