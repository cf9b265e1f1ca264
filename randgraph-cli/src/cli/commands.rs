//! Command implementations and argument parsing for the randgraph CLI.

use std::{io, num::NonZeroUsize, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use randgraph_core::{GeneratorBuilder, GraphError, SortAlgorithm};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::{
    input::{GraphInput, read_input},
    report::{DEFAULT_DETAIL_LIMIT, Report},
};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "randgraph",
    about = "Generate a connected random graph and time three edge sorts."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Read `n seed p` from a file and report on the generated graph.
    Run(RunCommand),
    /// Take `n`, `seed`, and `p` from flags instead of a file.
    Generate(GenerateCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// File holding whitespace-separated `n seed p`.
    pub input: Option<PathBuf>,

    /// Reporting options.
    #[command(flatten)]
    pub options: ReportOptions,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of nodes.
    #[arg(long = "nodes", short = 'n')]
    pub node_count: i32,

    /// Seed shared by both random streams.
    #[arg(long, short = 's', allow_negative_numbers = true)]
    pub seed: i32,

    /// Edge-inclusion probability in `[0, 1]`.
    #[arg(long, short = 'p')]
    pub probability: f64,

    /// Reporting options.
    #[command(flatten)]
    pub options: ReportOptions,
}

/// Options shared by every command.
#[derive(Debug, Args, Clone)]
pub struct ReportOptions {
    /// Sort algorithms to run, in order. Defaults to all three.
    #[arg(long = "sort", value_enum, value_delimiter = ',')]
    pub sort: Vec<SortArg>,

    /// Give up after this many disconnected candidates.
    #[arg(long)]
    pub max_attempts: Option<NonZeroUsize>,

    /// Largest node count for which the matrix and search rows are printed.
    #[arg(long, default_value_t = DEFAULT_DETAIL_LIMIT)]
    pub detail_limit: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            sort: Vec::new(),
            max_attempts: None,
            detail_limit: DEFAULT_DETAIL_LIMIT,
        }
    }
}

impl ReportOptions {
    /// Returns the algorithms to run, falling back to every algorithm when
    /// none were requested.
    #[must_use]
    pub fn algorithms(&self) -> Vec<SortAlgorithm> {
        if self.sort.is_empty() {
            return SortAlgorithm::ALL.to_vec();
        }
        self.sort.iter().copied().map(SortAlgorithm::from).collect()
    }
}

/// Sort algorithm names accepted on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum SortArg {
    /// Insertion sort.
    Insertion,
    /// Counting sort on weight.
    Count,
    /// Quicksort.
    Quick,
}

impl From<SortArg> for SortAlgorithm {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Insertion => Self::Insertion,
            SortArg::Count => Self::Count,
            SortArg::Quick => Self::Quick,
        }
    }
}

/// Errors surfaced while executing CLI commands.
///
/// Display strings are the messages shown to the user on `stdout`.
#[derive(Debug, Error)]
pub enum CliError {
    /// No input file was given, or it does not exist.
    #[error("Input file not found")]
    InputNotFound {
        /// Path that was looked up, if any.
        path: Option<PathBuf>,
    },
    /// `n` or `seed` was missing or not an integer.
    #[error("n and seed must be integers")]
    InputFormat {
        /// Offending token, or `None` when the input ended early.
        token: Option<String>,
    },
    /// `p` was missing or not a number.
    #[error("p must be a real number")]
    InvalidProbabilityToken {
        /// Offending token, or `None` when the input ended early.
        token: Option<String>,
    },
    /// The input file exists but could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Parameter validation or generation failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

impl CliError {
    /// Returns a stable, machine-readable code for this error.
    ///
    /// # Examples
    /// ```
    /// use randgraph_cli::cli::CliError;
    ///
    /// let err = CliError::InputNotFound { path: None };
    /// assert_eq!(err.code(), "CLI_INPUT_NOT_FOUND");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InputNotFound { .. } => "CLI_INPUT_NOT_FOUND",
            Self::InputFormat { .. } => "CLI_INPUT_FORMAT",
            Self::InvalidProbabilityToken { .. } => "CLI_INVALID_PROBABILITY_TOKEN",
            Self::Io { .. } => "CLI_IO",
            Self::Core(core) => core.code().as_str(),
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, validation, or generation fails.
///
/// # Examples
/// ```
/// use randgraph_cli::cli::{Cli, Command, GenerateCommand, ReportOptions, run_cli};
///
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         node_count: 7,
///         seed: 100_000,
///         probability: 0.5,
///         options: ReportOptions::default(),
///     }),
/// };
/// let report = run_cli(cli)?;
/// assert_eq!(report.graph().total_weight(), 35);
/// assert_eq!(report.sorts().len(), 3);
/// # Ok::<(), randgraph_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<Report, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            let input = GraphInput {
                node_count: generate.node_count,
                seed: generate.seed,
                probability: generate.probability,
            };
            execute(input, &generate.options)
        }
    }
}

pub(super) fn run_command(command: RunCommand) -> Result<Report, CliError> {
    let path = command
        .input
        .ok_or(CliError::InputNotFound { path: None })?;
    let input = read_input(&path)?;
    execute(input, &command.options)
}

#[instrument(
    name = "cli.execute",
    err,
    skip(input, options),
    fields(n = input.node_count, seed = input.seed, p = input.probability),
)]
pub(super) fn execute(input: GraphInput, options: &ReportOptions) -> Result<Report, CliError> {
    let mut builder = GeneratorBuilder::new()
        .with_node_count(input.node_count)
        .with_seed(input.seed)
        .with_probability(input.probability);
    if let Some(limit) = options.max_attempts {
        builder = builder.with_max_attempts(limit);
    }
    let graph = builder.build()?.generate()?;

    let sorts: Vec<_> = options
        .algorithms()
        .into_iter()
        .map(|algorithm| graph.sort_edges(algorithm))
        .collect();
    info!(
        attempts = graph.attempts(),
        edges = graph.edges().len(),
        sorts = sorts.len(),
        "command completed"
    );
    Ok(Report::new(graph, sorts, options.detail_limit))
}
