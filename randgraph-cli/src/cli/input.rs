//! Reading `n seed p` from a whitespace-separated input file.

use std::{fs, io, path::Path};

use tracing::{Span, field, instrument};

use super::CliError;

/// Raw generation parameters read from an input file.
///
/// Values are syntactically valid numbers but not yet range-checked; the
/// core validates them when the generator is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphInput {
    /// Requested node count.
    pub node_count: i32,
    /// Seed shared by both random streams.
    pub seed: i32,
    /// Edge-inclusion probability.
    pub probability: f64,
}

/// Parses the first three whitespace-separated tokens of `text`.
///
/// Tokens after the third are ignored. A missing or non-integer `n` or
/// `seed` yields [`CliError::InputFormat`]; a missing or non-numeric `p`
/// yields [`CliError::InvalidProbabilityToken`]. `NaN` and infinities parse
/// here and are rejected later by range validation.
///
/// # Errors
/// Returns [`CliError`] when a token is absent or malformed.
///
/// # Examples
/// ```
/// use randgraph_cli::cli::{GraphInput, parse_input};
///
/// let input = parse_input("7 100000\n0.5\n")?;
/// assert_eq!(
///     input,
///     GraphInput { node_count: 7, seed: 100_000, probability: 0.5 }
/// );
/// # Ok::<(), randgraph_cli::cli::CliError>(())
/// ```
pub fn parse_input(text: &str) -> Result<GraphInput, CliError> {
    let mut tokens = text.split_whitespace();
    let node_count = parse_integer(tokens.next())?;
    let seed = parse_integer(tokens.next())?;
    let probability = match tokens.next() {
        Some(token) => token
            .parse::<f64>()
            .map_err(|_| CliError::InvalidProbabilityToken {
                token: Some(token.to_owned()),
            })?,
        None => return Err(CliError::InvalidProbabilityToken { token: None }),
    };
    Ok(GraphInput {
        node_count,
        seed,
        probability,
    })
}

fn parse_integer(token: Option<&str>) -> Result<i32, CliError> {
    let token = token.ok_or(CliError::InputFormat { token: None })?;
    token.parse().map_err(|_| CliError::InputFormat {
        token: Some(token.to_owned()),
    })
}

/// Reads and parses the input file at `path`.
///
/// # Errors
/// Returns [`CliError::InputNotFound`] when the file does not exist,
/// [`CliError::Io`] for other read failures, and the errors of
/// [`parse_input`] otherwise.
#[instrument(name = "cli.read_input", err, fields(path = field::Empty))]
pub fn read_input(path: &Path) -> Result<GraphInput, CliError> {
    Span::current().record("path", field::display(path.display()));
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CliError::InputNotFound {
            path: Some(path.to_path_buf()),
        },
        _ => CliError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse_input(&text)
}
