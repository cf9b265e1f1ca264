//! Text rendering of a generated graph and its sorted edge lists.

use std::io::{self, Write};

use randgraph_core::{EdgeSortResult, Graph};

/// Node count at or below which the matrix, adjacency list, and search
/// rows are printed.
pub const DEFAULT_DETAIL_LIMIT: usize = 10;

const SEPARATOR: &str = "===================================";

/// Everything a command produced, ready to render.
#[derive(Debug, Clone)]
pub struct Report {
    graph: Graph,
    sorts: Vec<EdgeSortResult>,
    detail_limit: usize,
}

impl Report {
    /// Bundles a graph with the sort results to print after it.
    #[must_use]
    pub const fn new(graph: Graph, sorts: Vec<EdgeSortResult>, detail_limit: usize) -> Self {
        Self {
            graph,
            sorts,
            detail_limit,
        }
    }

    /// Returns the generated graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &Graph { &self.graph }

    /// Returns the sort results in rendering order.
    #[must_use]
    #[rustfmt::skip]
    pub fn sorts(&self) -> &[EdgeSortResult] { &self.sorts }

    /// Returns the largest node count that still renders graph detail.
    #[must_use]
    #[rustfmt::skip]
    pub const fn detail_limit(&self) -> usize { self.detail_limit }

    /// Returns `true` when the graph section includes the matrix,
    /// adjacency list, and depth-first search rows.
    #[must_use]
    pub const fn shows_detail(&self) -> bool {
        self.graph.node_count() <= self.detail_limit
    }
}

/// Renders `report` to `writer`.
///
/// The graph section comes first, then one block per sort result, each
/// followed by an empty line. Durations are whole milliseconds.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// use randgraph_cli::cli::{Report, render_report};
/// use randgraph_core::{SortAlgorithm, generate};
///
/// let graph = generate(2, 0, 1.0)?;
/// let sorts = vec![graph.sort_edges(SortAlgorithm::Count)];
/// let report = Report::new(graph, sorts, 10);
///
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("TEST: n=2, seed=0, p=1.0\n"));
/// assert!(text.contains("SORTED EDGES USING COUNT SORT\n0 1 weight = 2\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_report(report: &Report, mut writer: impl Write) -> io::Result<()> {
    render_graph(report, &mut writer)?;
    writeln!(writer)?;
    for sort in report.sorts() {
        render_sort(sort, &mut writer)?;
        writeln!(writer)?;
    }
    Ok(())
}

fn render_graph(report: &Report, writer: &mut impl Write) -> io::Result<()> {
    let graph = report.graph();
    writeln!(
        writer,
        "TEST: n={}, seed={}, p={:?}",
        graph.node_count(),
        graph.seed(),
        graph.probability()
    )?;
    write!(
        writer,
        "Time to generate the graph: {} milliseconds\n\n",
        graph.generation_time().as_millis()
    )?;
    if !report.shows_detail() {
        return Ok(());
    }

    write!(writer, "The graph as an adjacency matrix:\n\n")?;
    for row in graph.matrix().rows() {
        for weight in row {
            write!(writer, " {weight}  ")?;
        }
        write!(writer, "\n\n")?;
    }

    writeln!(writer, "The graph as an adjacency list:")?;
    for node in graph.nodes() {
        write!(writer, "{}-> ", node.id())?;
        for edge in node.edges() {
            write!(writer, "{}({}) ", edge.target(), edge.weight())?;
        }
        writeln!(writer)?;
    }

    write!(writer, "\nDepth-First Search:\nVertices:\n")?;
    for id in 0..graph.node_count() {
        write!(writer, " {id}")?;
    }
    write!(writer, "\nPredecessors:\n")?;
    for predecessor in graph.search().predecessors() {
        match predecessor {
            Some(id) => write!(writer, " {id}")?,
            None => write!(writer, "-1")?,
        }
    }
    Ok(())
}

fn render_sort(sort: &EdgeSortResult, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "{SEPARATOR}")?;
    writeln!(writer, "SORTED EDGES USING {}", sort.algorithm())?;
    for edge in sort.sorted() {
        writeln!(
            writer,
            "{} {} weight = {}",
            edge.source(),
            edge.target(),
            edge.weight()
        )?;
    }
    writeln!(writer, "Total Weight = {}", sort.total_weight())?;
    writeln!(
        writer,
        "Runtime: {} milliseconds",
        sort.elapsed().as_millis()
    )
}
