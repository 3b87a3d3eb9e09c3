//! Command implementations and argument parsing for the arbor CLI.

use std::io::{self, Write};

use arbor_core::{Graph, GraphError, SpanningForest, heap_sort};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Sort input from the textbook exercise.
const DEFAULT_SORT_VALUES: [i64; 5] = [4, 10, 3, 5, 1];

/// The reference 4-vertex graph from the textbook exercise.
const DEFAULT_MST_EDGES: [(usize, usize, f64); 5] = [
    (0, 1, 10.0),
    (0, 2, 6.0),
    (0, 3, 5.0),
    (1, 3, 15.0),
    (2, 3, 4.0),
];

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "arbor", about = "Run the arbor algorithm demonstrations.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Heap-sort a list of integers in place.
    Sort(SortArgs),
    /// Compute a minimum spanning forest with Kruskal's algorithm.
    Mst(MstArgs),
}

/// Options accepted by the `sort` command.
#[derive(Debug, Args, Clone)]
pub struct SortArgs {
    /// Values to sort; defaults to the textbook example `4 10 3 5 1`.
    pub values: Vec<i64>,
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstArgs {
    /// Number of vertices; defaults to one more than the largest endpoint.
    #[arg(long)]
    pub vertices: Option<usize>,

    /// Edges as `U,V,W` triples; defaults to the textbook graph.
    #[arg(long = "edge", value_name = "U,V,W", value_parser = parse_edge_spec)]
    pub edges: Vec<EdgeSpec>,
}

/// One weighted undirected edge supplied on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSpec {
    /// First endpoint.
    pub u: usize,
    /// Second endpoint.
    pub v: usize,
    /// Edge weight.
    pub weight: f64,
}

/// Parses an `U,V,W` triple into an [`EdgeSpec`].
pub(super) fn parse_edge_spec(raw: &str) -> Result<EdgeSpec, String> {
    let mut parts = raw.split(',');
    let (Some(u_raw), Some(v_raw), Some(w_raw), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected `U,V,W`, got `{raw}`"));
    };

    let u = u_raw
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("invalid endpoint `{u_raw}`: {err}"))?;
    let v = v_raw
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("invalid endpoint `{v_raw}`: {err}"))?;
    let weight = w_raw
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid weight `{w_raw}`: {err}"))?;

    Ok(EdgeSpec { u, v, weight })
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Graph construction rejected an edge.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Outcome of the `sort` command.
    Sort(SortSummary),
    /// Outcome of the `mst` command.
    Mst(ForestSummary),
}

/// Sorted output of the `sort` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSummary {
    /// The values after sorting, non-decreasing.
    pub values: Vec<i64>,
}

/// Spanning-forest output of the `mst` command.
#[derive(Debug, Clone, PartialEq)]
pub struct ForestSummary {
    /// Number of vertices in the input graph.
    pub vertex_count: usize,
    /// The computed forest.
    pub forest: SpanningForest,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when graph construction rejects an input edge.
///
/// # Examples
/// ```
/// use arbor_cli::cli::{Cli, Command, ExecutionSummary, SortArgs, run_cli};
///
/// let cli = Cli {
///     command: Command::Sort(SortArgs { values: vec![3, 1, 2] }),
/// };
/// let ExecutionSummary::Sort(summary) = run_cli(cli)? else {
///     unreachable!("sort command must yield a sort summary");
/// };
/// assert_eq!(summary.values, [1, 2, 3]);
/// # Ok::<(), arbor_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Sort(args) => {
            Span::current().record("command", field::display("sort"));
            Ok(ExecutionSummary::Sort(run_sort(args)))
        }
        Command::Mst(args) => {
            Span::current().record("command", field::display("mst"));
            Ok(ExecutionSummary::Mst(run_mst(args)?))
        }
    }
}

#[instrument(name = "cli.sort", skip(args), fields(input_len = field::Empty))]
pub(super) fn run_sort(args: SortArgs) -> SortSummary {
    let mut values = if args.values.is_empty() {
        DEFAULT_SORT_VALUES.to_vec()
    } else {
        args.values
    };
    Span::current().record("input_len", field::display(values.len()));

    heap_sort(&mut values);
    info!(sorted_len = values.len(), "sort completed");
    SortSummary { values }
}

#[instrument(
    name = "cli.mst",
    err,
    skip(args),
    fields(vertex_count = field::Empty, edge_count = field::Empty),
)]
pub(super) fn run_mst(args: MstArgs) -> Result<ForestSummary, CliError> {
    let edges: Vec<EdgeSpec> = if args.edges.is_empty() {
        DEFAULT_MST_EDGES
            .iter()
            .map(|&(u, v, weight)| EdgeSpec { u, v, weight })
            .collect()
    } else {
        args.edges
    };

    let vertex_count = args.vertices.unwrap_or_else(|| {
        edges
            .iter()
            .map(|edge| edge.u.max(edge.v) + 1)
            .max()
            .unwrap_or(0)
    });

    let span = Span::current();
    span.record("vertex_count", field::display(vertex_count));
    span.record("edge_count", field::display(edges.len()));

    let mut graph = Graph::new(vertex_count);
    for edge in &edges {
        graph.add_edge(edge.u, edge.v, edge.weight)?;
    }

    let forest = graph.minimum_spanning_forest();
    info!(
        accepted = forest.edges().len(),
        components = forest.component_count(),
        "mst completed"
    );
    Ok(ForestSummary {
        vertex_count,
        forest,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use arbor_cli::cli::{ExecutionSummary, SortSummary, render_summary};
///
/// let summary = ExecutionSummary::Sort(SortSummary { values: vec![1, 2, 3] });
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer.into_inner())?, "sorted: 1 2 3\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Sort(sort) => {
            write!(writer, "sorted:")?;
            for value in &sort.values {
                write!(writer, " {value}")?;
            }
            writeln!(writer)?;
        }
        ExecutionSummary::Mst(mst) => {
            writeln!(writer, "vertices: {}", mst.vertex_count)?;
            for edge in mst.forest.edges() {
                writeln!(writer, "{} -- {} == {}", edge.source(), edge.target(), edge.weight())?;
            }
            writeln!(writer, "total weight: {}", mst.forest.total_weight())?;
            writeln!(writer, "components: {}", mst.forest.component_count())?;
        }
    }
    Ok(())
}
