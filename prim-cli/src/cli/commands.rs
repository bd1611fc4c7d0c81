//! Command implementations and argument parsing for the `prim` CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use prim_core::generator::{self, RandomGraphConfig};
use prim_core::{GeneratorError, Graph, GraphError, SpanningTree, Weight, prim};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

use super::input::{ParseReason, read_edge_list};

const DEFAULT_MAX_WEIGHT: Weight = 100;
const DEFAULT_SEED: u64 = 42;
const DEFAULT_UNIFORM_WEIGHT: Weight = 1;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "prim",
    about = "Compute minimum spanning trees with Prim's algorithm."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build a graph and compute the spanning tree grown from vertex 0.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Print the tree edges as `parent<TAB>child<TAB>weight`.
    #[arg(long)]
    pub show_tree: bool,

    /// Print each vertex's adjacency list.
    #[arg(long)]
    pub show_adjacency: bool,

    /// Where the graph comes from.
    #[command(subcommand)]
    pub source: RunSource,
}

/// Graph sources supported by `run`.
#[derive(Debug, Subcommand, Clone)]
pub enum RunSource {
    /// Generate a seeded random graph.
    Random(RandomArgs),
    /// Generate the path `0 - 1 - ... - (n - 1)`.
    Chain(ChainArgs),
    /// Generate a 4-neighbour grid.
    Grid(GridArgs),
    /// Load an edge-list text file.
    File(FileArgs),
}

/// Random graph arguments.
#[derive(Debug, Args, Clone)]
pub struct RandomArgs {
    /// Number of vertices.
    #[arg(long)]
    pub vertices: usize,

    /// Number of edge insertions.
    #[arg(long)]
    pub edges: usize,

    /// Inclusive upper bound for edge weights.
    #[arg(long, default_value_t = DEFAULT_MAX_WEIGHT)]
    pub max_weight: Weight,

    /// RNG seed.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Skip the spanning tree normally laid down first, so the graph may be
    /// disconnected.
    #[arg(long)]
    pub allow_disconnected: bool,
}

/// Chain arguments.
#[derive(Debug, Args, Clone)]
pub struct ChainArgs {
    /// Number of vertices.
    #[arg(long)]
    pub vertices: usize,

    /// Weight of every edge.
    #[arg(long, default_value_t = DEFAULT_UNIFORM_WEIGHT)]
    pub weight: Weight,
}

/// Grid arguments.
#[derive(Debug, Args, Clone)]
pub struct GridArgs {
    /// Number of rows.
    #[arg(long)]
    pub rows: usize,

    /// Number of columns.
    #[arg(long)]
    pub cols: usize,

    /// Weight of every edge.
    #[arg(long, default_value_t = DEFAULT_UNIFORM_WEIGHT)]
    pub weight: Weight,
}

/// Edge-list file arguments.
#[derive(Debug, Args, Clone)]
pub struct FileArgs {
    /// Path to the edge list.
    pub path: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening or reading an edge-list file failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// An edge-list line was malformed.
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: ParseReason,
    },
    /// The graph rejected an edge-list line.
    #[error("line {line}: {source}")]
    Graph {
        /// 1-based line number of the rejected edge.
        line: usize,
        /// Why the graph rejected it.
        #[source]
        source: GraphError,
    },
    /// Graph generation failed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

impl CliError {
    /// Returns a stable machine-readable code for logging.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::Parse { .. } => "CLI_PARSE",
            Self::Graph { source, .. } => source.code().as_str(),
            Self::Generator(error) => error.code().as_str(),
        }
    }
}

/// Outcome of a `run` command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Human-readable description of the graph source.
    pub source: String,
    /// The graph that was built.
    pub graph: Graph,
    /// The spanning tree grown from vertex 0.
    pub tree: SpanningTree,
    /// Whether [`render_summary`] prints the tree edges.
    pub show_tree: bool,
    /// Whether [`render_summary`] prints the adjacency lists.
    pub show_adjacency: bool,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the graph cannot be built.
///
/// # Examples
/// ```
/// use prim_cli::cli::{ChainArgs, Cli, Command, RunCommand, RunSource, run_cli};
///
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         show_tree: false,
///         show_adjacency: false,
///         source: RunSource::Chain(ChainArgs { vertices: 10, weight: 3 }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.tree.total_weight(), 27);
/// # Ok::<(), prim_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(source = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        show_tree,
        show_adjacency,
        source,
    } = command;
    let span = Span::current();
    let (label, graph) = match source {
        RunSource::Random(args) => {
            span.record("source", field::display("random"));
            build_random(&args)?
        }
        RunSource::Chain(args) => {
            span.record("source", field::display("chain"));
            let label = format!("chain(vertices={}, weight={})", args.vertices, args.weight);
            (label, generator::chain(args.vertices, args.weight)?)
        }
        RunSource::Grid(args) => {
            span.record("source", field::display("grid"));
            let label = format!(
                "grid(rows={}, cols={}, weight={})",
                args.rows, args.cols, args.weight
            );
            (label, generator::grid(args.rows, args.cols, args.weight)?)
        }
        RunSource::File(args) => {
            span.record("source", field::display("file"));
            let graph = read_edge_list(&args.path)?;
            (derive_source_label(&args.path), graph)
        }
    };

    let tree = prim(&graph);
    if !tree.is_spanning() {
        warn!(
            reached = tree.reached_count(),
            vertices = tree.vertex_count(),
            "graph is disconnected; only vertex 0's component was spanned"
        );
    }
    info!(
        source = label.as_str(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        total_weight = tree.total_weight(),
        "command completed"
    );
    Ok(ExecutionSummary {
        source: label,
        graph,
        tree,
        show_tree,
        show_adjacency,
    })
}

fn build_random(args: &RandomArgs) -> Result<(String, Graph), CliError> {
    let config = RandomGraphConfig {
        vertex_count: args.vertices,
        edge_count: args.edges,
        max_weight: args.max_weight,
        seed: args.seed,
    };
    let (kind, graph) = if args.allow_disconnected {
        ("uniform", generator::uniform_random(&config)?)
    } else {
        ("connected", generator::connected_random(&config)?)
    };
    let label = format!(
        "random(vertices={}, edges={}, max_weight={}, seed={}, {kind})",
        args.vertices, args.edges, args.max_weight, args.seed
    );
    Ok((label, graph))
}

pub(super) fn derive_source_label(path: &Path) -> String {
    path.file_name()
        .and_then(|value| value.to_str())
        .map_or_else(|| "edge_list".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// use prim_cli::cli::{ExecutionSummary, render_summary};
/// use prim_core::{Graph, prim};
///
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = Graph::from_edges(3, [(0, 1, 4), (1, 2, 5)])?;
/// let summary = ExecutionSummary {
///     source: "demo".into(),
///     tree: prim(&graph),
///     graph,
///     show_tree: true,
///     show_adjacency: false,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("total weight: 9"));
/// assert!(text.contains("1\t2\t5"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let ExecutionSummary {
        source,
        graph,
        tree,
        show_tree,
        show_adjacency,
    } = summary;
    writeln!(writer, "source: {source}")?;
    writeln!(writer, "vertices: {}", graph.vertex_count())?;
    writeln!(writer, "edges: {}", graph.edge_count())?;
    writeln!(writer, "reached: {}", tree.reached_count())?;
    writeln!(writer, "total weight: {}", tree.total_weight())?;

    if *show_tree {
        writeln!(writer, "tree edges:")?;
        for edge in tree.edges() {
            writeln!(writer, "{}\t{}\t{}", edge.parent, edge.child, edge.weight)?;
        }
    }
    if *show_adjacency {
        writeln!(writer, "adjacency:")?;
        for vertex in 0..graph.vertex_count() {
            write!(writer, "{vertex}:")?;
            for entry in graph.neighbours(vertex).unwrap_or_default() {
                write!(writer, " {}({})", entry.target(), entry.weight())?;
            }
            writeln!(writer)?;
        }
    }
    Ok(())
}
