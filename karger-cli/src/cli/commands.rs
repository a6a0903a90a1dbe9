//! Command implementations and argument parsing for the karger CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use karger_core::{
    DEFAULT_SEED, ExecutionStrategy, MinCutBuilder, MinCutError, MinCutResult, Multigraph,
    VertexId,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::edge_list::{EdgeListError, parse_edge_list};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "karger", about = "Randomized minimum cuts by edge contraction.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Search for a minimum cut of an undirected edge list.
    MinCut(MinCutCommand),
}

/// Options accepted by the `min-cut` command.
#[derive(Debug, Args, Clone)]
pub struct MinCutCommand {
    /// Edge-list file: one `u v` edge or lone `u` vertex per line.
    pub path: PathBuf,

    /// Number of contraction trials (derived from the vertex count when
    /// omitted).
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub trials: Option<usize>,

    /// Seed for the per-trial random streams.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Spread trials across all cores.
    #[arg(long)]
    pub parallel: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input file is not a valid edge list.
    #[error("failed to parse `{path}` at line {line}: {source}")]
    Parse {
        /// Path of the edge list.
        path: PathBuf,
        /// One-based line number of the offending record.
        line: usize,
        /// Parser failure.
        #[source]
        source: EdgeListError,
    },
    /// The minimum-cut search failed.
    #[error(transparent)]
    Core(#[from] MinCutError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name derived from the input file.
    pub graph: String,
    /// Number of vertices in the input.
    pub vertices: usize,
    /// Number of undirected edges the search considered. Self-loops are
    /// excluded because they never cross a cut.
    pub edges: usize,
    /// Outcome of the search.
    pub result: MinCutResult,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the input or the search fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use karger_cli::cli::{Cli, Command, MinCutCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "a b\nb c\nc a\n")?;
/// let cli = Cli {
///     command: Command::MinCut(MinCutCommand {
///         path: file.path().to_path_buf(),
///         trials: Some(4),
///         seed: 1,
///         parallel: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.result.cut_size(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::MinCut(command) => {
            Span::current().record("command", field::display("min-cut"));
            run_min_cut(command)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(trials = field::Empty, seed = command.seed, strategy = field::Empty),
)]
pub(super) fn run_min_cut(command: MinCutCommand) -> Result<ExecutionSummary, CliError> {
    let strategy = if command.parallel {
        ExecutionStrategy::Parallel
    } else {
        ExecutionStrategy::Sequential
    };
    let mut builder = MinCutBuilder::new()
        .with_seed(command.seed)
        .with_execution_strategy(strategy);
    if let Some(trials) = command.trials {
        builder = builder.with_trials(trials);
    }
    let min_cut = builder.build()?;

    let span = Span::current();
    span.record("strategy", field::debug(strategy));
    span.record(
        "trials",
        field::display(
            command
                .trials
                .map_or_else(|| "<derived>".to_owned(), |trials| trials.to_string()),
        ),
    );

    let graph = load_graph(&command.path)?;
    let result = min_cut.run(&graph)?;
    let summary = ExecutionSummary {
        graph: derive_graph_name(&command.path),
        vertices: graph.vertex_count(),
        edges: graph.edge_count().saturating_sub(graph.self_loop_count()) / 2,
        result,
    };
    info!(
        graph = summary.graph.as_str(),
        cut_size = summary.result.cut_size(),
        "command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.load_graph", err, skip(path), fields(path = %path.display()))]
pub(super) fn load_graph(path: &Path) -> Result<Multigraph, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_edge_list(BufReader::new(file)).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        line: source.line(),
        source,
    })
}

pub(super) fn derive_graph_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let result = &summary.result;
    writeln!(writer, "graph: {}", summary.graph)?;
    writeln!(writer, "vertices: {}", summary.vertices)?;
    writeln!(writer, "edges: {}", summary.edges)?;
    writeln!(writer, "cut size: {}", result.cut_size())?;
    writeln!(
        writer,
        "trials: {} (best cut found {} times)",
        result.trials(),
        result.hits()
    )?;
    writeln!(writer, "left: {}", join(result.partition().left()))?;
    writeln!(writer, "right: {}", join(result.partition().right()))?;
    Ok(())
}

fn join(side: &[VertexId]) -> String {
    side.iter()
        .map(VertexId::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
