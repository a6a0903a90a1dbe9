//! Command-line interface orchestration for the karger tools.
//!
//! The CLI offers a `min-cut` command that loads a plain-text edge list and
//! runs the randomized contraction search over it.

mod commands;
mod edge_list;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, MinCutCommand, render_summary, run_cli,
};
pub use edge_list::{EdgeListError, parse_edge_list};
