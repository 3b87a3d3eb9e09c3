//! Command-line interface for the arbor algorithm demonstrations.
//!
//! Offers a `sort` command that heap-sorts a list of integers and an `mst`
//! command that computes a minimum spanning forest, both defaulting to the
//! textbook example inputs when invoked with no arguments.

mod commands;

pub use commands::{
    Cli, CliError, Command, EdgeSpec, ExecutionSummary, ForestSummary, MstArgs, SortArgs,
    SortSummary, render_summary, run_cli,
};
