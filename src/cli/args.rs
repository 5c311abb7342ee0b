//! Defines the command-line arguments and subcommands for the casework CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "casework",
    version,
    about = "A parametrized test-case expansion and execution engine."
)]
pub struct CaseworkArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Expand and run every case, or a single case selected by name.
    Run {
        /// The name of a single registered case to run.
        name: Option<String>,
        /// Include every expanded case and its bound values in the report.
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print the concrete expanded invocations without running them.
    Expand {
        /// The name of a single registered case to expand.
        name: Option<String>,
    },
    /// List registered case names with their parameter axes.
    List,
}
