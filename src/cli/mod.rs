//! The casework command-line interface.
//!
//! This module is the entry point for all CLI commands: it builds the
//! registry, dispatches subcommands, and maps run results onto the process
//! exit status. Exit code 0 means every outcome passed; 1 means at least one
//! failure or rejection; 2 means the invocation itself was invalid.

use clap::Parser;
use std::process;

use crate::case::Case;
use crate::cases_std;
use crate::cli::args::{CaseworkArgs, Command};
use crate::expand::expand;
use crate::registry::Registry;
use crate::report::ReportPrinter;
use crate::runner::Runner;

pub mod args;

/// The main entry point for the CLI.
pub fn run() {
    let args = CaseworkArgs::parse();

    let mut registry = Registry::new();
    if let Err(e) = cases_std::register_std_cases(&mut registry) {
        render_error(e);
        process::exit(2);
    }

    let code = match args.command {
        Command::Run { name, verbose } => handle_run(&registry, name.as_deref(), verbose),
        Command::Expand { name } => handle_expand(&registry, name.as_deref()),
        Command::List => handle_list(&registry),
    };
    process::exit(code);
}

fn handle_run(registry: &Registry, name: Option<&str>, verbose: bool) -> i32 {
    let report = match name {
        Some(name) => match Runner::run_named(registry, name) {
            Ok(report) => report,
            Err(e) => {
                render_error(e);
                return 2;
            }
        },
        None => Runner::run_all(registry),
    };

    ReportPrinter::auto(verbose).print(&report);

    // A fault of the wrong kind inside an expect-fault scope is surfaced
    // after the report rather than swallowed.
    if let Some(fault) = report.first_unexpected_fault() {
        render_error(fault.clone());
    }

    if report.has_failures() {
        1
    } else {
        0
    }
}

fn handle_expand(registry: &Registry, name: Option<&str>) -> i32 {
    let cases: Vec<&Case> = match name {
        Some(name) => match registry.select(name) {
            Ok(case) => vec![case],
            Err(e) => {
                render_error(e);
                return 2;
            }
        },
        None => registry.iter().collect(),
    };

    let mut code = 0;
    for case in cases {
        match expand(case) {
            Ok(expanded) => {
                for entry in &expanded {
                    if entry.bindings.is_empty() {
                        println!("{}", entry.id());
                    } else {
                        println!("{} ({})", entry.id(), entry.bindings);
                    }
                }
            }
            Err(e) => {
                render_error(e);
                code = 2;
            }
        }
    }
    code
}

fn handle_list(registry: &Registry) -> i32 {
    for case in registry.iter() {
        println!("{}", case.name);
        for axis in &case.axes {
            println!(
                "  - ({}) over {} arms",
                axis.params().join(", "),
                axis.arm_count()
            );
        }
    }
    0
}

fn render_error(err: impl miette::Diagnostic + Send + Sync + 'static) {
    eprintln!("{:?}", miette::Report::new(err));
}
