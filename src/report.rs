//! Report assembly and rendering.
//!
//! A report pairs every expanded case with its outcome, in expansion order,
//! alongside the cases rejected by configuration errors. Rendering writes
//! per-case PASS/FAIL lines to stdout, failure details to stderr, and a
//! closing summary line with counts.

use difference::{Changeset, Difference};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::errors::CaseError;
use crate::expand::ExpandedCase;
use crate::fault::Fault;
use crate::runner::Outcome;

/// One (expanded case, outcome) pair.
#[derive(Debug, Clone)]
pub struct CaseRecord {
    pub expanded: ExpandedCase,
    pub outcome: Outcome,
}

/// Ordered run results plus per-case configuration rejections.
#[derive(Debug, Default)]
pub struct Report {
    pub records: Vec<CaseRecord>,
    pub rejected: Vec<(String, CaseError)>,
}

impl Report {
    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn passed(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// True when any outcome failed or any case was rejected outright.
    pub fn has_failures(&self) -> bool {
        self.failed() > 0 || !self.rejected.is_empty()
    }

    /// The first fault that violated an expect-fault scope, if any. Callers
    /// surface it after the report instead of swallowing it.
    pub fn first_unexpected_fault(&self) -> Option<&Fault> {
        self.records.iter().find_map(|r| match &r.outcome {
            Outcome::ExpectedFaultNotRaised {
                raised: Some(fault),
                ..
            } => Some(fault),
            _ => None,
        })
    }
}

/// Prints a report with colorized PASS/FAIL markers.
pub struct ReportPrinter {
    verbose: bool,
    color: ColorChoice,
}

impl ReportPrinter {
    pub fn new(verbose: bool, color: ColorChoice) -> Self {
        Self { verbose, color }
    }

    /// Colors only when stdout is a terminal.
    pub fn auto(verbose: bool) -> Self {
        let color = if atty::is(atty::Stream::Stdout) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(verbose, color)
    }

    pub fn print(&self, report: &Report) {
        let mut stdout = StandardStream::stdout(self.color);

        for record in &report.records {
            let label = record.outcome.label();
            match &record.outcome {
                Outcome::Passed | Outcome::ExpectedFaultRaised { .. } => {
                    if self.verbose {
                        self.print_status(&mut stdout, Color::Green, label);
                        println!(": {}{}", record.expanded.id(), bound_values(record));
                    }
                }
                Outcome::Failed { reason } => {
                    self.print_status(&mut stdout, Color::Red, label);
                    println!(": {}{}", record.expanded.id(), bound_values(record));
                    eprintln!("  reason: {}", reason);
                    self.print_reason_diff(&mut stdout, reason);
                }
                Outcome::ExpectedFaultNotRaised { detail, .. } => {
                    self.print_status(&mut stdout, Color::Red, label);
                    println!(": {}{}", record.expanded.id(), bound_values(record));
                    eprintln!("  expect-fault scope: {}", detail);
                }
            }
        }

        for (name, err) in &report.rejected {
            self.print_status(&mut stdout, Color::Red, "REJECTED");
            println!(": {}", name);
            eprintln!("  {}", err);
        }

        let mut summary = format!(
            "case summary: total {}, passed {}, failed {}",
            report.total(),
            report.passed(),
            report.failed()
        );
        if !report.rejected.is_empty() {
            summary.push_str(&format!(", rejected {}", report.rejected.len()));
        }
        println!("\n{}", summary);
    }

    fn print_status(&self, stdout: &mut StandardStream, color: Color, status: &str) {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        print!("{}", status);
        let _ = stdout.reset();
    }

    // Equality assertion reasons carry both sides; show them as a diff with
    // the expected side green and the actual side red.
    fn print_reason_diff(&self, stdout: &mut StandardStream, reason: &str) {
        let Some((actual, expected)) = reason.split_once(" != ") else {
            return;
        };
        let changeset = Changeset::new(expected.trim(), actual.trim(), "\n");
        for diff in &changeset.diffs {
            match diff {
                Difference::Same(x) => {
                    let _ = stdout.reset();
                    eprintln!("   {}", x);
                }
                Difference::Rem(x) => {
                    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                    eprintln!("  -{}", x);
                }
                Difference::Add(x) => {
                    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
                    eprintln!("  +{}", x);
                }
            }
        }
        let _ = stdout.reset();
    }
}

fn bound_values(record: &CaseRecord) -> String {
    if record.expanded.bindings.is_empty() {
        String::new()
    } else {
        format!(" ({})", record.expanded.bindings)
    }
}
