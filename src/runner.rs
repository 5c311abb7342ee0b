//! Case execution: runs expanded cases and records outcomes.
//!
//! Execution never halts on a failing case. Bodies communicate exclusively
//! through `Result`, so one case's fault cannot leak into the next; the only
//! shared structures are the read-only registry and the append-only report.

use crate::case::{Case, Expectation};
use crate::errors::CaseError;
use crate::expand::{expand, ExpandedCase};
use crate::fault::{Fault, FaultKind};
use crate::registry::Registry;
use crate::report::{CaseRecord, Report};

/// The recorded result of running one expanded case.
///
/// Created once per expanded case, never mutated afterwards.
#[derive(Debug, Clone)]
pub enum Outcome {
    Passed,
    Failed {
        reason: String,
    },
    /// The body raised exactly the fault its expect-fault scope named.
    /// Counts as passing.
    ExpectedFaultRaised {
        kind: FaultKind,
    },
    /// The expect-fault scope was not satisfied. When the body raised a
    /// fault of the wrong kind, `raised` preserves it so the caller can
    /// surface it instead of silently swallowing it.
    ExpectedFaultNotRaised {
        detail: String,
        raised: Option<Fault>,
    },
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(
            self,
            Outcome::Passed | Outcome::ExpectedFaultRaised { .. }
        )
    }

    pub fn label(&self) -> &'static str {
        if self.is_pass() {
            "PASS"
        } else {
            "FAIL"
        }
    }
}

/// Executes expanded cases against their expectations.
pub struct Runner;

impl Runner {
    /// Invokes the body of one expanded case and classifies the result.
    pub fn run(case: &Case, expanded: &ExpandedCase) -> Outcome {
        let result = (case.body)(&expanded.bindings);
        match (&case.expect, result) {
            (Expectation::Success, Ok(())) => Outcome::Passed,
            (Expectation::Success, Err(fault)) => Outcome::Failed {
                reason: fault_reason(fault),
            },
            (Expectation::Fault(kind), Err(fault)) if fault.kind == *kind => {
                Outcome::ExpectedFaultRaised { kind: *kind }
            }
            (Expectation::Fault(kind), Ok(())) => Outcome::ExpectedFaultNotRaised {
                detail: format!("expected a {} fault, but the body completed", kind),
                raised: None,
            },
            (Expectation::Fault(kind), Err(fault)) => Outcome::ExpectedFaultNotRaised {
                detail: format!("expected a {} fault, got {}", kind, fault.kind),
                raised: Some(fault),
            },
        }
    }

    /// Expands one case and runs every concrete invocation, in expansion
    /// order. A configuration error aborts this case before anything runs.
    pub fn run_case(case: &Case) -> Result<Vec<CaseRecord>, CaseError> {
        let expanded = expand(case)?;
        Ok(expanded
            .into_iter()
            .map(|e| {
                let outcome = Self::run(case, &e);
                CaseRecord {
                    expanded: e,
                    outcome,
                }
            })
            .collect())
    }

    /// Runs every registered case. Configuration errors reject the offending
    /// case only; every other case still runs.
    pub fn run_all(registry: &Registry) -> Report {
        let mut report = Report::default();
        for case in registry.iter() {
            match Self::run_case(case) {
                Ok(records) => report.records.extend(records),
                Err(err) => report.rejected.push((case.name.clone(), err)),
            }
        }
        report
    }

    /// Runs a single case selected by name.
    pub fn run_named(registry: &Registry, name: &str) -> Result<Report, CaseError> {
        let case = registry.select(name)?;
        let mut report = Report::default();
        match Self::run_case(case) {
            Ok(records) => report.records = records,
            Err(err) => report.rejected.push((case.name.clone(), err)),
        }
        Ok(report)
    }
}

// Assertion reasons read as the failed condition itself ("4 != 5"); every
// other kind keeps its kind prefix.
fn fault_reason(fault: Fault) -> String {
    match fault.kind {
        FaultKind::Assertion => fault.message,
        _ => fault.to_string(),
    }
}
