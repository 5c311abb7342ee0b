//! Configuration and invocation errors.
//!
//! These are distinct from runtime [`Fault`](crate::fault::Fault)s: a fault
//! is raised by a case body and recorded as an outcome, while the errors here
//! reject a case (or a whole invocation) before any body runs. Each variant
//! carries a stable error code and, where useful, a help message for the
//! diagnostic renderer.

use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaseError {
    /// A second case was registered under an already-taken name.
    #[error("duplicate case name: {name}")]
    DuplicateCase { name: String },

    /// Two axes of the same case (or one joint tuple) declare the same
    /// parameter name.
    #[error("case `{case}` declares parameter `{param}` more than once")]
    DuplicateParameter { case: String, param: String },

    /// A single-case selection named a case the registry does not hold.
    #[error("no case named `{name}`")]
    CaseNotFound { name: String, known: Vec<String> },

    /// A joint-axis row whose width differs from its parameter tuple.
    #[error(
        "axis over ({params}) has a row of width {found} at index {row}, expected {expected}"
    )]
    RowShapeMismatch {
        params: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// An axis table file could not be read or parsed.
    #[error("failed to load axis table {path}: {detail}")]
    AxisTable { path: String, detail: String },
}

impl CaseError {
    fn code_suffix(&self) -> &'static str {
        match self {
            CaseError::DuplicateCase { .. } => "duplicate_case",
            CaseError::DuplicateParameter { .. } => "duplicate_parameter",
            CaseError::CaseNotFound { .. } => "case_not_found",
            CaseError::RowShapeMismatch { .. } => "row_shape_mismatch",
            CaseError::AxisTable { .. } => "axis_table",
        }
    }

    fn area(&self) -> &'static str {
        match self {
            CaseError::DuplicateCase { .. } | CaseError::CaseNotFound { .. } => "registry",
            CaseError::DuplicateParameter { .. } | CaseError::RowShapeMismatch { .. } => "expand",
            CaseError::AxisTable { .. } => "axis",
        }
    }
}

impl Diagnostic for CaseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!(
            "casework::{}::{}",
            self.area(),
            self.code_suffix()
        )))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            CaseError::CaseNotFound { known, .. } if !known.is_empty() => Some(Box::new(format!(
                "registered cases: {}",
                known.join(", ")
            ))),
            CaseError::DuplicateParameter { .. } => Some(Box::new(
                "each parameter name may be declared by exactly one axis",
            )),
            CaseError::DuplicateCase { .. } => Some(Box::new(
                "case names must be unique within a registry",
            )),
            _ => None,
        }
    }
}
