//! Runtime faults raised by case bodies.
//!
//! Faults are values, not panics: a body reports them through `Result`, and
//! the runner decides whether a fault fails the case or satisfies an
//! expect-fault scope. Matching is by exact `FaultKind`.

use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// Type-safe classification of the faults a case body can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// A boolean condition check failed.
    Assertion,
    /// An operation was applied to value kinds it is not defined over.
    TypeMismatch,
    /// The body asked for a parameter name the expansion never bound.
    MissingParameter,
}

impl FaultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultKind::Assertion => "Assertion",
            FaultKind::TypeMismatch => "TypeMismatch",
            FaultKind::MissingParameter => "MissingParameter",
        }
    }

    fn code_suffix(&self) -> &'static str {
        match self {
            FaultKind::Assertion => "assertion",
            FaultKind::TypeMismatch => "type_mismatch",
            FaultKind::MissingParameter => "missing_parameter",
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fault raised while executing one expanded case.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}")]
pub struct Fault {
    pub kind: FaultKind,
    pub message: String,
}

impl Fault {
    pub fn assertion(message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::Assertion,
            message: message.into(),
        }
    }

    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::TypeMismatch,
            message: message.into(),
        }
    }

    pub fn missing_parameter(param: &str) -> Self {
        Self {
            kind: FaultKind::MissingParameter,
            message: format!("no parameter named `{}` is bound", param),
        }
    }
}

impl Diagnostic for Fault {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!(
            "casework::fault::{}",
            self.kind.code_suffix()
        )))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.kind {
            FaultKind::MissingParameter => Some(Box::new(
                "expansion binds exactly the parameters declared by the case's axes and defaults; \
                 check the name the body asks for",
            )),
            _ => None,
        }
    }
}
