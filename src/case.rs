//! Case definitions: a named body, its expectation, and its parameter axes.
//!
//! A case associates an identifier with a plain function pointer and an
//! explicit, ordered list of [`Axis`] declarations. Nothing here is implicit:
//! parametrization lives in the data structure, not in attributes attached to
//! the function.

use std::fmt;

use im::HashMap;

use crate::axis::Axis;
use crate::fault::{Fault, FaultKind};
use crate::value::Value;

/// The signature every case body implements. Bodies receive one concrete
/// binding of all declared parameters and report faults through `Result`.
pub type CaseFn = fn(&Bindings) -> Result<(), Fault>;

/// One concrete set of parameter bindings handed to a case body.
///
/// Parameter names keep their declaration order so expanded-case identifiers
/// and verbose report lines are stable across runs; the value map itself is
/// persistent, so the expander's intermediate bindings share structure.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    params: Vec<String>,
    values: HashMap<String, Value>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new binding set with `param` bound to `value`. Rebinding an
    /// existing name replaces its value without changing declaration order.
    pub(crate) fn bind(&self, param: &str, value: Value) -> Self {
        let mut params = self.params.clone();
        if !self.values.contains_key(param) {
            params.push(param.to_string());
        }
        Self {
            params,
            values: self.values.update(param.to_string(), value),
        }
    }

    pub fn get(&self, param: &str) -> Option<&Value> {
        self.values.get(param)
    }

    /// Bound parameter names in declaration order.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Looks up a bound value, faulting when the name was never bound.
    pub fn value(&self, param: &str) -> Result<&Value, Fault> {
        self.values
            .get(param)
            .ok_or_else(|| Fault::missing_parameter(param))
    }

    /// Looks up a bound `Int`, faulting on a missing name or a wrong kind.
    pub fn int(&self, param: &str) -> Result<i64, Fault> {
        let value = self.value(param)?;
        value.as_int().ok_or_else(|| {
            Fault::type_mismatch(format!(
                "parameter `{}` is {}, expected Int",
                param,
                value.type_name()
            ))
        })
    }

    /// Looks up a bound numeric value widened to `f64`.
    pub fn float(&self, param: &str) -> Result<f64, Fault> {
        let value = self.value(param)?;
        value.as_number().ok_or_else(|| {
            Fault::type_mismatch(format!(
                "parameter `{}` is {}, expected a numeric kind",
                param,
                value.type_name()
            ))
        })
    }
}

impl fmt::Display for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for param in &self.params {
            if let Some(value) = self.values.get(param) {
                if !first {
                    write!(f, ", ")?;
                }
                first = false;
                write!(f, "{}={}", param, value)?;
            }
        }
        Ok(())
    }
}

/// Type-safe expectation for a case's outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Expectation {
    /// The body is expected to complete without raising.
    Success,
    /// The body is expected to raise a fault of exactly this kind.
    Fault(FaultKind),
}

impl Expectation {
    /// Checks whether this expectation is satisfied by the given body result.
    pub fn matches(&self, result: &Result<(), Fault>) -> bool {
        match (self, result) {
            (Expectation::Success, Ok(())) => true,
            (Expectation::Fault(expected), Err(fault)) => fault.kind == *expected,
            _ => false,
        }
    }
}

/// A single named test definition before parametrization expansion.
#[derive(Debug, Clone)]
pub struct Case {
    pub name: String,
    pub body: CaseFn,
    pub expect: Expectation,
    /// Default argument values, bound before any axis and shadowed by axes
    /// that declare the same name.
    pub defaults: Vec<(String, Value)>,
    /// Parameter axes in declaration order.
    pub axes: Vec<Axis>,
}

impl Case {
    pub fn new(name: impl Into<String>, body: CaseFn) -> Self {
        Self {
            name: name.into(),
            body,
            expect: Expectation::Success,
            defaults: Vec::new(),
            axes: Vec::new(),
        }
    }

    pub fn with_default(mut self, param: impl Into<String>, value: Value) -> Self {
        self.defaults.push((param.into(), value));
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axes.push(axis);
        self
    }

    /// Wraps the whole body in an expect-fault scope for the given kind.
    pub fn expect_fault(mut self, kind: FaultKind) -> Self {
        self.expect = Expectation::Fault(kind);
        self
    }
}
