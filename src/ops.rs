//! The operations exercised by the built-in demonstration cases, plus the
//! assertion helpers case bodies use to report failed conditions.
//!
//! Every operation matches on the closed set of value kinds with an explicit
//! fallback branch for rejected combinations.

use crate::fault::Fault;
use crate::value::Value;

/// Adds two values the permissive way: `Int + Int` stays integral, any
/// numeric mix widens to `Float`, strings concatenate, and every other
/// combination raises a `TypeMismatch` fault.
pub fn add(x: &Value, y: &Value) -> Result<Value, Fault> {
    match (x, y) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a + b)),
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{}{}", a, b))),
        _ => match (x.as_number(), y.as_number()) {
            (Some(a), Some(b)) => Ok(Value::Float(a + b)),
            _ => Err(Fault::type_mismatch(format!(
                "{} + {} is not defined",
                x.type_name(),
                y.type_name()
            ))),
        },
    }
}

/// Validating variant of [`add`]: the inputs are checked to be numeric kinds
/// before the addition happens, so strings are rejected here even though
/// `add` would concatenate them.
pub fn checked_add(x: &Value, y: &Value) -> Result<Value, Fault> {
    if !x.is_numeric() || !y.is_numeric() {
        return Err(Fault::type_mismatch(format!(
            "input kinds are not suitable for addition: {} + {}",
            x.type_name(),
            y.type_name()
        )));
    }
    add(x, y)
}

/// Fails with the textual form of the violated condition when `cond` is
/// false.
pub fn ensure(cond: bool, condition: impl Into<String>) -> Result<(), Fault> {
    if cond {
        Ok(())
    } else {
        Err(Fault::assertion(condition))
    }
}

/// Equality assertion whose failure reason reads `<actual> != <expected>`.
pub fn ensure_eq(actual: &Value, expected: &Value) -> Result<(), Fault> {
    if actual == expected {
        Ok(())
    } else {
        Err(Fault::assertion(format!("{} != {}", actual, expected)))
    }
}

/// Closeness assertion for sampled quantities: passes when `actual` is
/// within `tolerance` of `expected`.
pub fn ensure_close(actual: f64, expected: f64, tolerance: f64) -> Result<(), Fault> {
    if (actual - expected).abs() <= tolerance {
        Ok(())
    } else {
        Err(Fault::assertion(format!(
            "|{} - {}| > {}",
            actual, expected, tolerance
        )))
    }
}
