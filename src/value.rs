use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a concrete parameter value in the casework engine.
///
/// The set of accepted kinds is closed: every value a case can be
/// parametrized over is one of these variants, and operations over values
/// match on the variant rather than inspecting types dynamically.
///
/// # Examples
///
/// ```rust
/// use casework::value::Value;
/// let n = Value::Int(3);
/// assert_eq!(n.type_name(), "Int");
/// let s = Value::Str("hello".to_string());
/// assert_eq!(s.type_name(), "Str");
/// assert!(Value::Float(0.5).is_numeric());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Returns the kind name of the value as a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casework::value::Value;
    /// let v = Value::Bool(true);
    /// assert_eq!(v.type_name(), "Bool");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Str(_) => "Str",
        }
    }

    /// Returns true for the numeric kinds (`Int` and `Float`).
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Returns the value widened to `f64` if this is a numeric kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casework::value::Value;
    /// assert_eq!(Value::Int(2).as_number(), Some(2.0));
    /// assert_eq!(Value::Float(2.5).as_number(), Some(2.5));
    /// assert_eq!(Value::Str("nope".to_string()).as_number(), None);
    /// ```
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the contained integer if this is an `Int` value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}
