//! Parameter axes: the dimensions a case is parametrized over.
//!
//! An axis is either independent (one parameter, a list of candidate values)
//! or joint (a tuple of parameters bound row-by-row). Independent axes on the
//! same case compose via cartesian product during expansion; a joint axis
//! contributes exactly its declared rows.

use std::fs;
use std::path::Path;

use crate::errors::CaseError;
use crate::value::Value;

/// One dimension of parametrization attached to a case.
#[derive(Debug, Clone)]
pub enum Axis {
    /// A single parameter crossed over a list of candidate values.
    Independent { param: String, values: Vec<Value> },
    /// A tuple of parameters bound row-by-row, never expanded independently
    /// of each other.
    Joint {
        params: Vec<String>,
        rows: Vec<Vec<Value>>,
    },
}

impl Axis {
    /// Declares an independent axis: `param` takes each of `values` in turn.
    pub fn values<P, I>(param: P, values: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = Value>,
    {
        Axis::Independent {
            param: param.into(),
            values: values.into_iter().collect(),
        }
    }

    /// Declares a joint axis: each row binds the whole parameter tuple at
    /// once.
    pub fn table<P, S>(params: P, rows: Vec<Vec<Value>>) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Axis::Joint {
            params: params.into_iter().map(Into::into).collect(),
            rows,
        }
    }

    /// Loads the rows of a joint axis from a YAML or JSON file, dispatched by
    /// extension. The file holds a plain list of value rows, e.g.
    /// `- [2, 2, 4]`.
    pub fn table_from_path<P, S, Q>(params: P, path: Q) -> Result<Self, CaseError>
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
        Q: AsRef<Path>,
    {
        let path = path.as_ref();
        let table_error = |detail: String| CaseError::AxisTable {
            path: path.display().to_string(),
            detail,
        };
        let text = fs::read_to_string(path).map_err(|e| table_error(e.to_string()))?;
        let rows: Vec<Vec<Value>> = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&text).map_err(|e| table_error(e.to_string()))?
            }
            _ => serde_json::from_str(&text).map_err(|e| table_error(e.to_string()))?,
        };
        Ok(Self::table(params, rows))
    }

    /// The parameter names this axis declares, in declaration order.
    pub fn params(&self) -> Vec<&str> {
        match self {
            Axis::Independent { param, .. } => vec![param.as_str()],
            Axis::Joint { params, .. } => params.iter().map(String::as_str).collect(),
        }
    }

    /// How many concrete choices this axis contributes per existing binding.
    pub fn arm_count(&self) -> usize {
        match self {
            Axis::Independent { values, .. } => values.len(),
            Axis::Joint { rows, .. } => rows.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn table_rows_load_from_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "- [2, 2, 4]\n- [2, 3, 5]").unwrap();

        let axis = Axis::table_from_path(["x", "y", "expected"], file.path()).unwrap();
        match axis {
            Axis::Joint { params, rows } => {
                assert_eq!(params, vec!["x", "y", "expected"]);
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0], vec![Value::Int(2), Value::Int(2), Value::Int(4)]);
            }
            _ => panic!("expected a joint axis"),
        }
    }

    #[test]
    fn table_rows_load_from_json_with_mixed_kinds() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[[2, "2"], [1.5, true]]"#).unwrap();

        let axis = Axis::table_from_path(["x", "y"], file.path()).unwrap();
        match axis {
            Axis::Joint { rows, .. } => {
                assert_eq!(rows[0], vec![Value::Int(2), Value::Str("2".to_string())]);
                assert_eq!(rows[1], vec![Value::Float(1.5), Value::Bool(true)]);
            }
            _ => panic!("expected a joint axis"),
        }
    }

    #[test]
    fn unreadable_table_reports_axis_table_error() {
        let err = Axis::table_from_path(["x"], "does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, CaseError::AxisTable { .. }));
    }
}
