//! Case expansion: turns a case plus its axes into concrete invocations.
//!
//! Expansion folds over the axes in declaration order, starting from a single
//! binding that holds the case's defaults. An independent axis crosses every
//! binding accumulated so far with each of its candidate values; a joint axis
//! crosses with each of its rows, binding the whole parameter tuple
//! atomically. The fold is deterministic, so repeated expansion of an
//! unchanged case yields identically ordered output.

use std::collections::HashSet;

use crate::axis::Axis;
use crate::case::{Bindings, Case};
use crate::errors::CaseError;

/// A case identifier plus one concrete binding of all declared parameters.
#[derive(Debug, Clone)]
pub struct ExpandedCase {
    pub case: String,
    /// Position within the case's expansion, in expansion order.
    pub ordinal: usize,
    pub bindings: Bindings,
    labels: Vec<String>,
}

impl ExpandedCase {
    /// Stable identifier for report lines: the axis-bound values in
    /// declaration order, e.g. `x_plus_y_cartesian_product[2-3]`. A case with
    /// no axes is identified by its bare name.
    pub fn id(&self) -> String {
        if self.labels.is_empty() {
            self.case.clone()
        } else {
            format!("{}[{}]", self.case, self.labels.join("-"))
        }
    }
}

/// Produces the ordered, concrete invocations of `case`.
pub fn expand(case: &Case) -> Result<Vec<ExpandedCase>, CaseError> {
    check_parameter_overlap(case)?;

    let mut seed = Bindings::new();
    for (param, value) in &case.defaults {
        seed = seed.bind(param, value.clone());
    }

    let mut current: Vec<(Bindings, Vec<String>)> = vec![(seed, Vec::new())];
    for axis in &case.axes {
        current = apply_axis(axis, &current)?;
    }

    Ok(current
        .into_iter()
        .enumerate()
        .map(|(ordinal, (bindings, labels))| ExpandedCase {
            case: case.name.clone(),
            ordinal,
            bindings,
            labels,
        })
        .collect())
}

fn apply_axis(
    axis: &Axis,
    current: &[(Bindings, Vec<String>)],
) -> Result<Vec<(Bindings, Vec<String>)>, CaseError> {
    let mut next = Vec::with_capacity(current.len() * axis.arm_count());
    match axis {
        Axis::Independent { param, values } => {
            for (bindings, labels) in current {
                for value in values {
                    let mut labels = labels.clone();
                    labels.push(value.to_string());
                    next.push((bindings.bind(param, value.clone()), labels));
                }
            }
        }
        Axis::Joint { params, rows } => {
            for (index, row) in rows.iter().enumerate() {
                if row.len() != params.len() {
                    return Err(CaseError::RowShapeMismatch {
                        params: params.join(", "),
                        row: index,
                        expected: params.len(),
                        found: row.len(),
                    });
                }
            }
            for (bindings, labels) in current {
                for row in rows {
                    let mut bound = bindings.clone();
                    let mut labels = labels.clone();
                    for (param, value) in params.iter().zip(row) {
                        bound = bound.bind(param, value.clone());
                        labels.push(value.to_string());
                    }
                    next.push((bound, labels));
                }
            }
        }
    }
    Ok(next)
}

// Overlapping parameter declarations are a configuration error, including a
// repeat inside a single joint tuple.
fn check_parameter_overlap(case: &Case) -> Result<(), CaseError> {
    let mut seen = HashSet::new();
    for axis in &case.axes {
        for param in axis.params() {
            if !seen.insert(param.to_string()) {
                return Err(CaseError::DuplicateParameter {
                    case: case.name.clone(),
                    param: param.to_string(),
                });
            }
        }
    }
    Ok(())
}
