use thiserror::Error;

use crate::models::LpProblem;

/// A request that violated a data-model invariant.
///
/// Raised before any solver engine runs and mapped to HTTP 400; never a
/// statement about the LP's feasibility.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("objective must contain at least one coefficient")]
    EmptyObjective,
    #[error("constraints_matrix row {row} has {found} coefficients, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("constraints_matrix has {rows} rows but constraints_limits has {limits} values")]
    LimitCountMismatch { rows: usize, limits: usize },
    #[error("bounds has {found} pairs, expected {expected}")]
    BoundCountMismatch { found: usize, expected: usize },
    #[error("bounds[{index}] has lower {lower} greater than upper {upper}")]
    InvertedBound {
        index: usize,
        lower: f64,
        upper: f64,
    },
    #[error("{location} is not a finite number")]
    NonFiniteValue { location: String },
}

/// Check every invariant of the wire model against `problem`.
///
/// Present bound sides must be finite; an unbounded side is spelled `null`,
/// not an infinity literal.
pub fn validate_problem(problem: &LpProblem) -> Result<(), ValidationError> {
    let expected = problem.num_variables();
    if expected == 0 {
        return Err(ValidationError::EmptyObjective);
    }
    if let Some(index) = first_non_finite(&problem.objective) {
        return Err(ValidationError::NonFiniteValue {
            location: format!("objective[{}]", index),
        });
    }

    let rows = problem.num_constraints();
    let limits = problem.constraints_limits.len();
    if rows != limits {
        return Err(ValidationError::LimitCountMismatch { rows, limits });
    }
    for (row, coefficients) in problem.constraints_matrix.iter().enumerate() {
        if coefficients.len() != expected {
            return Err(ValidationError::RowWidthMismatch {
                row,
                found: coefficients.len(),
                expected,
            });
        }
        if let Some(index) = first_non_finite(coefficients) {
            return Err(ValidationError::NonFiniteValue {
                location: format!("constraints_matrix[{}][{}]", row, index),
            });
        }
    }
    if let Some(index) = first_non_finite(&problem.constraints_limits) {
        return Err(ValidationError::NonFiniteValue {
            location: format!("constraints_limits[{}]", index),
        });
    }

    if problem.bounds.len() != expected {
        return Err(ValidationError::BoundCountMismatch {
            found: problem.bounds.len(),
            expected,
        });
    }
    for (index, &(lower, upper)) in problem.bounds.iter().enumerate() {
        for side in [lower, upper].into_iter().flatten() {
            if !side.is_finite() {
                return Err(ValidationError::NonFiniteValue {
                    location: format!("bounds[{}]", index),
                });
            }
        }
        if let (Some(lower), Some(upper)) = (lower, upper) {
            if lower > upper {
                return Err(ValidationError::InvertedBound {
                    index,
                    lower,
                    upper,
                });
            }
        }
    }

    Ok(())
}

fn first_non_finite(values: &[f64]) -> Option<usize> {
    values.iter().position(|value| !value.is_finite())
}
