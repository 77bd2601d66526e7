use crate::domain::validate::{validate_problem, ValidationError};
use crate::models::{LpProblem, VariableBound};

/// A validated LP in the single canonical sense every engine expects:
/// minimize `objective · x` subject to `constraints_matrix · x <= limits`
/// and the per-variable bounds.
///
/// Built only by [`normalize`]; engines may rely on the wire invariants
/// holding (at least one variable, rows as wide as the objective, one limit
/// per row, one well-ordered bound pair per variable).
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalProblem {
    pub objective: Vec<f64>,
    pub constraints_matrix: Vec<Vec<f64>>,
    pub constraints_limits: Vec<f64>,
    pub bounds: Vec<VariableBound>,
}

/// Validate `problem` and convert it to minimization form.
///
/// A maximize request becomes a minimize request over the element-wise
/// negated objective; the mapper flips the reported optimum back afterwards.
/// Constraints, limits and bounds pass through unchanged. This function never
/// looks for a feasible point; that is entirely the engine's job.
pub fn normalize(problem: &LpProblem) -> Result<CanonicalProblem, ValidationError> {
    validate_problem(problem)?;

    let objective = if problem.maximize {
        problem.objective.iter().map(|c| -c).collect()
    } else {
        problem.objective.clone()
    };

    Ok(CanonicalProblem {
        objective,
        constraints_matrix: problem.constraints_matrix.clone(),
        constraints_limits: problem.constraints_limits.clone(),
        bounds: problem.bounds.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(maximize: bool) -> LpProblem {
        LpProblem {
            objective: vec![3.0, 5.0],
            constraints_matrix: vec![vec![2.0, 3.0], vec![1.0, 2.0]],
            constraints_limits: vec![20.0, 10.0],
            bounds: vec![(Some(0.0), None), (Some(0.0), None)],
            maximize,
        }
    }

    #[test]
    fn test_normalize_negates_objective_for_maximize() {
        let canonical = normalize(&problem(true)).unwrap();
        assert_eq!(canonical.objective, vec![-3.0, -5.0]);
    }

    #[test]
    fn test_normalize_keeps_objective_for_minimize() {
        let canonical = normalize(&problem(false)).unwrap();
        assert_eq!(canonical.objective, vec![3.0, 5.0]);
    }

    #[test]
    fn test_normalize_passes_constraints_and_bounds_through() {
        let input = problem(true);
        let canonical = normalize(&input).unwrap();
        assert_eq!(canonical.constraints_matrix, input.constraints_matrix);
        assert_eq!(canonical.constraints_limits, input.constraints_limits);
        assert_eq!(canonical.bounds, input.bounds);
    }

    #[test]
    fn test_normalize_rejects_invalid_problem() {
        let mut invalid = problem(true);
        invalid.constraints_matrix[0] = vec![2.0, 3.0, 4.0];
        assert_eq!(
            normalize(&invalid),
            Err(ValidationError::RowWidthMismatch {
                row: 0,
                found: 3,
                expected: 2,
            })
        );
    }
}
