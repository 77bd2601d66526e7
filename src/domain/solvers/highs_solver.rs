use std::ops::Bound;

use highs::{ColProblem, HighsModelStatus, Sense};

use crate::domain::normalize::CanonicalProblem;
use crate::domain::solver::{SolverEngine, SolverOutcome};

/// HiGHS-backed engine, enabled by the `highs-solver` feature.
pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        HighsSolver
    }

    fn to_range(bound: &(Option<f64>, Option<f64>)) -> (Bound<f64>, Bound<f64>) {
        let (lower, upper) = bound;
        (
            lower.map_or(Bound::Unbounded, Bound::Included),
            upper.map_or(Bound::Unbounded, Bound::Included),
        )
    }
}

impl SolverEngine for HighsSolver {
    fn solve(&self, problem: &CanonicalProblem) -> SolverOutcome {
        let mut model = ColProblem::new();

        // All constraints are upper-bounded rows: a . x <= limit.
        let rows: Vec<_> = problem
            .constraints_limits
            .iter()
            .map(|&limit| model.add_row(..=limit))
            .collect();

        // Continuous columns, one per variable, with their row factors.
        for (column, (&coefficient, bound)) in problem
            .objective
            .iter()
            .zip(&problem.bounds)
            .enumerate()
        {
            let factors: Vec<_> = problem
                .constraints_matrix
                .iter()
                .enumerate()
                .map(|(row_index, row)| (rows[row_index], row[column]))
                .collect();

            model.add_column(coefficient, Self::to_range(bound), &factors);
        }

        let solved = model.optimise(Sense::Minimise).solve();

        match solved.status() {
            HighsModelStatus::Optimal => {
                let variables = solved.get_solution().columns().to_vec();
                let objective: f64 = problem
                    .objective
                    .iter()
                    .zip(&variables)
                    .map(|(coefficient, value)| coefficient * value)
                    .sum();
                SolverOutcome::Optimal {
                    variables,
                    objective,
                }
            }
            HighsModelStatus::Infeasible => SolverOutcome::Infeasible,
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
                SolverOutcome::Unbounded
            }
            other => SolverOutcome::NonConvergent(format!("solver status {:?}", other)),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}
