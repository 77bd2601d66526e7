use microlp::{ComparisonOp, OptimizationDirection, Problem};

use crate::domain::normalize::CanonicalProblem;
use crate::domain::solver::{SolverEngine, SolverOutcome};

/// Default engine: the pure-Rust microlp simplex implementation.
pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        MicrolpSolver
    }
}

impl SolverEngine for MicrolpSolver {
    fn solve(&self, problem: &CanonicalProblem) -> SolverOutcome {
        let mut lp = Problem::new(OptimizationDirection::Minimize);

        // One microlp variable per objective coefficient; open bound sides
        // become infinities, which microlp treats as unbounded.
        let variables: Vec<microlp::Variable> = problem
            .objective
            .iter()
            .zip(&problem.bounds)
            .map(|(&coefficient, &(lower, upper))| {
                lp.add_var(
                    coefficient,
                    (
                        lower.unwrap_or(f64::NEG_INFINITY),
                        upper.unwrap_or(f64::INFINITY),
                    ),
                )
            })
            .collect();

        for (row, &limit) in problem
            .constraints_matrix
            .iter()
            .zip(&problem.constraints_limits)
        {
            lp.add_constraint(
                row.iter()
                    .enumerate()
                    .map(|(column, &coefficient)| (variables[column], coefficient)),
                ComparisonOp::Le,
                limit,
            );
        }

        match lp.solve() {
            Ok(solved) => SolverOutcome::Optimal {
                variables: variables.iter().map(|&var| solved[var]).collect(),
                objective: solved.objective(),
            },
            Err(microlp::Error::Infeasible) => SolverOutcome::Infeasible,
            Err(microlp::Error::Unbounded) => SolverOutcome::Unbounded,
            Err(other) => SolverOutcome::NonConvergent(other.to_string()),
        }
    }

    fn name(&self) -> &str {
        "microlp"
    }
}
