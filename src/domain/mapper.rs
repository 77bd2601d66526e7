use crate::domain::solver::SolverOutcome;
use crate::models::{LpProblem, Solution};

/// Round to 6 decimal places, halves away from zero (`f64::round` semantics).
///
/// Solver backends produce values with floating-point jitter; rounding keeps
/// the wire representation stable across engines and runs.
fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Map a solver outcome onto the wire-level solution envelope.
///
/// An optimal outcome carries the canonical (minimize-form) objective value,
/// so for maximize problems the sign is flipped back before rounding. Every
/// non-optimal outcome becomes a `success: false` envelope whose message
/// carries the engine's status text.
///
/// # Arguments
/// * `outcome` - What the solver engine reported for the canonical problem
/// * `problem` - The request the canonical problem was normalized from
///
/// # Returns
/// * The response body for a 200 reply
pub fn map_outcome(outcome: SolverOutcome, problem: &LpProblem) -> Solution {
    match outcome {
        SolverOutcome::Optimal {
            variables,
            objective,
        } => {
            let optimal_value = if problem.maximize {
                -objective
            } else {
                objective
            };
            Solution {
                success: true,
                solution: Some(variables.into_iter().map(round6).collect()),
                optimal_value: Some(round6(optimal_value)),
                message: "Optimal solution found".to_string(),
            }
        }
        SolverOutcome::Infeasible => failure("problem is infeasible"),
        SolverOutcome::Unbounded => failure("problem is unbounded"),
        SolverOutcome::NonConvergent(reason) => failure(&reason),
    }
}

fn failure(reason: &str) -> Solution {
    Solution {
        success: false,
        solution: None,
        optimal_value: None,
        message: format!("Optimization failed: {}", reason),
    }
}
