use std::panic::{catch_unwind, AssertUnwindSafe};

use thiserror::Error;

use crate::domain::mapper::map_outcome;
use crate::domain::normalize::normalize;
use crate::domain::solver::SolverEngine;
use crate::domain::validate::ValidationError;
use crate::models::{LpProblem, Solution};

/// Reasons a solve request cannot produce a solution envelope.
///
/// Validation failures describe a malformed request and map to a 400 reply.
/// Internal failures come from a misbehaving engine and map to a 500 reply.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("solver engine failure: {0}")]
    Internal(String),
}

/// Run the full pipeline: normalize, solve, map.
///
/// Infeasible, unbounded and non-convergent outcomes are not errors here;
/// they come back as `success: false` envelopes. Only malformed input and
/// engine panics surface as `Err`.
///
/// # Arguments
/// * `engine` - The solver backend to run the canonical problem through
/// * `problem` - The request body as received on the wire
///
/// # Returns
/// * The response envelope, or why none could be produced
pub fn solve_problem(
    engine: &dyn SolverEngine,
    problem: &LpProblem,
) -> Result<Solution, SolveError> {
    let canonical = normalize(problem)?;

    // Engines only read the canonical problem, so there is no state to
    // poison when one panics.
    let outcome = catch_unwind(AssertUnwindSafe(|| engine.solve(&canonical)))
        .map_err(|_| SolveError::Internal(format!("{} engine panicked", engine.name())))?;

    Ok(map_outcome(outcome, problem))
}
