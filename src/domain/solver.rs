use crate::domain::normalize::CanonicalProblem;

/// Raw result of one engine invocation, in the canonical (minimization) sense.
///
/// Optimization failures are data here, not errors: infeasible and unbounded
/// problems are legitimate answers to a well-formed request.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverOutcome {
    /// An optimum was found: one value per variable plus the minimized objective.
    Optimal { variables: Vec<f64>, objective: f64 },
    /// No assignment satisfies all constraints and bounds at once.
    Infeasible,
    /// The objective can be decreased without limit inside the feasible region.
    Unbounded,
    /// The method stopped without converging; carries the engine's status text.
    NonConvergent(String),
}

/// Common interface for LP solver engines
pub trait SolverEngine: Send + Sync {
    /// Solve one canonical minimization problem
    ///
    /// # Arguments
    /// * `problem` - A validated [`CanonicalProblem`] (`A·x <= b` rows plus
    ///   per-variable bounds); the engine never sees the caller's objective
    ///   sense
    ///
    /// # Returns
    /// The tagged outcome. Any conforming LP algorithm (dense simplex,
    /// revised simplex, interior-point) may sit behind this trait.
    fn solve(&self, problem: &CanonicalProblem) -> SolverOutcome;

    /// Get the engine name for logging/debugging
    fn name(&self) -> &str;
}
