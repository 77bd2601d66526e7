use crate::domain::solver::SolverEngine;
use crate::domain::solvers::MicrolpSolver;

#[cfg(feature = "highs-solver")]
use crate::domain::solvers::HighsSolver;

/// Available solver backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverType {
    Microlp,
    #[cfg(feature = "highs-solver")]
    Highs,
}

impl SolverType {
    /// Parse solver type from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "microlp" => Some(SolverType::Microlp),
            #[cfg(feature = "highs-solver")]
            "highs" => Some(SolverType::Highs),
            _ => None,
        }
    }
}

/// Create a solver engine instance based on the specified type
pub fn create_solver(solver_type: SolverType) -> Box<dyn SolverEngine> {
    match solver_type {
        SolverType::Microlp => Box::new(MicrolpSolver::new()),
        #[cfg(feature = "highs-solver")]
        SolverType::Highs => Box::new(HighsSolver::new()),
    }
}
