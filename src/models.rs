use serde::{Deserialize, Serialize};

// ---------- API (wire) types: owned & serde-friendly ----------

/// Per-variable (lower, upper) bounds; `None` on either side means unbounded.
///
/// Serializes as a two-element JSON array, so `[0, null]` is "non-negative,
/// no upper limit".
pub type VariableBound = (Option<f64>, Option<f64>);

/// A linear program as posted by the caller.
///
/// `objective` holds one coefficient per decision variable. Row `j` of
/// `constraints_matrix` pairs with `constraints_limits[j]` to express
/// `row · x <= limit`; every row must be as wide as the objective. `bounds`
/// carries one pair per variable, and `maximize` selects the objective sense.
#[derive(Debug, Clone, Deserialize)]
pub struct LpProblem {
    pub objective: Vec<f64>,
    pub constraints_matrix: Vec<Vec<f64>>,
    pub constraints_limits: Vec<f64>,
    pub bounds: Vec<VariableBound>,
    #[serde(default = "default_maximize")]
    pub maximize: bool,
}

fn default_maximize() -> bool {
    true
}

impl LpProblem {
    /// Number of decision variables (length of the objective).
    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    /// Number of constraint rows.
    pub fn num_constraints(&self) -> usize {
        self.constraints_matrix.len()
    }
}

/// Response envelope for one solve.
///
/// `solution` and `optimal_value` are both present on success and both absent
/// otherwise; a failure envelope carries only `success` and `message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_value: Option<f64>,
    pub message: String,
}
