use crate::objective::NoEdgePolicy;

/// Largest matrix accepted by default. Relaxation is cubic in the number of
/// vertices and the trace keeps `n + 1` full matrices.
pub const DEFAULT_MAX_VERTICES: usize = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverParams {
    /// Missing-edge convention for maximize mode.
    pub no_edge: NoEdgePolicy,
    /// `None` accepts any size.
    pub max_vertices: Option<usize>,
}

impl Default for SolverParams {
    fn default() -> Self {
        SolverParams {
            no_edge: NoEdgePolicy::NegativeInfinity,
            max_vertices: Some(DEFAULT_MAX_VERTICES),
        }
    }
}
