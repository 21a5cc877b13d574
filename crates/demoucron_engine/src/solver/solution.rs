use crate::{
    matrix::Matrix,
    objective::{Mode, NoEdgePolicy, Objective},
    solver::{path::Path, step_trace::StepTrace},
    weight::Weight,
};

/// Result of one run. `cost` is always the relaxed weight from the first to the
/// last vertex, which is the no-edge value when `path` is `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    trace: StepTrace,
    path: Option<Path>,
    cost: Weight,
    objective: Objective,
}

impl Solution {
    pub(crate) fn new(trace: StepTrace, path: Option<Path>, objective: Objective) -> Self {
        let last = trace.final_matrix();
        let cost = last.weight(0, last.num_vertices() - 1);

        Solution {
            trace,
            path,
            cost,
            objective,
        }
    }

    pub fn trace(&self) -> &StepTrace {
        &self.trace
    }

    pub fn matrices(&self) -> &[Matrix] {
        self.trace.snapshots()
    }

    pub fn final_matrix(&self) -> &Matrix {
        self.trace.final_matrix()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn cost(&self) -> Weight {
        self.cost
    }

    pub fn num_vertices(&self) -> usize {
        self.trace.initial().num_vertices()
    }

    pub fn mode(&self) -> Mode {
        self.objective.mode()
    }

    pub fn no_edge_policy(&self) -> NoEdgePolicy {
        self.objective.no_edge_policy()
    }

    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    pub fn has_path(&self) -> bool {
        self.path.is_some()
    }
}
