use crate::matrix::Matrix;

/// Every matrix state of a run: index 0 is the normalized input, index `k`
/// the matrix after vertex `k` has been used as an intermediate.
#[derive(Clone, Debug, PartialEq)]
pub struct StepTrace {
    snapshots: Vec<Matrix>,
}

impl StepTrace {
    pub(crate) fn new(snapshots: Vec<Matrix>) -> Self {
        debug_assert!(!snapshots.is_empty());
        debug_assert_eq!(snapshots.len(), snapshots[0].num_vertices() + 1);
        StepTrace { snapshots }
    }

    pub fn initial(&self) -> &Matrix {
        &self.snapshots[0]
    }

    pub fn final_matrix(&self) -> &Matrix {
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn step(&self, k: usize) -> Option<&Matrix> {
        self.snapshots.get(k)
    }

    pub fn snapshots(&self) -> &[Matrix] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Matrix> {
        self.snapshots.iter()
    }
}
