use crate::{matrix::Matrix, objective::Objective, vertex::VertexIdx, weight::Weight};

/// An ordered list of vertices from the source to the target, both included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    vertices: Vec<VertexIdx>,
}

impl Path {
    pub fn new(vertices: Vec<VertexIdx>) -> Self {
        debug_assert!(!vertices.is_empty());
        Path { vertices }
    }

    pub fn vertices(&self) -> &[VertexIdx] {
        &self.vertices
    }

    pub fn one_based(&self) -> Vec<usize> {
        self.vertices.iter().map(VertexIdx::one_based).collect()
    }

    pub fn source(&self) -> VertexIdx {
        self.vertices[0]
    }

    pub fn target(&self) -> VertexIdx {
        self.vertices[self.vertices.len() - 1]
    }

    pub fn num_edges(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn edges(&self) -> impl Iterator<Item = (VertexIdx, VertexIdx)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Combines the weights of consecutive edges read from `matrix`, usually
    /// the unrelaxed input. `None` if an edge is missing. A single-vertex path
    /// weighs its self-loop.
    pub fn total_weight(&self, matrix: &Matrix, objective: &Objective) -> Option<Weight> {
        if self.num_edges() == 0 {
            let vertex = self.source().get();
            return Some(matrix.weight(vertex, vertex));
        }

        let mut total: Option<Weight> = None;
        for (from, to) in self.edges() {
            let weight = matrix.weight(from.get(), to.get());
            if objective.is_no_edge(weight) {
                return None;
            }

            total = Some(match total {
                Some(total) => objective.combine(total, weight)?,
                None => weight,
            });
        }

        total
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vertices = self
            .vertices
            .iter()
            .map(VertexIdx::to_string)
            .collect::<Vec<_>>();
        write!(f, "{}", vertices.join(" -> "))
    }
}
