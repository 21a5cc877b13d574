use crate::{error::ShapeError, weight::Weight};

/// Square adjacency matrix stored as a flat row-major vector.
/// The weight of the edge `from -> to` is at `from * num_vertices + to`.
///
/// Cloning copies the weights, snapshots taken with `clone` are never affected
/// by later writes.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    weights: Vec<Weight>,
    num_vertices: usize,
}

impl Matrix {
    /// A matrix always has at least one vertex, an empty one is a
    /// [`ShapeError::Empty`].
    pub fn filled(num_vertices: usize, weight: Weight) -> Result<Self, ShapeError> {
        if num_vertices == 0 {
            return Err(ShapeError::Empty);
        }

        Ok(Matrix {
            weights: vec![weight; num_vertices * num_vertices],
            num_vertices,
        })
    }

    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Result<Self, ShapeError> {
        let num_vertices = square_dimension(rows.iter().map(Vec::len))?;

        Ok(Matrix {
            weights: rows.into_iter().flatten().collect(),
            num_vertices,
        })
    }

    #[inline(always)]
    fn index(&self, from: usize, to: usize) -> usize {
        from * self.num_vertices + to
    }

    #[inline(always)]
    pub fn weight(&self, from: usize, to: usize) -> Weight {
        self.weights[self.index(from, to)]
    }

    #[inline(always)]
    pub fn set_weight(&mut self, from: usize, to: usize, weight: Weight) {
        let index = self.index(from, to);
        self.weights[index] = weight;
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn row(&self, from: usize) -> &[Weight] {
        let start = self.index(from, 0);
        &self.weights[start..start + self.num_vertices]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> {
        self.weights.chunks_exact(self.num_vertices)
    }

    pub fn diagonal(&self) -> impl Iterator<Item = Weight> + '_ {
        (0..self.num_vertices).map(|vertex| self.weight(vertex, vertex))
    }

    pub fn to_rows(&self) -> Vec<Vec<Weight>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Bitwise equality, `0.0` and `-0.0` are different.
    pub fn bit_eq(&self, other: &Matrix) -> bool {
        self.num_vertices == other.num_vertices
            && self
                .weights
                .iter()
                .zip(other.weights.iter())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

/// Checks that `row_lengths` describes a non-empty square grid and returns its
/// dimension.
pub(crate) fn square_dimension(
    row_lengths: impl ExactSizeIterator<Item = usize>,
) -> Result<usize, ShapeError> {
    let num_rows = row_lengths.len();
    if num_rows == 0 {
        return Err(ShapeError::Empty);
    }

    for (row, found) in row_lengths.enumerate() {
        if found != num_rows {
            return Err(ShapeError::NotSquare {
                row: row + 1,
                expected: num_rows,
                found,
            });
        }
    }

    Ok(num_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let matrix = Matrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 0.0]]).unwrap();

        assert_eq!(matrix.num_vertices(), 2);
        assert_eq!(matrix.weight(0, 1), 1.0);
        assert_eq!(matrix.weight(1, 0), 2.0);
        assert_eq!(matrix.row(1), &[2.0, 0.0]);
        assert_eq!(matrix.diagonal().collect::<Vec<_>>(), vec![0.0, 0.0]);
        assert_eq!(matrix.to_rows(), vec![vec![0.0, 1.0], vec![2.0, 0.0]]);
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        assert_eq!(Matrix::from_rows(vec![]), Err(ShapeError::Empty));
        assert_eq!(
            Matrix::from_rows(vec![vec![0.0, 1.0], vec![2.0]]),
            Err(ShapeError::NotSquare {
                row: 2,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Matrix::from_rows(vec![vec![0.0, 1.0, 3.0], vec![2.0, 0.0, 3.0]]),
            Err(ShapeError::NotSquare {
                row: 1,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_filled_rejects_zero_vertices() {
        assert_eq!(Matrix::filled(0, f64::INFINITY), Err(ShapeError::Empty));

        let matrix = Matrix::filled(3, f64::NEG_INFINITY).unwrap();
        assert_eq!(matrix.num_vertices(), 3);
        assert!(matrix.rows().flatten().all(|&weight| weight == f64::NEG_INFINITY));
    }

    #[test]
    fn test_clone_is_a_deep_copy() {
        let mut matrix = Matrix::filled(2, f64::INFINITY).unwrap();
        let snapshot = matrix.clone();

        matrix.set_weight(0, 1, 5.0);

        assert_eq!(snapshot.weight(0, 1), f64::INFINITY);
        assert_eq!(matrix.weight(0, 1), 5.0);
        assert!(!matrix.bit_eq(&snapshot));
    }
}
