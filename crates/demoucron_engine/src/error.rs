use thiserror::Error;

/// The matrix cannot be used as an adjacency matrix. Rows are reported
/// one-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Matrix is empty")]
    Empty,
    #[error("Matrix is not square: row {row} has {found} columns, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Matrix has {found} vertices, the limit is {limit}")]
    TooManyVertices { found: usize, limit: usize },
}

/// A cell is neither a number nor a recognized token. Rows and columns are
/// reported one-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value {value:?} at row {row}, column {column}")]
pub struct ValueError {
    pub row: usize,
    pub column: usize,
    pub value: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Value(#[from] ValueError),
}
