use crate::{input::cell::Cell, matrix::Matrix, weight::Weight};

pub const INF: Weight = f64::INFINITY;

pub fn cells(rows: &[&[&str]]) -> Vec<Vec<Cell>> {
    rows.iter()
        .map(|row| row.iter().map(|&cell| Cell::from(cell)).collect())
        .collect()
}

pub fn matrix(rows: &[&[Weight]]) -> Matrix {
    Matrix::from_rows(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
}
