use tracing::instrument;

use crate::{
    error::{InputError, ShapeError, ValueError},
    input::cell::{Cell, CellValue},
    matrix::{Matrix, square_dimension},
    objective::Objective,
};

/// Turns raw cells into a canonical matrix for `objective`.
///
/// The shape is validated before any cell, so a ragged grid always reports a
/// [`ShapeError`] even if it also holds invalid values. Absent cells become
/// the objective's no-edge value.
#[instrument(skip_all, level = "debug")]
pub fn normalize(
    rows: &[Vec<Cell>],
    objective: &Objective,
    max_vertices: Option<usize>,
) -> Result<Matrix, InputError> {
    let num_vertices = square_dimension(rows.iter().map(Vec::len))?;

    if let Some(limit) = max_vertices.filter(|&limit| num_vertices > limit) {
        return Err(ShapeError::TooManyVertices {
            found: num_vertices,
            limit,
        }
        .into());
    }

    let mut matrix = Matrix::filled(num_vertices, objective.no_edge())?;
    for (i, row) in rows.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            match cell.parse() {
                Some(CellValue::Weight(weight)) => matrix.set_weight(i, j, weight),
                Some(CellValue::Absent) => {}
                None => {
                    return Err(ValueError {
                        row: i + 1,
                        column: j + 1,
                        value: cell.to_string(),
                    }
                    .into());
                }
            }
        }
    }

    Ok(matrix)
}
