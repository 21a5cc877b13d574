use comfy_table::{Table, presets::UTF8_FULL};
use demoucron_engine::{matrix::Matrix, solver::solution::Solution, weight::DisplayWeight};

/// Renders a matrix with one-based vertex labels on both axes.
pub fn matrix_table(matrix: &Matrix) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec![String::new()];
    header.extend((1..=matrix.num_vertices()).map(|vertex| vertex.to_string()));
    table.set_header(header);

    for (from, row) in matrix.rows().enumerate() {
        let mut cells = vec![(from + 1).to_string()];
        cells.extend(row.iter().map(|&weight| DisplayWeight(weight).to_string()));
        table.add_row(cells);
    }

    table
}

pub fn describe_path(solution: &Solution) -> String {
    let cost = DisplayWeight(solution.cost());
    match solution.path() {
        Some(path) => format!("Path: {path} (cost {cost})"),
        None => format!(
            "No path from 1 to {} (cost {cost})",
            solution.num_vertices()
        ),
    }
}

#[cfg(test)]
mod tests {
    use demoucron_engine::{
        objective::Mode, solver::demoucron::DemoucronSolver,
    };

    use super::*;

    #[test]
    fn test_matrix_table() {
        let matrix =
            Matrix::from_rows(vec![vec![0.0, 2.5], vec![f64::INFINITY, 0.0]]).unwrap();

        let rendered = matrix_table(&matrix).to_string();

        assert!(rendered.contains("2.5"));
        assert!(rendered.contains("inf"));
        assert_eq!(matrix_table(&matrix).row_iter().count(), 2);
    }

    #[test]
    fn test_describe_path() {
        let solver = DemoucronSolver::default();
        let reachable = solver.solve_matrix(
            Matrix::from_rows(vec![
                vec![0.0, 1.0, 5.0],
                vec![f64::INFINITY, 0.0, 1.0],
                vec![f64::INFINITY, f64::INFINITY, 0.0],
            ])
            .unwrap(),
            Mode::Minimize,
        );
        let unreachable = solver.solve_matrix(
            Matrix::from_rows(vec![vec![0.0, f64::INFINITY], vec![1.0, 0.0]]).unwrap(),
            Mode::Minimize,
        );

        assert_eq!(describe_path(&reachable), "Path: 1 -> 2 -> 3 (cost 2)");
        assert_eq!(describe_path(&unreachable), "No path from 1 to 2 (cost inf)");
    }
}
