use tracing::{debug, instrument};

use crate::{
    error::InputError,
    input::{cell::Cell, normalize::normalize},
    matrix::Matrix,
    objective::{Mode, Objective},
    solver::{
        path_reconstruction::reconstruct_path, relaxation::relax, solution::Solution,
        solver_params::SolverParams,
    },
    vertex::VertexIdx,
};

/// All-pairs optimal paths by Demoucron's method. The solver only holds its
/// parameters, every call works on its own copy of the matrix so a single
/// instance can be shared between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoucronSolver {
    params: SolverParams,
}

impl DemoucronSolver {
    pub fn new(params: SolverParams) -> Self {
        DemoucronSolver { params }
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    pub fn objective(&self, mode: Mode) -> Objective {
        Objective::new(mode, self.params.no_edge)
    }

    /// Validates and normalizes `rows`, then solves it.
    #[instrument(skip_all, level = "debug", fields(mode = %mode))]
    pub fn solve(&self, rows: &[Vec<Cell>], mode: Mode) -> Result<Solution, InputError> {
        let objective = self.objective(mode);
        let matrix = normalize(rows, &objective, self.params.max_vertices)?;

        Ok(self.solve_normalized(matrix, objective))
    }

    /// Solves an already normalized matrix, no validation happens here.
    /// Every [`Matrix`] has at least one vertex.
    pub fn solve_matrix(&self, matrix: Matrix, mode: Mode) -> Solution {
        self.solve_normalized(matrix, self.objective(mode))
    }

    fn solve_normalized(&self, matrix: Matrix, objective: Objective) -> Solution {
        let n = matrix.num_vertices();
        let trace = relax(matrix, &objective);
        let path = reconstruct_path(
            &trace,
            &objective,
            VertexIdx::new(0),
            VertexIdx::new(n - 1),
        );

        let solution = Solution::new(trace, path, objective);
        debug!(
            n,
            cost = solution.cost(),
            has_path = solution.has_path(),
            "solved"
        );

        solution
    }
}

pub fn solve(
    rows: &[Vec<Cell>],
    mode: Mode,
    params: SolverParams,
) -> Result<Solution, InputError> {
    DemoucronSolver::new(params).solve(rows, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ShapeError,
        objective::NoEdgePolicy,
        test_utils::{INF, cells, matrix},
    };

    #[test]
    fn test_solve_minimize() {
        let rows = cells(&[&["0", "1", "4"], &["inf", "0", "2"], &["inf", "inf", "0"]]);

        let solution = solve(&rows, Mode::Minimize, SolverParams::default()).unwrap();

        assert_eq!(solution.num_vertices(), 3);
        assert_eq!(solution.matrices().len(), 4);
        assert_eq!(solution.cost(), 3.0);
        assert_eq!(solution.path().map(|path| path.one_based()), Some(vec![1, 2, 3]));
        assert_eq!(solution.mode(), Mode::Minimize);
    }

    #[test]
    fn test_solve_rejects_invalid_input() {
        let rows = cells(&[&["0", "1"]]);

        assert_eq!(
            solve(&rows, Mode::Minimize, SolverParams::default()),
            Err(InputError::Shape(ShapeError::NotSquare {
                row: 1,
                expected: 1,
                found: 2
            }))
        );
    }

    #[test]
    fn test_solve_matrix_uses_the_configured_policy() {
        let solver = DemoucronSolver::new(SolverParams {
            no_edge: NoEdgePolicy::Zero,
            ..SolverParams::default()
        });

        let solution = solver.solve_matrix(matrix(&[&[0.0, 0.0], &[0.0, 0.0]]), Mode::Maximize);

        assert_eq!(solution.path(), None);
        assert_eq!(solution.cost(), 0.0);
        assert_eq!(solution.no_edge_policy(), NoEdgePolicy::Zero);
    }

    #[test]
    fn test_solve_without_path_reports_sentinel() {
        let solver = DemoucronSolver::default();

        let solution = solver.solve_matrix(matrix(&[&[0.0, INF], &[INF, 0.0]]), Mode::Minimize);

        assert!(!solution.has_path());
        assert_eq!(solution.cost(), INF);
    }

    #[test]
    fn test_empty_matrix_never_reaches_the_solver() {
        assert_eq!(
            solve(&[], Mode::Minimize, SolverParams::default()),
            Err(InputError::Shape(ShapeError::Empty))
        );
        assert_eq!(Matrix::filled(0, INF), Err(ShapeError::Empty));

        let single = Matrix::filled(1, 0.0).unwrap();
        let solution = DemoucronSolver::default().solve_matrix(single, Mode::Minimize);

        assert_eq!(solution.path().map(|path| path.one_based()), Some(vec![1]));
        assert_eq!(solution.cost(), 0.0);
    }

    #[test]
    fn test_zero_policy_drops_routes_adding_up_to_zero() {
        let solver = DemoucronSolver::new(SolverParams {
            no_edge: NoEdgePolicy::Zero,
            ..SolverParams::default()
        });

        let zero_sum = solver.solve_matrix(
            matrix(&[&[0.0, 3.0, 0.0], &[0.0, 0.0, -3.0], &[0.0, 0.0, 0.0]]),
            Mode::Maximize,
        );
        let negative_sum = solver.solve_matrix(
            matrix(&[&[0.0, 3.0, 0.0], &[0.0, 0.0, -5.0], &[0.0, 0.0, 0.0]]),
            Mode::Maximize,
        );

        assert_eq!(zero_sum.path(), None);
        assert_eq!(zero_sum.cost(), 0.0);
        assert_eq!(
            negative_sum.path().map(|path| path.one_based()),
            Some(vec![1, 2, 3])
        );
        assert_eq!(negative_sum.cost(), -2.0);
    }
}
