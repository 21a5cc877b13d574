use demoucron_engine::solver::solver_params::SolverParams;
use jiff::Timestamp;

pub struct AppState {
    pub solver_params: SolverParams,
    pub started_at: Timestamp,
}

impl AppState {
    pub fn new(solver_params: SolverParams) -> Self {
        AppState {
            solver_params,
            started_at: Timestamp::now(),
        }
    }
}
