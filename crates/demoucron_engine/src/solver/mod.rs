pub mod demoucron;
pub mod path;
pub mod path_reconstruction;
pub mod relaxation;
pub mod solution;
pub mod solver_params;
pub mod step_trace;
