use std::path::PathBuf;

use clap::Args;
use demoucron_engine::{
    json::types::JsonSolution,
    objective::{Mode, NoEdgePolicy},
    solver::{
        solution::Solution,
        solver_params::{DEFAULT_MAX_VERTICES, SolverParams},
    },
};
use tracing::info;

use crate::{
    file_utils::read_request,
    render::{describe_path, matrix_table},
};

#[derive(Args)]
pub struct SolveArgs {
    /// JSON request with `matrix`, `mode` and an optional `no_edge`
    #[arg(short, long)]
    input: PathBuf,

    /// Overrides the mode of the request
    #[arg(short, long)]
    mode: Option<Mode>,

    /// Missing-edge convention for `max` mode when the request sets none
    #[arg(long, env = "DEMOUCRON_MAX_NO_EDGE")]
    no_edge: Option<NoEdgePolicy>,

    /// Largest accepted number of vertices, 0 for no limit
    #[arg(long, env = "DEMOUCRON_MAX_VERTICES", default_value_t = DEFAULT_MAX_VERTICES)]
    max_vertices: usize,

    /// Print every intermediate matrix
    #[arg(long)]
    steps: bool,

    /// Print the solution as JSON
    #[arg(long)]
    json: bool,
}

pub fn solver_params(no_edge: Option<NoEdgePolicy>, max_vertices: usize) -> SolverParams {
    SolverParams {
        no_edge: no_edge.unwrap_or_default(),
        max_vertices: (max_vertices != 0).then_some(max_vertices),
    }
}

pub fn run(args: SolveArgs) -> anyhow::Result<()> {
    let mut request = read_request(&args.input)?;
    if let Some(mode) = args.mode {
        request.mode = mode;
    }

    let solution = request.solve(solver_params(args.no_edge, args.max_vertices))?;
    info!(
        n = solution.num_vertices(),
        mode = %solution.mode(),
        "Solved {}",
        args.input.display()
    );

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonSolution::from(&solution))?
        );
    } else {
        print_solution(&solution, args.steps);
    }

    Ok(())
}

fn print_solution(solution: &Solution, steps: bool) {
    if steps {
        for (step, matrix) in solution.matrices().iter().enumerate() {
            if step == 0 {
                println!("Initial matrix");
            } else {
                println!("Step {step}");
            }
            println!("{}", matrix_table(matrix));
        }
    } else {
        println!("Final matrix");
        println!("{}", matrix_table(solution.final_matrix()));
    }

    println!("{}", describe_path(solution));
}
