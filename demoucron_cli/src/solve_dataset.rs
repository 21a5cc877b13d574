use std::path::{Path, PathBuf};

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use demoucron_engine::{
    json::types::JsonSolution,
    objective::NoEdgePolicy,
    solver::solver_params::{DEFAULT_MAX_VERTICES, SolverParams},
    weight::DisplayWeight,
};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    file_utils::{read_request, request_files},
    solve::solver_params,
};

#[derive(Args)]
pub struct SolveDatasetArgs {
    /// Folder of JSON requests, searched recursively
    #[arg(short, long)]
    dataset: PathBuf,

    /// Missing-edge convention for requests that do not set one
    #[arg(long, env = "DEMOUCRON_MAX_NO_EDGE")]
    no_edge: Option<NoEdgePolicy>,

    /// Largest accepted number of vertices, 0 for no limit
    #[arg(long, env = "DEMOUCRON_MAX_VERTICES", default_value_t = DEFAULT_MAX_VERTICES)]
    max_vertices: usize,

    /// Writes every solution to this JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
pub struct DatasetEntry {
    file: PathBuf,
    #[serde(flatten)]
    outcome: DatasetOutcome,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum DatasetOutcome {
    Solved(Box<JsonSolution>),
    Failed { error: String },
}

pub fn run(args: SolveDatasetArgs) -> anyhow::Result<()> {
    let files = request_files(&args.dataset)?;
    info!("Solving {} requests from {}", files.len(), args.dataset.display());

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:40} {pos}/{len} {msg}",
    )?);

    let entries = solve_files(
        &files,
        solver_params(args.no_edge, args.max_vertices),
        &progress,
    );
    progress.finish_and_clear();

    println!("{}", summary_table(&entries));

    let failures = entries
        .iter()
        .filter(|entry| matches!(entry.outcome, DatasetOutcome::Failed { .. }))
        .count();
    info!("{} solved, {} failed", entries.len() - failures, failures);

    if let Some(output) = args.output {
        std::fs::write(&output, serde_json::to_string_pretty(&entries)?)?;
        info!("Solutions written to {}", output.display());
    }

    Ok(())
}

/// Solves every file in parallel, a failing file does not stop the others.
pub fn solve_files(
    files: &[PathBuf],
    params: SolverParams,
    progress: &ProgressBar,
) -> Vec<DatasetEntry> {
    files
        .par_iter()
        .map(|file| {
            let outcome = match solve_file(file, params) {
                Ok(solution) => DatasetOutcome::Solved(Box::new(solution)),
                Err(err) => {
                    warn!("{}: {err:#}", file.display());
                    DatasetOutcome::Failed {
                        error: format!("{err:#}"),
                    }
                }
            };
            progress.inc(1);

            DatasetEntry {
                file: file.clone(),
                outcome,
            }
        })
        .collect()
}

fn solve_file(file: &Path, params: SolverParams) -> anyhow::Result<JsonSolution> {
    let request = read_request(file)?;
    let solution = request.solve(params)?;
    Ok(JsonSolution::from(&solution))
}

fn summary_table(entries: &[DatasetEntry]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["File", "n", "Mode", "Cost", "Path"]);

    for entry in entries {
        let file = entry.file.display().to_string();
        let row = match &entry.outcome {
            DatasetOutcome::Solved(solution) => vec![
                file,
                solution.n.to_string(),
                solution.mode.to_string(),
                DisplayWeight(solution.cost.into()).to_string(),
                solution
                    .path
                    .as_ref()
                    .map(|path| {
                        path.iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join(" -> ")
                    })
                    .unwrap_or_else(|| "-".to_string()),
            ],
            DatasetOutcome::Failed { error } => vec![
                file,
                "-".to_string(),
                "-".to_string(),
                "-".to_string(),
                error.clone(),
            ],
        };
        table.add_row(row);
    }

    table
}
