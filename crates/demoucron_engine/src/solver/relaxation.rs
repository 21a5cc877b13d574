use tracing::{debug, instrument};

use crate::{matrix::Matrix, objective::Objective, solver::step_trace::StepTrace};

/// Runs the Demoucron relaxation: every vertex `k` in increasing order is
/// proposed as an intermediate for all pairs `(i, j)` outside row and column
/// `k`. The diagonal is never relaxed.
///
/// Row and column `k` are not written while `k` is the pivot, so the update
/// happens in place and a copy is recorded after each pivot.
#[instrument(skip_all, level = "debug", fields(n = initial.num_vertices()))]
pub fn relax(initial: Matrix, objective: &Objective) -> StepTrace {
    let n = initial.num_vertices();
    let mut snapshots = Vec::with_capacity(n + 1);
    let mut current = initial.clone();
    snapshots.push(initial);

    for k in 0..n {
        let mut improvements = 0usize;

        for i in 0..n {
            if i == k {
                continue;
            }

            let via_in = current.weight(i, k);
            // Nothing to gain through k when i cannot reach it.
            if objective.is_no_edge(via_in) {
                continue;
            }

            for j in 0..n {
                if j == k || j == i {
                    continue;
                }

                let Some(candidate) = objective.combine(via_in, current.weight(k, j)) else {
                    continue;
                };

                if objective.improves(candidate, current.weight(i, j)) {
                    current.set_weight(i, j, candidate);
                    improvements += 1;
                }
            }
        }

        debug!(pivot = k + 1, improvements, "relaxation step");
        snapshots.push(current.clone());
    }

    StepTrace::new(snapshots)
}
