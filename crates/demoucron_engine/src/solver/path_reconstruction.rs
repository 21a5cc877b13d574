use tracing::{debug, instrument, warn};

use crate::{
    matrix::Matrix,
    objective::Objective,
    solver::{path::Path, step_trace::StepTrace},
    vertex::VertexIdx,
};

/// Longest walk the trace decomposition will emit before giving up. Only
/// inputs with negative cycles (minimize) or positive cycles (maximize) come
/// close to it.
const MAX_TRACE_WALK_FACTOR: usize = 4;

/// Rebuilds the optimal route from `source` to `target`.
///
/// The route is first bisected on the relaxed matrix: a segment `(i, j)` is
/// split on the lowest vertex `k` for which `D[i][k]` combined with `D[k][j]`
/// gives exactly `D[i][j]`, and a segment without such a `k` is a direct edge
/// of the input. Segments live on an explicit stack and the left half is
/// resolved first, so vertices come out in order. A vertex already placed on
/// the route is never a split point again, which bounds the work to `n - 2`
/// splits.
///
/// Zero-weight cycles can make bisection pick a split that leaves a segment
/// with no input edge. The route is then replayed from the step trace
/// instead, which always decomposes into input edges.
///
/// Returns `None` when the target is unreachable.
#[instrument(skip(trace, objective), level = "debug")]
pub fn reconstruct_path(
    trace: &StepTrace,
    objective: &Objective,
    source: VertexIdx,
    target: VertexIdx,
) -> Option<Path> {
    if source == target {
        return Some(Path::new(vec![source]));
    }

    let relaxed = trace.final_matrix();
    if objective.is_no_edge(relaxed.weight(source.get(), target.get())) {
        return None;
    }

    bisect(trace, objective, source.get(), target.get())
        .or_else(|| {
            debug!("bisection reached a segment without an input edge, replaying the trace");
            replay_trace(trace, objective, source.get(), target.get())
        })
        .map(Path::new)
}

fn bisect(
    trace: &StepTrace,
    objective: &Objective,
    source: usize,
    target: usize,
) -> Option<Vec<VertexIdx>> {
    let relaxed = trace.final_matrix();
    let input = trace.initial();

    let mut on_path = vec![false; relaxed.num_vertices()];
    on_path[source] = true;
    on_path[target] = true;

    let mut vertices = vec![VertexIdx::new(source)];
    let mut segments = vec![(source, target)];

    while let Some((from, to)) = segments.pop() {
        match find_split(relaxed, objective, from, to, &on_path) {
            Some(k) => {
                on_path[k] = true;
                segments.push((k, to));
                segments.push((from, k));
            }
            None => {
                if !is_input_edge(input, relaxed, objective, from, to) {
                    return None;
                }

                vertices.push(VertexIdx::new(to));
            }
        }
    }

    Some(vertices)
}

fn find_split(
    relaxed: &Matrix,
    objective: &Objective,
    from: usize,
    to: usize,
    on_path: &[bool],
) -> Option<usize> {
    let expected = relaxed.weight(from, to);

    (0..relaxed.num_vertices())
        .filter(|&k| k != from && k != to && !on_path[k])
        .find(|&k| {
            let via_in = relaxed.weight(from, k);
            let via_out = relaxed.weight(k, to);
            !objective.is_no_edge(via_in)
                && !objective.is_no_edge(via_out)
                && objective.combine(via_in, via_out) == Some(expected)
        })
}

fn is_input_edge(
    input: &Matrix,
    relaxed: &Matrix,
    objective: &Objective,
    from: usize,
    to: usize,
) -> bool {
    let direct = input.weight(from, to);
    !objective.is_no_edge(direct) && direct.to_bits() == relaxed.weight(from, to).to_bits()
}

/// Walks the trace backwards: a segment whose weight changed at step `s` was
/// improved through pivot `s - 1`, and both halves are resolved against the
/// previous step. Step 0 segments are input edges.
fn replay_trace(
    trace: &StepTrace,
    objective: &Objective,
    source: usize,
    target: usize,
) -> Option<Vec<VertexIdx>> {
    let snapshots = trace.snapshots();
    let max_edges = MAX_TRACE_WALK_FACTOR * snapshots[0].num_vertices();

    let mut vertices = vec![VertexIdx::new(source)];
    let mut segments = vec![(source, target, snapshots.len() - 1)];

    while let Some((from, to, mut step)) = segments.pop() {
        while step > 0
            && snapshots[step].weight(from, to).to_bits()
                == snapshots[step - 1].weight(from, to).to_bits()
        {
            step -= 1;
        }

        if step == 0 {
            if objective.is_no_edge(snapshots[0].weight(from, to)) || vertices.len() > max_edges {
                warn!(
                    from = from + 1,
                    to = to + 1,
                    "relaxed weight does not decompose into input edges"
                );
                return None;
            }

            vertices.push(VertexIdx::new(to));
        } else {
            let pivot = step - 1;
            segments.push((pivot, to, step - 1));
            segments.push((from, pivot, step - 1));
        }
    }

    Some(vertices)
}
