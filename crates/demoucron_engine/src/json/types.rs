use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::InputError,
    input::cell::Cell,
    matrix::Matrix,
    objective::{Mode, NoEdgePolicy},
    solver::{demoucron::DemoucronSolver, solution::Solution, solver_params::SolverParams},
    weight::Weight,
};

#[derive(Serialize, Deserialize, JsonSchema, Clone, Debug)]
#[serde(rename = "ProcessRequest")]
pub struct JsonProcessRequest {
    /// Square grid of numbers, `"inf"`, `"-inf"`, `"infinity"`, `"-infinity"`,
    /// numeric strings, or `null`/`""`/`"none"` for a missing edge.
    pub matrix: Vec<Vec<serde_json::Value>>,
    #[serde(default)]
    pub mode: Mode,
    /// Missing-edge convention for `max` mode, the server default applies
    /// when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_edge: Option<NoEdgePolicy>,
}

impl JsonProcessRequest {
    pub fn cells(&self) -> Vec<Vec<Cell>> {
        self.matrix
            .iter()
            .map(|row| row.iter().map(Cell::from).collect())
            .collect()
    }

    /// Solves the request, the request's `no_edge` overrides `params`.
    pub fn solve(&self, params: SolverParams) -> Result<Solution, InputError> {
        let params = SolverParams {
            no_edge: self.no_edge.unwrap_or(params.no_edge),
            ..params
        };

        DemoucronSolver::new(params).solve(&self.cells(), self.mode)
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Copy, Clone, Debug, PartialEq, Eq)]
pub enum JsonInfinity {
    #[serde(rename = "inf")]
    Positive,
    #[serde(rename = "-inf")]
    Negative,
}

/// A weight on the wire: a JSON number, or a token for the infinities.
#[derive(Serialize, Deserialize, JsonSchema, Copy, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum JsonWeight {
    Finite(f64),
    Infinite(JsonInfinity),
}

impl From<Weight> for JsonWeight {
    fn from(value: Weight) -> Self {
        if value == f64::INFINITY {
            JsonWeight::Infinite(JsonInfinity::Positive)
        } else if value == f64::NEG_INFINITY {
            JsonWeight::Infinite(JsonInfinity::Negative)
        } else {
            JsonWeight::Finite(value)
        }
    }
}

impl From<JsonWeight> for Weight {
    fn from(value: JsonWeight) -> Self {
        match value {
            JsonWeight::Finite(value) => value,
            JsonWeight::Infinite(JsonInfinity::Positive) => f64::INFINITY,
            JsonWeight::Infinite(JsonInfinity::Negative) => f64::NEG_INFINITY,
        }
    }
}

pub type JsonMatrix = Vec<Vec<JsonWeight>>;

fn json_matrix(matrix: &Matrix) -> JsonMatrix {
    matrix
        .rows()
        .map(|row| row.iter().copied().map(JsonWeight::from).collect())
        .collect()
}

#[derive(Serialize, Deserialize, JsonSchema, Clone, Debug, PartialEq)]
#[serde(rename = "Solution")]
pub struct JsonSolution {
    /// `n + 1` matrices, index 0 is the input and index `k` the matrix after
    /// vertex `k` was considered as an intermediate.
    pub matrices: Vec<JsonMatrix>,
    pub final_matrix: JsonMatrix,
    /// One-based vertices from the first to the last vertex, `null` when the
    /// last vertex is unreachable.
    pub path: Option<Vec<usize>>,
    pub cost: JsonWeight,
    pub n: usize,
    pub mode: Mode,
    pub no_edge: NoEdgePolicy,
}

impl From<&Solution> for JsonSolution {
    fn from(solution: &Solution) -> Self {
        JsonSolution {
            matrices: solution.matrices().iter().map(json_matrix).collect(),
            final_matrix: json_matrix(solution.final_matrix()),
            path: solution.path().map(|path| path.one_based()),
            cost: solution.cost().into(),
            n: solution.num_vertices(),
            mode: solution.mode(),
            no_edge: solution.no_edge_policy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ValueError;

    #[test]
    fn test_request_defaults_to_min() {
        let request: JsonProcessRequest =
            serde_json::from_value(json!({ "matrix": [[0, 1], ["inf", 0]] })).unwrap();

        assert_eq!(request.mode, Mode::Minimize);
        assert_eq!(request.no_edge, None);
    }

    #[test]
    fn test_request_overrides_no_edge_policy() {
        let request: JsonProcessRequest = serde_json::from_value(json!({
            "matrix": [[0, 5], [0, 0]],
            "mode": "max",
            "no_edge": "zero"
        }))
        .unwrap();

        let solution = request.solve(SolverParams::default()).unwrap();

        assert_eq!(solution.no_edge_policy(), NoEdgePolicy::Zero);
        assert_eq!(solution.cost(), 5.0);
    }

    #[test]
    fn test_request_reports_invalid_cells() {
        let request: JsonProcessRequest =
            serde_json::from_value(json!({ "matrix": [[0, true], [1, 0]] })).unwrap();

        assert_eq!(
            request.solve(SolverParams::default()).unwrap_err(),
            InputError::Value(ValueError {
                row: 1,
                column: 2,
                value: String::from("true")
            })
        );
    }

    #[test]
    fn test_solution_json() {
        let request: JsonProcessRequest = serde_json::from_value(json!({
            "matrix": [[0, null], [null, 0]],
        }))
        .unwrap();
        let solution = request.solve(SolverParams::default()).unwrap();

        let json = serde_json::to_value(JsonSolution::from(&solution)).unwrap();

        assert_eq!(
            json,
            json!({
                "matrices": [
                    [[0.0, "inf"], ["inf", 0.0]],
                    [[0.0, "inf"], ["inf", 0.0]],
                    [[0.0, "inf"], ["inf", 0.0]],
                ],
                "final_matrix": [[0.0, "inf"], ["inf", 0.0]],
                "path": null,
                "cost": "inf",
                "n": 2,
                "mode": "min",
                "no_edge": "negative_infinity",
            })
        );
    }

    #[test]
    fn test_json_weight_round_trip() {
        let weight: JsonWeight = serde_json::from_value(json!("-inf")).unwrap();
        assert_eq!(Weight::from(weight), f64::NEG_INFINITY);

        let weight: JsonWeight = serde_json::from_value(json!(2.5)).unwrap();
        assert_eq!(Weight::from(weight), 2.5);
    }
}
