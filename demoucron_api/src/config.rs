use anyhow::Context;
use demoucron_engine::{
    objective::NoEdgePolicy,
    solver::solver_params::{DEFAULT_MAX_VERTICES, SolverParams},
};

const BIND_ADDRESS_ENV_VAR: &str = "DEMOUCRON_BIND_ADDRESS";
const MAX_VERTICES_ENV_VAR: &str = "DEMOUCRON_MAX_VERTICES";
const MAX_NO_EDGE_ENV_VAR: &str = "DEMOUCRON_MAX_NO_EDGE";

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5001";

#[derive(Debug, PartialEq)]
pub struct ApiConfig {
    pub bind_address: String,
    pub solver_params: SolverParams,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_address =
            lookup(BIND_ADDRESS_ENV_VAR).unwrap_or_else(|| String::from(DEFAULT_BIND_ADDRESS));

        // 0 lifts the limit.
        let max_vertices = match lookup(MAX_VERTICES_ENV_VAR) {
            Some(value) => match value
                .trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid {MAX_VERTICES_ENV_VAR}: {value}"))?
            {
                0 => None,
                limit => Some(limit),
            },
            None => Some(DEFAULT_MAX_VERTICES),
        };

        let no_edge = match lookup(MAX_NO_EDGE_ENV_VAR) {
            Some(value) => value
                .parse::<NoEdgePolicy>()
                .with_context(|| format!("Invalid {MAX_NO_EDGE_ENV_VAR}"))?,
            None => NoEdgePolicy::default(),
        };

        Ok(ApiConfig {
            bind_address,
            solver_params: SolverParams {
                no_edge,
                max_vertices,
            },
        })
    }
}
