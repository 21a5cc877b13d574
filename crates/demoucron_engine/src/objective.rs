use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::weight::Weight;

#[derive(Deserialize, Serialize, JsonSchema, Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Minimum-cost paths, absent edges are `+inf`.
    #[default]
    #[serde(rename = "min", alias = "minimize")]
    Minimize,
    /// Maximum-value paths, absent edges follow the [`NoEdgePolicy`].
    #[serde(rename = "max", alias = "maximize")]
    Maximize,
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Mode::Minimize => "min",
                Mode::Maximize => "max",
            }
        )
    }
}

/// Which value marks a missing edge in [`Mode::Maximize`]. Minimize always
/// uses `+inf`.
#[derive(Deserialize, Serialize, JsonSchema, Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum NoEdgePolicy {
    #[default]
    NegativeInfinity,
    /// Off-diagonal zeros are missing edges, so a zero-weight edge cannot be
    /// expressed. The same holds for computed routes: a route whose weights
    /// add up to exactly `0` is never recorded and reads as no path, while a
    /// negative one is kept.
    Zero,
}

impl Display for NoEdgePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                NoEdgePolicy::NegativeInfinity => "negative_infinity",
                NoEdgePolicy::Zero => "zero",
            }
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown {kind} {value:?}")]
pub struct ParseObjectiveError {
    kind: &'static str,
    value: String,
}

impl FromStr for Mode {
    type Err = ParseObjectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "min" | "minimize" => Ok(Mode::Minimize),
            "max" | "maximize" => Ok(Mode::Maximize),
            _ => Err(ParseObjectiveError {
                kind: "mode",
                value: s.to_owned(),
            }),
        }
    }
}

impl FromStr for NoEdgePolicy {
    type Err = ParseObjectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "negative_infinity" | "neg_inf" | "_inf" => Ok(NoEdgePolicy::NegativeInfinity),
            "zero" | "0" => Ok(NoEdgePolicy::Zero),
            _ => Err(ParseObjectiveError {
                kind: "no-edge policy",
                value: s.to_owned(),
            }),
        }
    }
}

/// Mode-dependent arithmetic shared by normalization, relaxation and path
/// reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Objective {
    mode: Mode,
    no_edge_policy: NoEdgePolicy,
}

impl Objective {
    pub fn new(mode: Mode, no_edge_policy: NoEdgePolicy) -> Self {
        Objective {
            mode,
            no_edge_policy,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn no_edge_policy(&self) -> NoEdgePolicy {
        self.no_edge_policy
    }

    /// The value written for an absent cell.
    pub fn no_edge(&self) -> Weight {
        match (self.mode, self.no_edge_policy) {
            (Mode::Minimize, _) => f64::INFINITY,
            (Mode::Maximize, NoEdgePolicy::NegativeInfinity) => f64::NEG_INFINITY,
            (Mode::Maximize, NoEdgePolicy::Zero) => 0.0,
        }
    }

    /// Only meaningful for off-diagonal cells: the diagonal holds self-loops.
    #[inline(always)]
    pub fn is_no_edge(&self, weight: Weight) -> bool {
        match self.mode {
            Mode::Minimize => weight == f64::INFINITY,
            Mode::Maximize => {
                weight == f64::NEG_INFINITY
                    || (self.no_edge_policy == NoEdgePolicy::Zero && weight == 0.0)
            }
        }
    }

    /// Weight of the route `i -> k -> j` given `D[i][k]` and `D[k][j]`.
    ///
    /// In Minimize mode `+inf` is absorbing. In Maximize mode a missing edge
    /// disqualifies the intermediate vertex, so `None` is returned.
    #[inline(always)]
    pub fn combine(&self, via_in: Weight, via_out: Weight) -> Option<Weight> {
        let combined = match self.mode {
            Mode::Minimize => {
                if via_in == f64::INFINITY || via_out == f64::INFINITY {
                    return Some(f64::INFINITY);
                }
                via_in + via_out
            }
            Mode::Maximize => {
                if self.is_no_edge(via_in) || self.is_no_edge(via_out) {
                    return None;
                }
                via_in + via_out
            }
        };

        if combined.is_nan() {
            None
        } else {
            Some(combined)
        }
    }

    /// Strict improvement, a tie keeps the current value.
    #[inline(always)]
    pub fn improves(&self, candidate: Weight, current: Weight) -> bool {
        match self.mode {
            Mode::Minimize => candidate < current,
            Mode::Maximize => {
                !self.is_no_edge(candidate) && (self.is_no_edge(current) || candidate > current)
            }
        }
    }

    /// The preferred of two values under this objective.
    pub fn better(&self, a: Weight, b: Weight) -> Weight {
        if self.improves(b, a) { b } else { a }
    }
}
