//! # Solver configuration
//!
//! Settings shared by all methods. Every field has a default, so a configuration can be read from
//! a partial JSON object.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::linear_program::general_form::LinearProgram;

/// Maximum number of pivots in a single pass of the algorithm, unless configured otherwise.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Settings that influence how a problem is solved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// How the entering and leaving variables are chosen.
    pub pivot_rule: PivotRuleKind,
    /// Maximum number of pivots per pass. The two-phase method can do this many pivots in each
    /// phase.
    pub max_iterations: usize,
    /// Penalty of the artificial variables in the Big-M method.
    pub big_m: BigM,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            pivot_rule: PivotRuleKind::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            big_m: BigM::default(),
        }
    }
}

impl SolverConfig {
    #[allow(missing_docs)]
    #[must_use]
    pub fn with_pivot_rule(self, pivot_rule: PivotRuleKind) -> Self {
        Self { pivot_rule, ..self }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        Self { max_iterations, ..self }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn with_big_m(self, big_m: BigM) -> Self {
        Self { big_m, ..self }
    }
}

/// Pivot rules that can be selected by name.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PivotRuleKind {
    /// Most negative relative cost enters, see `SteepestDescentAlongVariable`.
    #[default]
    Dantzig,
    /// Lowest index with negative relative cost enters, see `FirstProfitable`. Doesn't cycle.
    Bland,
}

impl FromStr for PivotRuleKind {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dantzig" => Ok(Self::Dantzig),
            "bland" => Ok(Self::Bland),
            _ => Err(UnknownNameError::new("pivot rule", s)),
        }
    }
}

impl fmt::Display for PivotRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dantzig => "dantzig",
            Self::Bland => "bland",
        })
    }
}

/// Penalty `M` on artificial variables in the Big-M method.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BigM {
    /// Always the same value.
    Fixed(f64),
    /// A multiple of the largest absolute value in the problem, but at least `minimum`.
    Scaled {
        #[allow(missing_docs)]
        factor: f64,
        #[allow(missing_docs)]
        minimum: f64,
    },
}

impl Default for BigM {
    fn default() -> Self {
        Self::Scaled { factor: 100f64, minimum: 1000f64 }
    }
}

impl BigM {
    /// The penalty to use for a specific problem.
    pub fn penalty(&self, problem: &LinearProgram) -> f64 {
        match *self {
            Self::Fixed(value) => value,
            Self::Scaled { factor, minimum } => minimum.max(factor * problem.largest_absolute_value()),
        }
    }
}

/// Either `scaled`, or a positive number.
impl FromStr for BigM {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("scaled") {
            return Ok(Self::default());
        }

        match s.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0f64 => Ok(Self::Fixed(value)),
            _ => Err(UnknownNameError::new("big-m penalty", s)),
        }
    }
}

impl fmt::Display for BigM {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => write!(f, "{}", value),
            Self::Scaled { factor, minimum } => write!(f, "max({}, {} * largest coefficient)", minimum, factor),
        }
    }
}

/// A setting was given a value that it doesn't recognize.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown {kind}: \"{name}\"")]
pub struct UnknownNameError {
    kind: &'static str,
    name: String,
}

impl UnknownNameError {
    pub(crate) fn new(kind: &'static str, name: &str) -> Self {
        Self { kind, name: name.to_string() }
    }
}
