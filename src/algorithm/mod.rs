//! # Algorithms
//!
//! All methods build a tableau from a `LinearProgram`, and then hand it to the same pivoting
//! engine. They differ in how a first basic feasible solution is found.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithm::config::{SolverConfig, UnknownNameError};
use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::SolveResult;

pub mod config;
pub mod strategy;
pub mod tableau;
pub mod standard;
pub mod big_m;
pub mod two_phase;
pub(crate) mod utilities;

pub(crate) mod simplex;
pub(crate) mod extract;

/// Variant of the Simplex Method.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Slack variables form the initial basis. Only applicable when all constraints are `<=` with
    /// a nonnegative right hand side; any `>=` or `=` constraint is rejected.
    #[serde(rename = "standard", alias = "simplex", alias = "simplexe")]
    Standard,
    /// Artificial variables with a large penalty in the objective function.
    #[serde(rename = "big-m", alias = "bigm", alias = "big_m")]
    BigM,
    /// Artificial variables, driven to zero in a separate first phase.
    #[serde(rename = "two-phase", alias = "two_phase", alias = "deux-phases")]
    TwoPhase,
}

impl Method {
    /// All methods, in the order in which they are usually presented.
    pub const ALL: [Self; 3] = [Self::Standard, Self::BigM, Self::TwoPhase];

    /// Solve a linear program using this method.
    ///
    /// # Errors
    ///
    /// Only the standard method can fail, when the problem doesn't have an obvious starting basis.
    pub fn solve(
        self,
        problem: &LinearProgram,
        config: &SolverConfig,
    ) -> Result<SolveResult, SolveError> {
        match self {
            Self::Standard => standard::solve(problem, config),
            Self::BigM => Ok(big_m::solve(problem, config)),
            Self::TwoPhase => Ok(two_phase::solve(problem, config)),
        }
    }
}

impl FromStr for Method {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" | "simplex" | "simplexe" => Ok(Self::Standard),
            "big-m" | "bigm" | "big_m" => Ok(Self::BigM),
            "two-phase" | "two_phase" | "deux-phases" => Ok(Self::TwoPhase),
            _ => Err(UnknownNameError::new("method", s)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Standard => "standard",
            Self::BigM => "big-m",
            Self::TwoPhase => "two-phase",
        })
    }
}

/// A method could not be applied to a problem.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SolveError {
    /// The slack variables don't form a feasible basis.
    #[error(
        "constraint {constraint} ({relation} {rhs}) has no feasible slack variable, use the big-m \
        or two-phase method"
    )]
    InfeasibleStart {
        /// Number of the constraint, counting from 1.
        constraint: usize,
        #[allow(missing_docs)]
        relation: ConstraintType,
        #[allow(missing_docs)]
        rhs: f64,
    },
}

/// How a single run of the pivoting engine ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum OptimizationResult {
    /// No column has a negative relative cost.
    FiniteOptimum,
    /// A column with negative relative cost has no positive entries.
    Unbounded,
    /// The maximum number of pivots was reached.
    IterationLimit,
}
