//! # Building blocks to describe linear programs.
use std::fmt;
use std::ops::Not;

use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Enum, Serialize, Deserialize)]
pub enum ConstraintType {
    #[serde(rename = "<=")]
    Less,
    #[serde(rename = ">=")]
    Greater,
    #[serde(rename = "=")]
    Equal,
}

/// The relation that holds after multiplying both sides of a constraint by `-1`.
impl Not for ConstraintType {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Less => Self::Greater,
            Self::Greater => Self::Less,
            Self::Equal => Self::Equal,
        }
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Less => "<=",
            Self::Greater => ">=",
            Self::Equal => "=",
        })
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objective {
    #[serde(rename = "max", alias = "maximize")]
    Maximize,
    #[serde(rename = "min", alias = "minimize")]
    Minimize,
}

impl Objective {
    /// Factor that turns the objective function into a cost to be minimized.
    pub fn cost_sign(self) -> f64 {
        match self {
            Self::Maximize => -1f64,
            Self::Minimize => 1f64,
        }
    }
}

impl Not for Objective {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Maximize => Self::Minimize,
            Self::Minimize => Self::Maximize,
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Maximize => "max",
            Self::Minimize => "min",
        })
    }
}
