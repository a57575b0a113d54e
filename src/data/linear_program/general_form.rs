//! # Linear programs in "general form"
//!
//! A linear program in general form has nonnegative variables, a linear objective function to
//! either maximize or minimize and any mix of `<=`, `>=` and `=` constraints. This is the
//! representation that is handed to the algorithms, which each derive their own tableau from it.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::linear_program::elements::{ConstraintType, Objective};

/// A single linear (in)equality `coefficients · x <relation> rhs`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// One coefficient per variable.
    pub coefficients: Vec<f64>,
    /// Type of (in)equality.
    #[serde(rename = "type")]
    pub relation: ConstraintType,
    /// Right hand side.
    pub rhs: f64,
}

impl Constraint {
    /// Create a new constraint.
    pub fn new(coefficients: Vec<f64>, relation: ConstraintType, rhs: f64) -> Self {
        Self { coefficients, relation, rhs }
    }

    /// Value of the left hand side at a point.
    pub fn lhs(&self, x: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), self.coefficients.len());

        self.coefficients.iter().zip(x).map(|(a, x)| a * x).sum()
    }

    /// Whether a point satisfies this constraint, allowing a violation of at most `tolerance`.
    pub fn is_satisfied_by(&self, x: &[f64], tolerance: f64) -> bool {
        let lhs = self.lhs(x);
        match self.relation {
            ConstraintType::Less => lhs <= self.rhs + tolerance,
            ConstraintType::Greater => lhs >= self.rhs - tolerance,
            ConstraintType::Equal => (lhs - self.rhs).abs() <= tolerance,
        }
    }

    /// The same constraint, multiplied by `-1` if the right hand side is negative.
    ///
    /// The relation is flipped accordingly, such that the returned constraint describes the same
    /// set of points.
    pub fn with_nonnegative_rhs(&self) -> Self {
        if self.rhs < 0f64 {
            self.negated()
        } else {
            self.clone()
        }
    }

    /// Multiply both sides by `-1`, flipping the relation.
    pub fn negated(&self) -> Self {
        Self {
            coefficients: self.coefficients.iter().map(|v| -v).collect(),
            relation: !self.relation,
            rhs: -self.rhs,
        }
    }
}

/// A linear program over nonnegative variables `x1` through `xn`.
///
/// Instances can only be created through `LinearProgram::new`, which guarantees that the shapes
/// of the objective function and all constraints agree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinearProgram {
    objective: Vec<f64>,
    objective_type: Objective,
    constraints: Vec<Constraint>,
}

impl LinearProgram {
    /// Create a new linear program.
    ///
    /// # Arguments
    ///
    /// * `objective`: Coefficient of each variable in the objective function.
    /// * `objective_type`: Whether to maximize or minimize.
    /// * `constraints`: Constraints, each with one coefficient per variable.
    ///
    /// # Errors
    ///
    /// If there are no variables, if a constraint has the wrong number of coefficients or if any
    /// number is not finite.
    pub fn new(
        objective: Vec<f64>,
        objective_type: Objective,
        constraints: Vec<Constraint>,
    ) -> Result<Self, InputShapeError> {
        let nr_variables = objective.len();
        if nr_variables == 0 {
            return Err(InputShapeError::NoVariables);
        }
        if let Some(j) = objective.iter().position(|v| !v.is_finite()) {
            return Err(InputShapeError::NonFinite(format!("objective coefficient {}", j + 1)));
        }

        for (i, constraint) in constraints.iter().enumerate() {
            if constraint.coefficients.len() != nr_variables {
                return Err(InputShapeError::CoefficientLength {
                    constraint: i + 1,
                    expected: nr_variables,
                    found: constraint.coefficients.len(),
                });
            }
            if let Some(j) = constraint.coefficients.iter().position(|v| !v.is_finite()) {
                return Err(InputShapeError::NonFinite(format!(
                    "coefficient {} of constraint {}", j + 1, i + 1,
                )));
            }
            if !constraint.rhs.is_finite() {
                return Err(InputShapeError::NonFinite(format!("right hand side of constraint {}", i + 1)));
            }
        }

        Ok(Self { objective, objective_type, constraints })
    }

    /// Number of decision variables.
    pub fn nr_variables(&self) -> usize {
        self.objective.len()
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    #[allow(missing_docs)]
    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    #[allow(missing_docs)]
    pub fn objective_type(&self) -> Objective {
        self.objective_type
    }

    #[allow(missing_docs)]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Name of variable `j`, counting from `x1`.
    pub fn variable_name(j: usize) -> String {
        format!("x{}", j + 1)
    }

    /// Cost vector of the equivalent minimization problem.
    ///
    /// The algorithms only minimize; a maximization problem is solved by minimizing the negated
    /// objective function.
    pub fn cost(&self) -> Vec<f64> {
        let sign = self.objective_type.cost_sign();
        self.objective.iter().map(|v| sign * v).collect()
    }

    /// Value of the objective function at a point.
    pub fn objective_value(&self, x: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), self.nr_variables());

        self.objective.iter().zip(x).map(|(c, x)| c * x).sum()
    }

    /// Whether a point is nonnegative and satisfies all constraints, up to `tolerance`.
    pub fn is_feasible(&self, x: &[f64], tolerance: f64) -> bool {
        x.len() == self.nr_variables()
            && x.iter().all(|&v| v >= -tolerance)
            && self.constraints.iter().all(|constraint| constraint.is_satisfied_by(x, tolerance))
    }

    /// Largest absolute value of any number describing this problem.
    pub fn largest_absolute_value(&self) -> f64 {
        self.objective.iter()
            .chain(self.constraints.iter().flat_map(|constraint| {
                constraint.coefficients.iter().chain(Some(&constraint.rhs))
            }))
            .fold(0f64, |maximum, v| maximum.max(v.abs()))
    }

    /// The same constraints, optimizing the negated objective function in the other direction.
    ///
    /// The optimal points of both problems are the same, the optimal values are each other's
    /// negation.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            objective: self.objective.iter().map(|v| -v).collect(),
            objective_type: !self.objective_type,
            constraints: self.constraints.clone(),
        }
    }
}

/// A problem description that doesn't have the right shape to be a linear program.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputShapeError {
    /// The objective function has no coefficients.
    #[error("a linear program needs at least one variable")]
    NoVariables,
    /// A declared number of variables doesn't match the objective function.
    #[error("expected {expected} objective coefficients, found {found}")]
    ObjectiveLength {
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        found: usize,
    },
    /// A constraint has too few or too many coefficients.
    #[error("constraint {constraint} has {found} coefficients, expected {expected}")]
    CoefficientLength {
        /// Number of the constraint, counting from 1.
        constraint: usize,
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        found: usize,
    },
    /// A declared number of constraints doesn't match the constraints provided.
    #[error("expected {expected} constraints, found {found}")]
    ConstraintCount {
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        found: usize,
    },
    /// A number is infinite or not a number.
    #[error("{0} is not a finite number")]
    NonFinite(String),
}
