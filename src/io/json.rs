//! # JSON problem files
//!
//! A problem is described by a single object:
//!
//! ```json
//! {
//!     "method": "two-phase",
//!     "numVariables": 2,
//!     "numConstraints": 1,
//!     "objective": [3, 5],
//!     "objectiveType": "max",
//!     "constraints": [{"coefficients": [1, 1], "type": "<=", "rhs": 4}]
//! }
//! ```
//!
//! The `method`, `numVariables` and `numConstraints` fields are optional. If the counts are
//! present, they are checked against the objective function and constraints. A missing
//! `constraints` list means that there are none; the `objective` and `objectiveType` fields are
//! required.
use serde::{Deserialize, Serialize};

use crate::algorithm::Method;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::general_form::{Constraint, InputShapeError, LinearProgram};
use crate::io::ImportedProblem;
use crate::io::error::ImportError;

/// Layout of a problem file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProblemFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    method: Option<Method>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    num_variables: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    num_constraints: Option<usize>,
    objective: Vec<f64>,
    objective_type: Objective,
    #[serde(default)]
    constraints: Vec<Constraint>,
}

impl TryFrom<ProblemFile> for ImportedProblem {
    type Error = InputShapeError;

    fn try_from(file: ProblemFile) -> Result<Self, Self::Error> {
        if let Some(expected) = file.num_variables {
            if expected != file.objective.len() {
                return Err(InputShapeError::ObjectiveLength { expected, found: file.objective.len() });
            }
        }
        if let Some(expected) = file.num_constraints {
            if expected != file.constraints.len() {
                return Err(InputShapeError::ConstraintCount { expected, found: file.constraints.len() });
            }
        }

        Ok(Self {
            problem: LinearProgram::new(file.objective, file.objective_type, file.constraints)?,
            method: file.method,
        })
    }
}

/// Parse the contents of a JSON problem file.
///
/// # Errors
///
/// If the text is not valid JSON of the right layout, or if the problem has an inconsistent shape.
pub fn parse(program: &str) -> Result<ImportedProblem, ImportError> {
    let file = serde_json::from_str::<ProblemFile>(program)?;
    Ok(file.try_into()?)
}

/// Write a problem in the same layout as it is read.
///
/// # Errors
///
/// Only if serialization fails, which doesn't happen for finite numbers.
pub fn to_string(problem: &LinearProgram, method: Option<Method>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ProblemFile {
        method,
        num_variables: Some(problem.nr_variables()),
        num_constraints: Some(problem.nr_constraints()),
        objective: problem.objective().to_vec(),
        objective_type: problem.objective_type(),
        constraints: problem.constraints().to_vec(),
    })
}
