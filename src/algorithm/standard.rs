//! # The standard Simplex Method
//!
//! Solving problems of the form `max c · x` or `min c · x` subject to `A x <= b`, `x >= 0` with
//! `b >= 0`, for which `x = 0` is a basic feasible solution.
use log::{info, warn};

use crate::algorithm::{extract, simplex, SolveError};
use crate::algorithm::config::SolverConfig;
use crate::algorithm::tableau::kind::standard::tableau;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::{Phase, SolveResult};

/// Solve a problem starting from the slack basis.
///
/// # Errors
///
/// If the slack variables don't form a feasible basis, see `SolveError::InfeasibleStart`. The Big-M
/// and two-phase methods can solve such problems.
pub fn solve(problem: &LinearProgram, config: &SolverConfig) -> Result<SolveResult, SolveError> {
    info!(
        "Solving a problem with {} variables and {} constraints using the standard method",
        problem.nr_variables(), problem.nr_constraints(),
    );
    let mut tableau = tableau(problem).inspect_err(|error| warn!("{}", error))?;

    let mut iterations = Vec::new();
    let result = simplex::optimize(&mut tableau, Phase::Single, config, &mut iterations);
    Ok(extract::into_solve_result(problem, &tableau, result, iterations))
}

#[cfg(test)]
mod test {
    use crate::algorithm::config::SolverConfig;
    use crate::algorithm::SolveError;
    use crate::algorithm::standard::solve;
    use crate::data::linear_program::elements::{ConstraintType, Objective};
    use crate::data::linear_program::general_form::{Constraint, LinearProgram};
    use crate::data::linear_program::solution::Status;

    #[test]
    fn unbounded() {
        // max x1 with x1 - x2 <= 1
        let problem = LinearProgram::new(
            vec![1f64, 0f64],
            Objective::Maximize,
            vec![Constraint::new(vec![1f64, -1f64], ConstraintType::Less, 1f64)],
        ).unwrap();
        let result = solve(&problem, &SolverConfig::default()).unwrap();

        assert_eq!(result.status(), Status::Unbounded);
        assert_eq!(result.optimal_value(), None);
        assert!(result.optimal_solution().is_empty());
        // Initial tableau, then one pivot bringing in x1, after which x2 can grow without bound
        assert_eq!(result.iterations().len(), 2);
    }

    #[test]
    fn zero_is_optimal() {
        let problem = LinearProgram::new(
            vec![1f64, 2f64],
            Objective::Minimize,
            vec![Constraint::new(vec![1f64, 1f64], ConstraintType::Less, 3f64)],
        ).unwrap();
        let result = solve(&problem, &SolverConfig::default()).unwrap();

        assert_eq!(result.status(), Status::Optimal);
        assert_eq!(result.optimal_value(), Some(0f64));
        assert_eq!(result.values(), vec![0f64, 0f64]);
        assert_eq!(result.iterations().len(), 1);
    }

    #[test]
    fn rejects_equality() {
        let problem = LinearProgram::new(
            vec![1f64],
            Objective::Maximize,
            vec![Constraint::new(vec![1f64], ConstraintType::Equal, 1f64)],
        ).unwrap();

        assert!(matches!(
            solve(&problem, &SolverConfig::default()),
            Err(SolveError::InfeasibleStart { constraint: 1, .. }),
        ));
    }

    #[test]
    fn rejects_greater() {
        // x1 <= 4 and -x1 >= -3
        let problem = LinearProgram::new(
            vec![1f64],
            Objective::Maximize,
            vec![
                Constraint::new(vec![1f64], ConstraintType::Less, 4f64),
                Constraint::new(vec![-1f64], ConstraintType::Greater, -3f64),
            ],
        ).unwrap();

        assert!(matches!(
            solve(&problem, &SolverConfig::default()),
            Err(SolveError::InfeasibleStart { constraint: 2, relation: ConstraintType::Greater, .. }),
        ));
    }
}
