//! # Slack tableau
//!
//! When every constraint is of the form `a · x <= b` with `b >= 0`, the slack variables form a
//! basis and `x = 0` is a basic feasible solution.
use crate::algorithm::SolveError;
use crate::algorithm::tableau::{ColumnLayout, Tableau};
use crate::algorithm::tableau::kind::{fill_constraint_rows, matrix_with_cost};
use crate::data::linear_algebra::is_negative;
use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::general_form::{Constraint, LinearProgram};

/// Create a tableau with one slack variable per constraint, all of them in the basis.
///
/// # Errors
///
/// If there is a `>=` or `=` constraint, or if the right hand side of a `<=` constraint is
/// negative. In those cases the slack variables don't form a feasible basis.
pub fn tableau(problem: &LinearProgram) -> Result<Tableau, SolveError> {
    let constraints = problem.constraints();
    let infeasible = constraints.iter().enumerate()
        .find(|(_, constraint)| constraint.relation != ConstraintType::Less || is_negative(constraint.rhs));
    if let Some((i, constraint)) = infeasible {
        return Err(infeasible_start(i, constraint));
    }

    let layout = ColumnLayout::new(problem.nr_variables(), constraints.len(), 0);
    let mut matrix = matrix_with_cost(&problem.cost(), constraints.len(), layout);
    let basis = fill_constraint_rows(&mut matrix, constraints, layout).into_iter()
        .flatten()
        .collect::<Vec<_>>();
    debug_assert_eq!(basis.len(), constraints.len());

    Ok(Tableau::new(matrix, basis, layout))
}

fn infeasible_start(i: usize, constraint: &Constraint) -> SolveError {
    SolveError::InfeasibleStart {
        constraint: i + 1,
        relation: constraint.relation,
        rhs: constraint.rhs,
    }
}
