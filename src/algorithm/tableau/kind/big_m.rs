//! # Penalized artificial tableau
//!
//! Artificial variables are added for every `>=` and `=` constraint and are given a large cost
//! `M`. If the problem is feasible and `M` is large enough, the optimum has all of them at zero.
use log::debug;

use crate::algorithm::tableau::{ColumnLayout, Tableau};
use crate::algorithm::tableau::kind::{count_relations, fill_constraint_rows, matrix_with_cost};
use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::general_form::{Constraint, LinearProgram};

/// Create a tableau for the Big-M method.
///
/// Constraints are first multiplied by `-1` where needed to make the right hand side nonnegative.
/// Then, each `<=` constraint gets a slack variable, which is basic. Each `>=` constraint gets a
/// surplus variable with coefficient `-1` and an artificial variable, which is basic. Each `=`
/// constraint gets only an artificial variable.
///
/// # Arguments
///
/// * `problem`: Problem to solve.
/// * `penalty`: Cost `M` of each artificial variable.
pub fn tableau(problem: &LinearProgram, penalty: f64) -> Tableau {
    let constraints = problem.constraints().iter()
        .map(Constraint::with_nonnegative_rhs)
        .collect::<Vec<_>>();
    let counts = count_relations(&constraints);
    let layout = ColumnLayout::new(
        problem.nr_variables(),
        counts[ConstraintType::Less] + counts[ConstraintType::Greater],
        counts[ConstraintType::Greater] + counts[ConstraintType::Equal],
    );
    debug!(
        "Big-M tableau with {} slack and {} artificial variables, M = {}",
        layout.nr_slack_variables(), layout.nr_artificial_variables(), penalty,
    );

    let mut matrix = matrix_with_cost(&problem.cost(), constraints.len(), layout);
    let mut nr_artificial = 0;
    let basis = fill_constraint_rows(&mut matrix, &constraints, layout).into_iter()
        .enumerate()
        .map(|(i, positive_slack)| positive_slack.unwrap_or_else(|| {
            let column = layout.artificial_column(nr_artificial);
            nr_artificial += 1;
            matrix.set_value(i + 1, column, 1f64);
            matrix.set_value(0, column, penalty);
            column
        }))
        .collect();

    let mut tableau = Tableau::new(matrix, basis, layout);
    tableau.price_out_basis();
    tableau
}
