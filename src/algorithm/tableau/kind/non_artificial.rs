//! # Tableau without artificial variables
//!
//! The second phase of the two-phase method continues from the basis found in the first phase.
use crate::algorithm::tableau::Tableau;
use crate::data::linear_program::general_form::LinearProgram;

/// Create a tableau for the second phase from the final tableau of the first phase.
///
/// The artificial columns are dropped and the cost row is replaced by the cost of the original
/// problem, priced out with respect to the current basis.
///
/// # Arguments
///
/// * `tableau`: Final tableau of the first phase, with no artificial variables in the basis.
/// * `problem`: Problem that is being solved.
pub fn from_artificial(mut tableau: Tableau, problem: &LinearProgram) -> Tableau {
    debug_assert_eq!(tableau.layout().nr_decision_variables(), problem.nr_variables());

    tableau.remove_artificial_columns();

    let mut cost = problem.cost();
    cost.resize(tableau.nr_columns(), 0f64);
    tableau.set_cost_row(&cost);

    tableau
}
