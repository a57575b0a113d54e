//! # Reading a terminal tableau
//!
//! Turning the final tableau of a method into a `SolveResult`.
use log::info;

use crate::algorithm::OptimizationResult;
use crate::algorithm::tableau::Tableau;
use crate::data::linear_algebra::{is_positive, is_zero};
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::{IterationRecord, SolveResult, Status};

/// The constraint row in which a column is basic, judged by the values in the column alone.
///
/// The column should have exactly one nonzero entry among the constraint rows, that entry should be
/// one, and the basic variable of that row should be this column.
pub(crate) fn basic_row(tableau: &Tableau, j: usize) -> Option<usize> {
    let mut nonzeros = (0..tableau.nr_rows()).filter(|&i| !is_zero(tableau.entry(i, j)));

    match (nonzeros.next(), nonzeros.next()) {
        (Some(i), None) if is_zero(tableau.entry(i, j) - 1f64) && tableau.basis_column(i) == j => Some(i),
        _ => None,
    }
}

/// Value of each decision variable in the current basic solution.
pub(crate) fn decision_values(tableau: &Tableau) -> Vec<f64> {
    (0..tableau.layout().nr_decision_variables())
        .map(|j| basic_row(tableau, j).map_or(0f64, |i| clean(tableau.constraint_value(i))))
        .collect()
}

/// Whether an artificial variable is basic with a positive value.
pub(crate) fn has_positive_artificial(tableau: &Tableau) -> bool {
    (0..tableau.nr_rows())
        .filter(|&i| tableau.layout().is_artificial(tableau.basis_column(i)))
        .any(|i| is_positive(tableau.constraint_value(i)))
}

/// Classify the result of a single run of the pivoting engine.
///
/// A finite optimum with a positive artificial variable means that the problem is infeasible.
/// Otherwise, the optimal value is the objective function of the original problem evaluated at the
/// extracted solution.
pub(crate) fn into_solve_result(
    problem: &LinearProgram,
    tableau: &Tableau,
    result: OptimizationResult,
    iterations: Vec<IterationRecord>,
) -> SolveResult {
    let status = match result {
        OptimizationResult::FiniteOptimum if has_positive_artificial(tableau) => Status::Infeasible,
        OptimizationResult::FiniteOptimum => {
            let values = decision_values(tableau);
            let value = clean(problem.objective_value(&values));
            info!("Optimal value {} after visiting {} tableaus", value, iterations.len());
            let solution = values.into_iter()
                .enumerate()
                .map(|(j, value)| (LinearProgram::variable_name(j), value))
                .collect();
            return SolveResult::optimal(value, solution, iterations);
        },
        OptimizationResult::Unbounded => Status::Unbounded,
        OptimizationResult::IterationLimit => Status::IterationLimit,
    };

    info!("Problem is {} after visiting {} tableaus", status, iterations.len());
    SolveResult::without_solution(status, iterations)
}

/// Replace values indistinguishable from zero, including `-0`, by `0`.
fn clean(value: f64) -> f64 {
    if is_zero(value) { 0f64 } else { value }
}
