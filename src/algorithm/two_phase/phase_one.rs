//! # Phase one: finding a basic feasible solution
use log::{debug, info};

use crate::algorithm::{OptimizationResult, simplex};
use crate::algorithm::config::SolverConfig;
use crate::algorithm::tableau::Tableau;
use crate::algorithm::tableau::kind::artificial::tableau;
use crate::data::linear_algebra::is_zero;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::{IterationRecord, Phase};

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the original problem is found.
///
/// Artificial variables that remain in the basis at zero level are pivoted out afterwards. Those
/// pivots are recorded in the trace as well. Rows for which that is not possible are redundant and
/// are removed from the tableau.
///
/// # Return value
///
/// Whether the problem is feasible, and if so, a tableau without artificial variables in its
/// basis.
pub(crate) fn primal(
    problem: &LinearProgram,
    config: &SolverConfig,
    iterations: &mut Vec<IterationRecord>,
) -> RankedFeasibilityResult {
    let mut tableau = tableau(problem);
    debug!(
        "Phase one with {} artificial variables, infeasibility {}",
        tableau.layout().nr_artificial_variables(), tableau.objective_function_value(),
    );

    match simplex::optimize(&mut tableau, Phase::One, config, iterations) {
        OptimizationResult::FiniteOptimum => if is_zero(tableau.objective_function_value()) {
            let rank = if tableau.has_artificial_in_basis() {
                let rows_to_remove = remove_artificial_basis_variables(&mut tableau, iterations);
                if rows_to_remove.is_empty() {
                    Rank::Full
                } else {
                    info!("Removing {} redundant constraint(s)", rows_to_remove.len());
                    tableau.remove_rows(&rows_to_remove);
                    Rank::Deficient(rows_to_remove)
                }
            } else {
                Rank::Full
            };

            RankedFeasibilityResult::Feasible { rank, tableau }
        } else {
            info!("Phase one ended with infeasibility {}", tableau.objective_function_value());
            RankedFeasibilityResult::Infeasible
        },
        // The artificial cost is bounded from below by zero, this only happens numerically
        OptimizationResult::Unbounded => RankedFeasibilityResult::Unbounded,
        OptimizationResult::IterationLimit => RankedFeasibilityResult::IterationLimit,
    }
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient. The first phase
/// can also be interrupted.
#[derive(Debug, PartialEq)]
pub enum RankedFeasibilityResult {
    /// The problem is feasible.
    Feasible {
        /// Which rows were removed.
        rank: Rank,
        /// Tableau with a basic feasible solution, without artificial variables in the basis.
        tableau: Tableau,
    },
    /// The problem is not feasible.
    Infeasible,
    /// The artificial cost appeared unbounded.
    Unbounded,
    /// The maximum number of pivots was reached.
    IterationLimit,
}

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices should be provided,
/// that when removed, makes the matrix or linear program full rank.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows need to be removed.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}

/// Removes all artificial variables from the basis by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// # Arguments
///
/// * `tableau`: Tableau to change the basis for, with all artificial basic variables at zero.
/// * `iterations`: Trace to which a snapshot is appended before each pivot.
///
/// # Return value
///
/// A `Vec` with indices of rows that are redundant. Is sorted as a side effect of the algorithm.
fn remove_artificial_basis_variables(
    tableau: &mut Tableau,
    iterations: &mut Vec<IterationRecord>,
) -> Vec<usize> {
    let layout = tableau.layout();
    let artificial_rows = (0..tableau.nr_rows())
        .filter(|&i| layout.is_artificial(tableau.basis_column(i)))
        .collect::<Vec<_>>();
    let mut rows_to_remove = Vec::new();

    for pivot_row in artificial_rows {
        debug_assert!(is_zero(tableau.constraint_value(pivot_row)));

        let pivot_column = (0..layout.nr_non_artificial_columns())
            .filter(|&j| !tableau.is_in_basis(j))
            .find(|&j| !is_zero(tableau.entry(pivot_row, j)));

        if let Some(pivot_column) = pivot_column {
            debug!(
                "{} replaces {} at zero level",
                layout.column_name(pivot_column), layout.column_name(tableau.basis_column(pivot_row)),
            );
            iterations.push(tableau.snapshot(Phase::One));
            tableau.bring_into_basis(pivot_column, pivot_row);
        } else {
            rows_to_remove.push(pivot_row);
        }
    }

    debug_assert!(rows_to_remove.is_sorted());
    rows_to_remove
}
