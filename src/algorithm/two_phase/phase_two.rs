//! # Phase two: optimizing the original objective function
use crate::algorithm::{extract, simplex};
use crate::algorithm::config::SolverConfig;
use crate::algorithm::tableau::Tableau;
use crate::algorithm::tableau::kind::non_artificial::from_artificial;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::{IterationRecord, Phase, SolveResult};

/// Reduces the cost of the basic feasible solution found in the first phase to the minimum.
///
/// # Arguments
///
/// * `problem`: Problem being solved.
/// * `tableau`: Final tableau of the first phase, without artificial variables in its basis.
/// * `config`: Pivot rule and iteration limit.
/// * `iterations`: Trace of the first phase, to be continued.
///
/// # Return value
///
/// The result can't be infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal(
    problem: &LinearProgram,
    tableau: Tableau,
    config: &SolverConfig,
    mut iterations: Vec<IterationRecord>,
) -> SolveResult {
    let mut tableau = from_artificial(tableau, problem);
    let result = simplex::optimize(&mut tableau, Phase::Two, config, &mut iterations);

    extract::into_solve_result(problem, &tableau, result, iterations)
}
