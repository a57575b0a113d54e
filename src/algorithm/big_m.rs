//! # The Big-M method
//!
//! Artificial variables get a large cost `M`, after which the Simplex Method is applied once. If an
//! artificial variable is still positive in the optimum, the problem is infeasible.
use log::info;

use crate::algorithm::{extract, simplex};
use crate::algorithm::config::SolverConfig;
use crate::algorithm::tableau::kind::big_m::tableau;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::{Phase, SolveResult};

/// Solve a problem with any mix of constraint types.
///
/// An unbounded result is reported as such, even though an artificial variable might still be in
/// the basis at that point.
pub fn solve(problem: &LinearProgram, config: &SolverConfig) -> SolveResult {
    info!(
        "Solving a problem with {} variables and {} constraints using the big-m method",
        problem.nr_variables(), problem.nr_constraints(),
    );
    let mut tableau = tableau(problem, config.big_m.penalty(problem));

    let mut iterations = Vec::new();
    let result = simplex::optimize(&mut tableau, Phase::Single, config, &mut iterations);
    extract::into_solve_result(problem, &tableau, result, iterations)
}
