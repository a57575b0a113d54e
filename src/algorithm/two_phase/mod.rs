//! # The two-phase method
//!
//! The first phase finds a basic feasible solution by minimizing the sum of artificial variables,
//! the second improves it until it is optimal for the original objective function. The algorithm is
//! implemented as described in chapter 2 of Combinatorial Optimization, a book by Christos H.
//! Papadimitriou and Kenneth Steiglitz.
use log::info;

use crate::algorithm::config::SolverConfig;
use crate::algorithm::two_phase::phase_one::RankedFeasibilityResult;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::{SolveResult, Status};

pub mod phase_one;
pub mod phase_two;

/// Solve a problem with any mix of constraint types.
///
/// The trace contains the tableaus of both phases, labeled with their phase.
pub fn solve(problem: &LinearProgram, config: &SolverConfig) -> SolveResult {
    info!(
        "Solving a problem with {} variables and {} constraints using the two-phase method",
        problem.nr_variables(), problem.nr_constraints(),
    );

    let mut iterations = Vec::new();
    let status = match phase_one::primal(problem, config, &mut iterations) {
        RankedFeasibilityResult::Feasible { tableau, .. } => {
            return phase_two::primal(problem, tableau, config, iterations);
        },
        RankedFeasibilityResult::Infeasible => Status::Infeasible,
        RankedFeasibilityResult::Unbounded => Status::Unbounded,
        RankedFeasibilityResult::IterationLimit => Status::IterationLimit,
    };

    info!("Problem is {} after visiting {} tableaus", status, iterations.len());
    SolveResult::without_solution(status, iterations)
}
