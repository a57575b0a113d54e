//! # Pivoting
//!
//! The loop shared by all methods: select an entering column, select a leaving row, pivot, until
//! the tableau is optimal or the problem is found to be unbounded.
use log::{debug, trace, warn};

use crate::algorithm::OptimizationResult;
use crate::algorithm::config::{PivotRuleKind, SolverConfig};
use crate::algorithm::strategy::pivot_rule::{FirstProfitable, PivotRule, SteepestDescentAlongVariable};
use crate::algorithm::tableau::{debug_assert_in_basic_feasible_solution_state, Tableau};
use crate::data::linear_program::solution::{IterationRecord, Phase};

/// Run the Simplex Method with the pivot rule from the configuration.
pub(crate) fn optimize(
    tableau: &mut Tableau,
    phase: Phase,
    config: &SolverConfig,
    iterations: &mut Vec<IterationRecord>,
) -> OptimizationResult {
    match config.pivot_rule {
        PivotRuleKind::Dantzig => primal::<SteepestDescentAlongVariable>(tableau, phase, config.max_iterations, iterations),
        PivotRuleKind::Bland => primal::<FirstProfitable>(tableau, phase, config.max_iterations, iterations),
    }
}

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be nonnegative (primal feasibility)
/// - The relative cost of every basic variable is zero
///
/// A snapshot of the tableau is appended to `iterations` before every pivot, and once more when the
/// loop ends. The tableau is left in the state in which the loop ended.
///
/// # Arguments
///
/// * `tableau`: Tableau with a basic feasible solution.
/// * `phase`: Label for the snapshots.
/// * `max_iterations`: Maximum number of pivots.
/// * `iterations`: Trace to append to.
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal<PR: PivotRule>(
    tableau: &mut Tableau,
    phase: Phase,
    max_iterations: usize,
    iterations: &mut Vec<IterationRecord>,
) -> OptimizationResult {
    let mut rule = PR::new();
    let mut nr_pivots = 0;
    loop {
        debug_assert_in_basic_feasible_solution_state(tableau);
        iterations.push(tableau.snapshot(phase));
        trace!("{:?} tableau after {} pivots:\n{}", phase, nr_pivots, tableau);

        match rule.select_primal_pivot_column(tableau) {
            Some((column, cost)) => match rule.select_primal_pivot_row(tableau, column) {
                Some(row) => {
                    if nr_pivots == max_iterations {
                        warn!("Phase {:?} stopped after {} pivots", phase, nr_pivots);
                        break OptimizationResult::IterationLimit;
                    }

                    debug!(
                        "Pivot {}: {} enters with relative cost {}, {} leaves",
                        nr_pivots + 1,
                        tableau.layout().column_name(column),
                        cost,
                        tableau.layout().column_name(tableau.basis_column(row)),
                    );
                    tableau.bring_into_basis(column, row);
                    nr_pivots += 1;
                },
                None => {
                    debug!("Column {} has no positive entries", tableau.layout().column_name(column));
                    break OptimizationResult::Unbounded;
                },
            },
            None => {
                debug!("Phase {:?} optimal after {} pivots", phase, nr_pivots);
                break OptimizationResult::FiniteOptimum;
            },
        }
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::OptimizationResult;
    use crate::algorithm::config::{PivotRuleKind, SolverConfig};
    use crate::algorithm::simplex::{optimize, primal};
    use crate::algorithm::strategy::pivot_rule::SteepestDescentAlongVariable;
    use crate::algorithm::tableau::kind::standard;
    use crate::data::linear_program::solution::Phase;
    use crate::tests::problem_1;

    #[test]
    fn optimum() {
        let mut tableau = standard::tableau(&problem_1::create_problem()).unwrap();
        let mut iterations = Vec::new();
        let result = primal::<SteepestDescentAlongVariable>(&mut tableau, Phase::Single, 10, &mut iterations);

        assert_eq!(result, OptimizationResult::FiniteOptimum);
        assert_eq!(iterations.len(), 3);
        assert_eq!(iterations[0].tableau(), problem_1::initial_tableau());
        assert_eq!(iterations[1].basis(), &[2, 1, 4]);
        assert_eq!(iterations[2].basis(), &[2, 1, 0]);
        assert!(iterations.iter().all(|record| record.phase() == Phase::Single));
        assert_abs_diff_eq!(tableau.objective_row_value(), 36f64);
    }

    #[test]
    fn bland() {
        let mut tableau = standard::tableau(&problem_1::create_problem()).unwrap();
        let mut iterations = Vec::new();
        let config = SolverConfig::default().with_pivot_rule(PivotRuleKind::Bland);
        let result = optimize(&mut tableau, Phase::Single, &config, &mut iterations);

        assert_eq!(result, OptimizationResult::FiniteOptimum);
        // x1 enters first, which takes one more pivot
        assert_eq!(iterations.len(), 4);
        assert_eq!(iterations[1].basis(), &[0, 3, 4]);
        assert_abs_diff_eq!(tableau.objective_row_value(), 36f64, epsilon = 1e-9);
    }

    #[test]
    fn iteration_limit() {
        let mut tableau = standard::tableau(&problem_1::create_problem()).unwrap();
        let mut iterations = Vec::new();
        let result = primal::<SteepestDescentAlongVariable>(&mut tableau, Phase::Single, 1, &mut iterations);

        assert_eq!(result, OptimizationResult::IterationLimit);
        assert_eq!(iterations.len(), 2);
        assert_eq!(tableau.basis(), &[2, 1, 4]);

        let mut tableau = standard::tableau(&problem_1::create_problem()).unwrap();
        let mut iterations = Vec::new();
        let result = primal::<SteepestDescentAlongVariable>(&mut tableau, Phase::Single, 0, &mut iterations);
        assert_eq!(result, OptimizationResult::IterationLimit);
        assert_eq!(iterations.len(), 1);
    }
}
