//! # Property-based tests
//!
//! Random small problems with integer data, solved with every applicable method:
//! - Methods agree on the status and optimal value
//! - Optimal solutions are feasible and attain the reported value
//! - Solving is deterministic, and negating the objective function negates the optimal value while
//!   keeping the optimal point
//! - The trace starts with the initial tableau and never returns to an earlier phase
use proptest::prelude::*;

use simplex_tableau::algorithm::Method;
use simplex_tableau::algorithm::config::SolverConfig;
use simplex_tableau::algorithm::tableau::kind::{artificial, big_m};
use simplex_tableau::data::linear_program::elements::{ConstraintType, Objective};
use simplex_tableau::data::linear_program::general_form::{Constraint, LinearProgram};
use simplex_tableau::data::linear_program::solution::{Phase, SolveResult, Status};

const TOLERANCE: f64 = 1e-6;

fn any_relation() -> BoxedStrategy<ConstraintType> {
    prop_oneof![
        Just(ConstraintType::Less),
        Just(ConstraintType::Greater),
        Just(ConstraintType::Equal),
    ].boxed()
}

/// Problems with up to three variables and three constraints.
fn problem(relations: BoxedStrategy<ConstraintType>) -> impl Strategy<Value = LinearProgram> {
    (1..=3usize, 0..=3usize)
        .prop_flat_map(move |(n, m)| (
            prop::collection::vec(-5i32..=5, n),
            any::<bool>(),
            prop::collection::vec((prop::collection::vec(-3i32..=3, n), relations.clone(), 0i32..=10), m),
        ))
        .prop_map(|(objective, maximize, constraints)| {
            let objective_type = if maximize { Objective::Maximize } else { Objective::Minimize };
            let constraints = constraints.into_iter()
                .map(|(coefficients, relation, rhs)| Constraint::new(
                    coefficients.into_iter().map(f64::from).collect(),
                    relation,
                    f64::from(rhs),
                ))
                .collect();

            LinearProgram::new(objective.into_iter().map(f64::from).collect(), objective_type, constraints)
                .unwrap()
        })
}

fn solve(method: Method, problem: &LinearProgram) -> SolveResult {
    method.solve(problem, &SolverConfig::default()).unwrap()
}

fn check_optimum(problem: &LinearProgram, result: &SolveResult) -> Result<(), TestCaseError> {
    if let Some(value) = result.optimal_value() {
        let x = result.values();
        prop_assert!(problem.is_feasible(&x, TOLERANCE), "{:?} is not feasible", x);
        prop_assert!((problem.objective_value(&x) - value).abs() < TOLERANCE);
    }

    Ok(())
}

proptest! {
    #[test]
    fn methods_agree_on_slack_problems(problem in problem(Just(ConstraintType::Less).boxed())) {
        let standard = solve(Method::Standard, &problem);
        let big_m = solve(Method::BigM, &problem);
        let two_phase = solve(Method::TwoPhase, &problem);

        prop_assert_ne!(standard.status(), Status::Infeasible);
        prop_assert_eq!(standard.status(), big_m.status());
        prop_assert_eq!(standard.status(), two_phase.status());
        if let Some(value) = standard.optimal_value() {
            prop_assert!((value - big_m.optimal_value().unwrap()).abs() < TOLERANCE);
            prop_assert!((value - two_phase.optimal_value().unwrap()).abs() < TOLERANCE);
        }
        for result in [&standard, &big_m, &two_phase] {
            check_optimum(&problem, result)?;
        }
    }

    #[test]
    fn big_m_agrees_with_two_phase(problem in problem(any_relation())) {
        let big_m = solve(Method::BigM, &problem);
        let two_phase = solve(Method::TwoPhase, &problem);

        match two_phase.status() {
            Status::Optimal => {
                prop_assert_eq!(big_m.status(), Status::Optimal);
                let difference = big_m.optimal_value().unwrap() - two_phase.optimal_value().unwrap();
                prop_assert!(difference.abs() < TOLERANCE);
            },
            // An unbounded direction can be found before the artificial variables are gone
            Status::Infeasible => prop_assert!(matches!(big_m.status(), Status::Infeasible | Status::Unbounded)),
            Status::Unbounded => prop_assert_eq!(big_m.status(), Status::Unbounded),
            Status::IterationLimit => prop_assert!(false, "no cycling expected on {:?}", problem),
        }
        check_optimum(&problem, &big_m)?;
        check_optimum(&problem, &two_phase)?;
    }

    #[test]
    fn deterministic(problem in problem(any_relation())) {
        for method in [Method::BigM, Method::TwoPhase] {
            prop_assert_eq!(solve(method, &problem), solve(method, &problem));
        }
    }

    #[test]
    fn negated_objective(problem in problem(any_relation())) {
        let negated_problem = problem.negated();

        for method in [Method::BigM, Method::TwoPhase] {
            let result = solve(method, &problem);
            let negated = solve(method, &negated_problem);

            prop_assert_eq!(result.status(), negated.status());
            let (values, negated_values) = (result.values(), negated.values());
            prop_assert_eq!(values, negated_values);
            if let (Some(value), Some(negated_value)) = (result.optimal_value(), negated.optimal_value()) {
                prop_assert!((value + negated_value).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn trace(problem in problem(any_relation())) {
        let config = SolverConfig::default();

        let result = solve(Method::TwoPhase, &problem);
        let first = &result.iterations()[0];
        let initial = artificial::tableau(&problem).matrix().clone().data();
        prop_assert_eq!(first.phase(), Phase::One);
        prop_assert_eq!(first.tableau(), initial.as_slice());
        let phases = result.iterations().iter().map(|record| record.phase()).collect::<Vec<_>>();
        prop_assert!(phases.is_sorted_by_key(|&phase| phase == Phase::Two));

        let result = solve(Method::BigM, &problem);
        let initial = big_m::tableau(&problem, config.big_m.penalty(&problem));
        let matrix = initial.matrix().clone().data();
        prop_assert_eq!(result.iterations()[0].tableau(), matrix.as_slice());
        prop_assert_eq!(result.iterations()[0].basis(), initial.basis());
        prop_assert!(result.iterations().iter().all(|record| record.phase() == Phase::Single));
    }
}
