use approx::assert_abs_diff_eq;

use simplex_tableau::algorithm::{Method, SolveError};
use simplex_tableau::algorithm::config::{PivotRuleKind, SolverConfig};
use simplex_tableau::data::linear_program::solution::{Phase, SolveResult, Status};

use super::read;

fn configs() -> [SolverConfig; 2] {
    [
        SolverConfig::default(),
        SolverConfig::default().with_pivot_rule(PivotRuleKind::Bland),
    ]
}

fn assert_optimum(result: &SolveResult, value: f64, solution: &[f64]) {
    assert_eq!(result.status(), Status::Optimal);
    assert_abs_diff_eq!(result.optimal_value().unwrap(), value, epsilon = 1e-9);
    assert_eq!(result.optimal_solution().len(), solution.len());
    for (j, ((name, actual), expected)) in result.optimal_solution().iter().zip(solution).enumerate() {
        assert_eq!(name, &format!("x{}", j + 1));
        assert_abs_diff_eq!(*actual, *expected, epsilon = 1e-9);
    }
}

#[test]
fn canonical() {
    let imported = read("canonical");
    assert_eq!(imported.method, Some(Method::Standard));

    for config in configs() {
        for method in Method::ALL {
            let result = method.solve(&imported.problem, &config).unwrap();
            assert_optimum(&result, 36f64, &[2f64, 6f64]);
        }
    }

    let result = Method::Standard.solve(&imported.problem, &SolverConfig::default()).unwrap();
    let trace = result.iterations();
    assert_eq!(trace.len(), 3);
    assert_eq!(trace[0].tableau()[0], vec![-3f64, -5f64, 0f64, 0f64, 0f64, 0f64]);
    assert_eq!(trace[0].basis(), &[2, 3, 4]);
    assert_eq!(trace[2].basis(), &[2, 1, 0]);
}

#[test]
fn covering() {
    let imported = read("covering");
    assert_eq!(imported.method, Some(Method::TwoPhase));

    assert!(matches!(
        Method::Standard.solve(&imported.problem, &SolverConfig::default()),
        Err(SolveError::InfeasibleStart { constraint: 1, .. }),
    ));
    for config in configs() {
        for method in [Method::BigM, Method::TwoPhase] {
            let result = method.solve(&imported.problem, &config).unwrap();
            assert_optimum(&result, 9f64, &[3f64, 1f64]);
        }
    }
}

#[test]
fn equality() {
    let imported = read("equality");
    assert_eq!(imported.method, Some(Method::BigM));

    for config in configs() {
        for method in [Method::BigM, Method::TwoPhase] {
            let result = method.solve(&imported.problem, &config).unwrap();
            assert_optimum(&result, 26f64, &[2f64, 0f64, 8f64]);
        }
    }
}

#[test]
fn infeasible() {
    let imported = read("infeasible");
    assert_eq!(imported.method, None);

    for config in configs() {
        for method in [Method::BigM, Method::TwoPhase] {
            let result = method.solve(&imported.problem, &config).unwrap();
            assert_eq!(result.status(), Status::Infeasible);
            assert_eq!(result.optimal_value(), None);
            assert!(result.optimal_solution().is_empty());
        }
    }

    let result = Method::TwoPhase.solve(&imported.problem, &SolverConfig::default()).unwrap();
    assert!(result.iterations().iter().all(|record| record.phase() == Phase::One));
}

#[test]
fn unbounded() {
    let imported = read("unbounded");

    for config in configs() {
        for method in Method::ALL {
            let result = method.solve(&imported.problem, &config).unwrap();
            assert_eq!(result.status(), Status::Unbounded);
            assert_eq!(result.optimal_value(), None);
        }
    }

    let result = Method::TwoPhase.solve(&imported.problem, &SolverConfig::default()).unwrap();
    assert_eq!(result.iterations().last().unwrap().phase(), Phase::Two);
}

/// Beale's example: the most negative relative cost rule cycles, Bland's rule doesn't.
#[test]
fn beale() {
    let imported = read("beale");

    let config = SolverConfig::default().with_max_iterations(50);
    let result = Method::Standard.solve(&imported.problem, &config).unwrap();
    assert_eq!(result.status(), Status::IterationLimit);
    assert_eq!(result.optimal_value(), None);
    assert_eq!(result.iterations().len(), 51);

    let config = config.with_pivot_rule(PivotRuleKind::Bland);
    for method in Method::ALL {
        let result = method.solve(&imported.problem, &config).unwrap();
        assert_optimum(&result, -1.25f64, &[1f64, 0f64, 1f64, 0f64]);
    }
}

#[test]
fn redundant() {
    let imported = read("redundant");

    for config in configs() {
        for method in [Method::BigM, Method::TwoPhase] {
            let result = method.solve(&imported.problem, &config).unwrap();
            assert_optimum(&result, 4f64, &[1f64, 3f64, 0f64]);
        }
    }

    // The third equality is the sum of the first two, and is removed before the second phase
    let result = Method::TwoPhase.solve(&imported.problem, &SolverConfig::default()).unwrap();
    let last = result.iterations().last().unwrap();
    assert_eq!(last.phase(), Phase::Two);
    assert_eq!(last.basis().len(), 2);
    assert_eq!(last.tableau().len(), 3);
}

#[test]
fn negative_rhs() {
    let imported = read("negative_rhs");

    assert!(Method::Standard.solve(&imported.problem, &SolverConfig::default()).is_err());
    for config in configs() {
        for method in [Method::BigM, Method::TwoPhase] {
            let result = method.solve(&imported.problem, &config).unwrap();
            assert_optimum(&result, 3.4f64, &[0.4f64, 1.8f64]);
        }
    }
}
