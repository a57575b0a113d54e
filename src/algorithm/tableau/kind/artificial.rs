//! # Artificial tableau
//!
//! The first phase of the two-phase method minimizes the sum of the artificial variables, one for
//! each row. The original problem is feasible if and only if that sum can be made zero.
use crate::algorithm::tableau::{ColumnLayout, Tableau};
use crate::algorithm::tableau::kind::{count_relations, fill_constraint_rows, matrix_with_cost};
use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::general_form::{Constraint, LinearProgram};

/// Create a tableau with an artificial basis.
///
/// Constraints are first multiplied by `-1` where needed to make the right hand side nonnegative.
/// Inequalities get a slack (or surplus) variable. Every row gets an artificial variable with cost
/// `1`; these form the basis. After pricing out, the right hand side of the cost row is minus the
/// sum of all right hand sides.
pub fn tableau(problem: &LinearProgram) -> Tableau {
    let constraints = problem.constraints().iter()
        .map(Constraint::with_nonnegative_rhs)
        .collect::<Vec<_>>();
    let counts = count_relations(&constraints);
    let layout = ColumnLayout::new(
        problem.nr_variables(),
        counts[ConstraintType::Less] + counts[ConstraintType::Greater],
        constraints.len(),
    );

    let cost = (0..layout.nr_columns())
        .map(|j| if layout.is_artificial(j) { 1f64 } else { 0f64 })
        .collect::<Vec<_>>();
    let mut matrix = matrix_with_cost(&cost, constraints.len(), layout);
    fill_constraint_rows(&mut matrix, &constraints, layout);
    let basis = (0..constraints.len())
        .map(|i| {
            let column = layout.artificial_column(i);
            matrix.set_value(i + 1, column, 1f64);
            column
        })
        .collect();

    let mut tableau = Tableau::new(matrix, basis, layout);
    tableau.price_out_basis();
    tableau
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::tableau::ColumnLayout;
    use crate::algorithm::tableau::kind::artificial::tableau;
    use crate::tests::problem_2;

    #[test]
    fn artificial_basis() {
        let tableau = tableau(&problem_2::create_problem());

        // x1, x2, s1, s2, s3, a1, a2, a3
        assert_eq!(tableau.layout(), ColumnLayout::new(2, 3, 3));
        assert_eq!(tableau.basis(), &[5, 6, 7]);
        assert_eq!(tableau.matrix().row(0), &[-3f64, -4f64, 1f64, 1f64, -1f64, 0f64, 0f64, 0f64, -15f64]);
        assert_eq!(tableau.matrix().row(3), &[1f64, 0f64, 0f64, 0f64, 1f64, 0f64, 0f64, 1f64, 5f64]);
        assert_abs_diff_eq!(tableau.objective_function_value(), 15f64);
    }
}
