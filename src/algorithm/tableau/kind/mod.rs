//! # Tableau types
//!
//! Each method starts from a differently shaped tableau. The standard method uses only slack
//! variables, while the Big-M and two-phase methods add artificial variables wherever no slack
//! variable can serve as a feasible basis column. The second phase of the two-phase method
//! continues from the artificial tableau of the first phase, with the artificial variables removed.
//!
//! Every builder returns a tableau with a basic feasible solution and a priced out cost row.
use enum_map::EnumMap;

use crate::algorithm::tableau::ColumnLayout;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::general_form::Constraint;

pub mod standard;
pub mod big_m;
pub mod artificial;
pub mod non_artificial;

/// Number of constraints of each type.
pub(crate) fn count_relations(constraints: &[Constraint]) -> EnumMap<ConstraintType, usize> {
    let mut counts = EnumMap::default();
    for constraint in constraints {
        counts[constraint.relation] += 1;
    }

    counts
}

/// A zero matrix of the right size, with the cost of the first columns in the cost row.
fn matrix_with_cost(cost: &[f64], nr_rows: usize, layout: ColumnLayout) -> DenseMatrix {
    debug_assert!(cost.len() <= layout.nr_columns());

    let mut matrix = DenseMatrix::zeros(nr_rows + 1, layout.nr_columns() + 1);
    for (j, &value) in cost.iter().enumerate() {
        matrix.set_value(0, j, value);
    }

    matrix
}

/// Write the constraints into the constraint rows, adding a slack or surplus variable for every
/// inequality.
///
/// # Arguments
///
/// * `matrix`: Matrix with a cost row and one row for each constraint.
/// * `constraints`: Constraints, in the order of the rows.
/// * `layout`: Should have a slack column for each inequality.
///
/// # Return value
///
/// For each row, the column of its slack variable if that variable has coefficient `+1`. That
/// column can serve as a basis column if the right hand side is nonnegative.
fn fill_constraint_rows(
    matrix: &mut DenseMatrix,
    constraints: &[Constraint],
    layout: ColumnLayout,
) -> Vec<Option<usize>> {
    debug_assert_eq!(matrix.nr_rows(), constraints.len() + 1);

    let rhs_column = layout.nr_columns();
    let mut nr_slacks = 0;
    let positive_slacks = constraints.iter().enumerate()
        .map(|(i, constraint)| {
            for (j, &value) in constraint.coefficients.iter().enumerate() {
                matrix.set_value(i + 1, j, value);
            }
            matrix.set_value(i + 1, rhs_column, constraint.rhs);

            let slack_coefficient = match constraint.relation {
                ConstraintType::Less => 1f64,
                ConstraintType::Greater => -1f64,
                ConstraintType::Equal => return None,
            };
            let column = layout.slack_column(nr_slacks);
            nr_slacks += 1;
            matrix.set_value(i + 1, column, slack_coefficient);

            Some(column).filter(|_| slack_coefficient > 0f64)
        })
        .collect();
    debug_assert_eq!(nr_slacks, layout.nr_slack_variables());

    positive_slacks
}
