//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//! The initial tableaus of the different methods are built in the `kind` module.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::Range;

use crate::algorithm::utilities::remove_indices;
use crate::data::linear_algebra::{EPSILON, is_negative, is_zero};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::solution::{IterationRecord, Phase, write_table};

pub mod kind;

/// How the columns of a tableau are divided over the different types of variables.
///
/// Columns are ordered as decision variables, then slack (and surplus) variables, then artificial
/// variables. The right hand side column is not counted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColumnLayout {
    nr_decision_variables: usize,
    nr_slack_variables: usize,
    nr_artificial_variables: usize,
}

impl ColumnLayout {
    /// Create a new layout.
    pub fn new(
        nr_decision_variables: usize,
        nr_slack_variables: usize,
        nr_artificial_variables: usize,
    ) -> Self {
        Self { nr_decision_variables, nr_slack_variables, nr_artificial_variables }
    }

    #[allow(missing_docs)]
    pub fn nr_decision_variables(&self) -> usize {
        self.nr_decision_variables
    }

    #[allow(missing_docs)]
    pub fn nr_slack_variables(&self) -> usize {
        self.nr_slack_variables
    }

    #[allow(missing_docs)]
    pub fn nr_artificial_variables(&self) -> usize {
        self.nr_artificial_variables
    }

    /// Total number of variables, excluding the right hand side.
    pub fn nr_columns(&self) -> usize {
        self.nr_non_artificial_columns() + self.nr_artificial_variables
    }

    /// Number of decision and slack variables.
    pub fn nr_non_artificial_columns(&self) -> usize {
        self.nr_decision_variables + self.nr_slack_variables
    }

    /// Column index of the `k`'th slack variable.
    pub fn slack_column(&self, k: usize) -> usize {
        debug_assert!(k < self.nr_slack_variables);

        self.nr_decision_variables + k
    }

    /// Column index of the `k`'th artificial variable.
    pub fn artificial_column(&self, k: usize) -> usize {
        debug_assert!(k < self.nr_artificial_variables);

        self.nr_non_artificial_columns() + k
    }

    /// Column indices of all artificial variables.
    pub fn artificial_columns(&self) -> Range<usize> {
        self.nr_non_artificial_columns()..self.nr_columns()
    }

    #[allow(missing_docs)]
    pub fn is_artificial(&self, j: usize) -> bool {
        self.artificial_columns().contains(&j)
    }

    /// Human readable name of a column, like `x1`, `s2` or `a1`.
    pub fn column_name(&self, j: usize) -> String {
        debug_assert!(j < self.nr_columns());

        if j < self.nr_decision_variables {
            format!("x{}", j + 1)
        } else if j < self.nr_non_artificial_columns() {
            format!("s{}", j - self.nr_decision_variables + 1)
        } else {
            format!("a{}", j - self.nr_non_artificial_columns() + 1)
        }
    }

    /// Names of all columns, in order.
    pub fn column_names(&self) -> Vec<String> {
        (0..self.nr_columns()).map(|j| self.column_name(j)).collect()
    }

    fn without_artificial_variables(self) -> Self {
        Self { nr_artificial_variables: 0, ..self }
    }
}

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// Row `0` of the matrix holds the relative costs and, in the right hand side column, the negated
/// cost of the current basic solution. Rows `1` through `m` hold the constraints. Constraint rows
/// are addressed with indices `0` through `m - 1` in the methods of this type.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau {
    matrix: DenseMatrix,
    /// Column index of the basic variable for each constraint row.
    basis: Vec<usize>,
    layout: ColumnLayout,
}

impl Tableau {
    /// Create a new tableau.
    ///
    /// The basis columns should form an identity matrix in the constraint rows. The cost row is not
    /// yet required to be zero in the basis columns, see `price_out_basis`.
    pub(crate) fn new(mut matrix: DenseMatrix, basis: Vec<usize>, layout: ColumnLayout) -> Self {
        debug_assert_eq!(matrix.nr_rows(), basis.len() + 1);
        debug_assert_eq!(matrix.nr_columns(), layout.nr_columns() + 1);
        debug_assert!(basis.iter().all(|&j| j < layout.nr_columns()));

        for i in 0..matrix.nr_rows() {
            matrix.snap_row_to_zero(i);
        }

        let tableau = Self { matrix, basis, layout };
        debug_assert_basis_is_identity(&tableau);
        tableau
    }

    /// Brings a column into the basis by performing a pivot on the matrix and updating the basis.
    ///
    /// The pivot row is divided by the pivot element, after which a multiple of it is subtracted
    /// from every other row (including the cost row) such that the pivot column becomes a unit
    /// vector.
    ///
    /// # Arguments
    ///
    /// * `pivot_column`: Column index of the entering variable, in range `0` until
    /// `self.nr_columns()`.
    /// * `pivot_row`: Constraint row index of the leaving variable, in range `0` until
    /// `self.nr_rows()`.
    pub fn bring_into_basis(&mut self, pivot_column: usize, pivot_row: usize) {
        debug_assert!(pivot_column < self.nr_columns());
        debug_assert!(pivot_row < self.nr_rows());

        let pivot_row_index = pivot_row + 1;
        let pivot_value = self.matrix.get_value(pivot_row_index, pivot_column);
        debug_assert!(pivot_value.abs() > EPSILON, "Pivot element {} is too small", pivot_value);

        self.matrix.multiply_row(pivot_row_index, 1f64 / pivot_value);
        self.matrix.set_value(pivot_row_index, pivot_column, 1f64);
        self.matrix.snap_row_to_zero(pivot_row_index);

        for i in (0..self.matrix.nr_rows()).filter(|&i| i != pivot_row_index) {
            let factor = self.matrix.get_value(i, pivot_column);
            if factor != 0f64 {
                self.matrix.mul_add_rows(pivot_row_index, i, -factor);
                self.matrix.set_value(i, pivot_column, 0f64);
                self.matrix.snap_row_to_zero(i);
            }
        }

        self.basis[pivot_row] = pivot_column;
        debug_assert_basis_is_identity(self);
    }

    /// Subtract multiples of the constraint rows from the cost row, such that the relative cost of
    /// every basis column becomes zero.
    pub(crate) fn price_out_basis(&mut self) {
        for (i, &j) in self.basis.iter().enumerate() {
            let cost = self.matrix.get_value(0, j);
            if cost != 0f64 {
                self.matrix.mul_add_rows(i + 1, 0, -cost);
                self.matrix.set_value(0, j, 0f64);
            }
        }
        self.matrix.snap_row_to_zero(0);
    }

    /// Replace the cost row and make it consistent with the current basis.
    ///
    /// # Arguments
    ///
    /// * `cost`: Initial cost of each column, of length `self.nr_columns()`.
    pub(crate) fn set_cost_row(&mut self, cost: &[f64]) {
        debug_assert_eq!(cost.len(), self.nr_columns());

        for (j, &value) in cost.iter().enumerate() {
            self.matrix.set_value(0, j, value);
        }
        self.matrix.set_value(0, self.rhs_column(), 0f64);
        self.price_out_basis();
    }

    /// Remove constraint rows, together with their basic variables.
    ///
    /// # Arguments
    ///
    /// * `rows`: Constraint row indices, sorted and without duplicates.
    pub(crate) fn remove_rows(&mut self, rows: &[usize]) {
        let matrix_rows = rows.iter().map(|i| i + 1).collect::<Vec<_>>();
        self.matrix.remove_rows(&matrix_rows);
        remove_indices(&mut self.basis, rows);
    }

    /// Remove all artificial columns. None of them may be in the basis.
    pub(crate) fn remove_artificial_columns(&mut self) {
        debug_assert!(!self.has_artificial_in_basis());

        let columns = self.layout.artificial_columns().collect::<Vec<_>>();
        self.matrix.remove_columns(&columns);
        self.layout = self.layout.without_artificial_variables();
    }

    /// Relative cost of a column, as currently in the cost row.
    pub fn relative_cost(&self, j: usize) -> f64 {
        debug_assert!(j < self.nr_columns());

        self.matrix.get_value(0, j)
    }

    /// Coefficient in constraint row `i` and column `j`.
    pub fn entry(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        self.matrix.get_value(i + 1, j)
    }

    /// Right hand side of constraint row `i`: the value of its basic variable.
    pub fn constraint_value(&self, i: usize) -> f64 {
        debug_assert!(i < self.nr_rows());

        self.matrix.get_value(i + 1, self.rhs_column())
    }

    /// Value in the right hand side column of the cost row.
    ///
    /// This is the negated cost of the current basic solution.
    pub fn objective_row_value(&self) -> f64 {
        self.matrix.get_value(0, self.rhs_column())
    }

    /// Get the cost of the current solution.
    pub fn objective_function_value(&self) -> f64 {
        -self.objective_row_value()
    }

    /// Column index of the basic variable of constraint row `i`.
    pub fn basis_column(&self, i: usize) -> usize {
        self.basis[i]
    }

    /// Column indices of the basic variables, by constraint row.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, j: usize) -> bool {
        debug_assert!(j < self.nr_columns());

        self.basis.contains(&j)
    }

    /// Whether any artificial variable is still in the basis.
    pub fn has_artificial_in_basis(&self) -> bool {
        self.basis.iter().any(|&j| self.layout.is_artificial(j))
    }

    /// Number of constraint rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.basis.len()
    }

    /// Number of variables in the tableau, excluding the right hand side column.
    pub fn nr_columns(&self) -> usize {
        self.layout.nr_columns()
    }

    #[allow(missing_docs)]
    pub fn layout(&self) -> ColumnLayout {
        self.layout
    }

    /// The underlying matrix, including the cost row and right hand side column.
    pub fn matrix(&self) -> &DenseMatrix {
        &self.matrix
    }

    /// A deep copy of the current state, to be stored in the iteration trace.
    pub fn snapshot(&self, phase: Phase) -> IterationRecord {
        IterationRecord::new(phase, self.matrix.clone().data(), self.basis.clone(), self.layout.column_names())
    }

    fn rhs_column(&self) -> usize {
        self.layout.nr_columns()
    }
}

/// Check that the basis columns form an identity matrix in the constraint rows.
fn debug_assert_basis_is_identity(tableau: &Tableau) {
    if cfg!(debug_assertions) {
        for (i, &j) in tableau.basis.iter().enumerate() {
            for k in 0..tableau.nr_rows() {
                let expected = if k == i { 1f64 } else { 0f64 };
                debug_assert!(
                    (tableau.entry(k, j) - expected).abs() <= EPSILON,
                    "Column {} of row {} is not the unit vector e_{}", j, i, i,
                );
            }
        }
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn debug_assert_in_basic_feasible_solution_state(tableau: &Tableau) {
    if cfg!(debug_assertions) {
        debug_assert_basis_is_identity(tableau);

        // Basic variables have zero relative cost
        for &j in &tableau.basis {
            debug_assert!(
                is_zero(tableau.relative_cost(j)),
                "Relative cost of column {} is not zero", j,
            );
        }

        // `b` >= 0
        for i in 0..tableau.nr_rows() {
            let value = tableau.constraint_value(i);
            debug_assert!(
                !is_negative(value),
                "rhs (b) is not always nonnegative: at index {} we have {} < 0", i, value,
            );
        }
    }
}

impl Display for Tableau {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        write_table(f, &self.layout.column_names(), &self.basis, self.matrix.rows())
    }
}
