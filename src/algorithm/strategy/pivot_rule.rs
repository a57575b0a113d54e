//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use std::ops::Range;

use crate::algorithm::tableau::Tableau;
use crate::data::linear_algebra::{EPSILON, is_negative, is_positive};

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Artificial variables that have left the basis are never selected to enter it again.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The index of the entering column with its relative cost, or `None` if no column has a
    /// negative relative cost. In that case, the current solution is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)>;

    /// Row selection rule for the primal Simplex method: the minimum ratio test.
    ///
    /// Only rows with a positive coefficient in the pivot column are considered. Ties (within
    /// `EPSILON`) are broken by the lowest row index.
    ///
    /// # Return value
    ///
    /// Index of the constraint row whose basic variable leaves, or `None` if the column has no
    /// positive entries. In that case, the problem is unbounded.
    fn select_primal_pivot_row(&self, tableau: &Tableau, column: usize) -> Option<usize> {
        let mut min_values: Option<(usize, f64)> = None;
        for (row, ratio) in ratios(tableau, column) {
            match min_values {
                Some((_, min_ratio)) if ratio >= min_ratio - EPSILON => {},
                _ => min_values = Some((row, ratio)),
            }
        }

        min_values.map(|(row, _)| row)
    }
}

/// Indices of the columns that may enter the basis.
///
/// Artificial variables have the highest indices.
fn candidate_columns(tableau: &Tableau) -> Range<usize> {
    0..tableau.layout().nr_non_artificial_columns()
}

/// Rows with a positive entry in the column, together with their ratio `rhs / entry`.
fn ratios(tableau: &Tableau, column: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
    (0..tableau.nr_rows())
        .map(move |row| (row, tableau.entry(row, column)))
        .filter(|&(_, xij)| is_positive(xij))
        .map(move |(row, xij)| (row, tableau.constraint_value(row) / xij))
}

/// Simply pivot on the first column, which has a negative relative cost.
///
/// Ties in the ratio test are broken by the lowest index of the leaving basic variable. Together,
/// this is Bland's rule, which guarantees termination.
pub struct FirstProfitable;

impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)> {
        candidate_columns(tableau)
            .filter(|&column| !tableau.is_in_basis(column))
            .map(|column| (column, tableau.relative_cost(column)))
            .find(|&(_, cost)| is_negative(cost))
    }

    fn select_primal_pivot_row(&self, tableau: &Tableau, column: usize) -> Option<usize> {
        let mut min_values: Option<(usize, f64, usize)> = None;
        for (row, ratio) in ratios(tableau, column) {
            let leaving_column = tableau.basis_column(row);
            match min_values {
                Some((_, min_ratio, _)) if ratio > min_ratio + EPSILON => {},
                // Bland sorting
                Some((_, min_ratio, min_leaving_column))
                    if ratio >= min_ratio - EPSILON && leaving_column >= min_leaving_column => {},
                _ => min_values = Some((row, ratio, leaving_column)),
            }
        }

        min_values.map(|(row, _, _)| row)
    }
}

/// Pivot on the column with the most negative relative cost; Dantzig's rule.
///
/// Ties are broken by the lowest column index.
pub struct SteepestDescentAlongVariable;

impl PivotRule for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)> {
        let mut smallest = None;
        for (column, cost) in candidate_columns(tableau)
            .filter(|&column| !tableau.is_in_basis(column))
            .map(|column| (column, tableau.relative_cost(column)))
            .filter(|&(_, cost)| is_negative(cost)) {
            match smallest {
                Some((_, existing)) if cost >= existing => {},
                _ => smallest = Some((column, cost)),
            }
        }

        smallest
    }
}
