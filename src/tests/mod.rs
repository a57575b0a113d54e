//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn create_problem()`
//! * `fn initial_tableau()`
//! * `fn phase_two_tableau()`
//! * `fn final_tableau()`
use approx::assert_abs_diff_eq;


/// Compare two tableaus, including the cost row and right hand side column, entry by entry.
pub fn assert_tableau_eq(actual: &[Vec<f64>], expected: &[Vec<f64>]) {
    assert_eq!(actual.len(), expected.len(), "different number of rows");
    for (i, (actual_row, expected_row)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(actual_row.len(), expected_row.len(), "different number of columns in row {}", i);
        for (actual, expected) in actual_row.iter().zip(expected_row) {
            assert_abs_diff_eq!(*actual, *expected, epsilon = 1e-9);
        }
    }
}
