//! # Utilities
//!
//! Helper functions for algorithms.
use std::iter::Peekable;
use std::slice::Iter;

/// Remove the elements at the given positions from a vector, keeping the order of the others.
///
/// # Arguments
///
/// * `vector`: `Vec` to remove elements from.
/// * `indices`: Positions to remove, sorted, without duplicates and within bounds.
pub(crate) fn remove_indices<T>(vector: &mut Vec<T>, indices: &[usize]) {
    debug_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]), "Indices not strictly increasing");
    debug_assert!(indices.last().is_none_or(|&last| last < vector.len()));

    let mut to_remove: Peekable<Iter<usize>> = indices.iter().peekable();
    let mut position = 0;
    vector.retain(|_| {
        let keep = to_remove.next_if_eq(&&position).is_none();
        position += 1;
        keep
    });
}
