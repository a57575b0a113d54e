//! # A tableau simplex solver
//!
//! Small linear programs over nonnegative variables are solved with the Simplex Method on a dense
//! tableau, as described in the book Combinatorial Optimization by Christos H. Papadimitriou and
//! Kenneth Steiglitz. Three variants are available: the standard method for problems with an
//! obvious starting basis, the Big-M method and the two-phase method. Every tableau that is visited
//! is recorded, such that the steps of the algorithm can be inspected afterwards.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
