//! # Strategies
//!
//! Decisions that can be made in different ways during the Simplex Method.
pub mod pivot_rule;
