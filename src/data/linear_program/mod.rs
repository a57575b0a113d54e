//! # Representing linear programs
//!
//! This module contains the representation of linear programs as they are provided by the user,
//! and of the results reported back.
pub mod elements;
pub mod general_form;
pub mod solution;
