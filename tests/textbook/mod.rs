//! # Small problems from textbooks and course material
//!
//! Each problem is stored as a JSON file in this directory, in the same layout that the binary
//! reads.
use std::path::{Path, PathBuf};

use simplex_tableau::io::{import, ImportedProblem};

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("json")
}

fn read(name: &str) -> ImportedProblem {
    import(&get_test_file_path(name)).unwrap()
}
