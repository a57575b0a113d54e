//! # Reading and writing of linear programs
//!
//! This module provides read and write functionality for linear program formats.
use std::fs;
use std::path::Path;

use crate::algorithm::Method;
use crate::data::linear_program::general_form::LinearProgram;
use crate::io::error::ImportError;

pub mod error;
pub mod json;

pub use json::parse;

/// A problem as read from a file, with the method that the file asks for, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportedProblem {
    /// The problem itself.
    pub problem: LinearProgram,
    /// Method requested by the file.
    pub method: Option<Method>,
}

/// Import a problem from a file.
///
/// Currently only supports the JSON filetype.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, there is an inconsistency in
/// the problem file, etc. an error type is returned.
pub fn import(file_path: &Path) -> Result<ImportedProblem, ImportError> {
    // Choose the right parser
    let parser = match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("json" | "JSON") => json::parse,
            Some(extension_string) => return Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path,
            ))),
            None => return Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension,
            ))),
        },
        None => return Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path,
        ))),
    };

    let program = fs::read_to_string(file_path)?;
    parser(&program)
}
