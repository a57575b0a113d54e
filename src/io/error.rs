//! # Error reporting for reading of linear program files
//!
//! A collection of enums describing any problems encountered during reading and parsing.
use std::io;

use thiserror::Error;

use crate::data::linear_program::general_form::InputShapeError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read the problem file: {0}")]
    IO(#[from] io::Error),
    /// Contents of the file could not be parsed.
    ///
    /// This includes unknown method names and constraint types.
    #[error("could not parse the problem file: {0}")]
    Parse(#[from] serde_json::Error),
    /// The numbers in the file don't describe a linear program of consistent shape.
    #[error("inconsistent problem: {0}")]
    LinearProgram(#[from] InputShapeError),
}
