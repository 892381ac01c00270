/*!
Errors that can happen during the application's runtime
*/

use std::{
    fmt::{Display, Formatter, Result},
    io::Error as IoError,
};

use json::Error as JsonError;
use typesize::error::encoding::EncodingError;

use crate::app::options::{OPTION_EXPLICIT_SIZE, OPTION_STRICT};

/// Errors that can happen during the application's runtime
#[derive(Debug)]
pub enum RuntimeError {
    InvalidOptions(String),
    EncodingError(String, EncodingError),
    Indeterminate(String),
    OutputError(IoError),
    JsonError(JsonError),
}

impl Display for RuntimeError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            RuntimeError::InvalidOptions(why) => write!(fmt, "Invalid options!\n{why}"),
            RuntimeError::EncodingError(encoding, why) => write!(fmt, "{encoding}: {why}"),
            RuntimeError::Indeterminate(encoding) => {
                write!(
                    fmt,
                    "Size of `{encoding}` is indeterminate!\nPass `--{OPTION_EXPLICIT_SIZE}` to substitute a size or omit `--{OPTION_STRICT}` to ignore\n"
                )
            }
            RuntimeError::OutputError(why) => write!(fmt, "Unable to write output: {why}"),
            RuntimeError::JsonError(why) => write!(fmt, "Unable to build JSON: {why}"),
        }
    }
}
