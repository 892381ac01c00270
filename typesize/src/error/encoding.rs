/*!
 Errors that can happen when walking a record of type encodings or consuming a resolved size.
*/

use std::fmt::{Display, Formatter, Result};

/// Errors that can happen when walking type encodings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The size of the encoding could not be determined and no fallback was provided
    IndeterminateSize,
    /// There is no field to read at the given index
    EmptyField(usize),
    /// The bracket at the given index is never closed
    Unbalanced(usize, u8),
    /// The closing bracket at the given index does not match the innermost open bracket
    UnexpectedCloser(usize, u8),
    /// The quoted name starting at the given index is never closed
    UnterminatedName(usize),
    /// The pointer at the given index is not followed by a pointee encoding
    MissingPointee(usize),
}

impl Display for EncodingError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            EncodingError::IndeterminateSize => write!(fmt, "Size of type encoding is indeterminate!"),
            EncodingError::EmptyField(idx) => write!(fmt, "No field encoding at index {idx}!"),
            EncodingError::Unbalanced(idx, opener) => {
                write!(fmt, "`{}` at index {idx} is never closed!", char::from(*opener))
            }
            EncodingError::UnexpectedCloser(idx, closer) => {
                write!(fmt, "Unexpected `{}` at index {idx}!", char::from(*closer))
            }
            EncodingError::UnterminatedName(idx) => {
                write!(fmt, "Quoted name at index {idx} is never closed!")
            }
            EncodingError::MissingPointee(idx) => {
                write!(fmt, "Pointer at index {idx} has no pointee encoding!")
            }
        }
    }
}
