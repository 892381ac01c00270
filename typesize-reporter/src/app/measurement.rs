/*!
 Sizes resolved for the encodings given on the command line, ready to be formatted by a reporter.
*/

use typesize::util::typesize::models::{ResolvedSize, UnsupportedKind};

/// The size reported for a single encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// The encoding as given by the user
    pub encoding: String,
    /// The reported size, after any explicit substitute was applied
    pub size: ResolvedSize,
    /// If true, the encoding was indeterminate and `size` is the explicit substitute
    pub explicit: bool,
    /// Why the encoding could not be sized, if it is an unsupported type
    pub reason: Option<UnsupportedKind>,
}

/// The sizes reported for a record encoding and each of its fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The record encoding as given by the user
    pub encoding: String,
    /// Every field of the record, in order
    pub fields: Vec<Measurement>,
    /// The sum of the reported field sizes
    pub total: ResolvedSize,
}

impl Record {
    pub fn new(encoding: String, fields: Vec<Measurement>) -> Self {
        let total = ResolvedSize::total(fields.iter().map(|field| field.size));
        Self {
            encoding,
            fields,
            total,
        }
    }
}
