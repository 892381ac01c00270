use std::io::{BufWriter, Stdout};

use crate::app::{
    error::RuntimeError,
    measurement::{Measurement, Record},
    runtime::Config,
};

/// Defines behavior for iterating over the requested encodings and writing their sizes
pub trait Reporter<'a> {
    /// Create a new reporter with references to the cached data
    fn new(config: &'a Config) -> Self;
    /// Begin iterating over the encodings given on the command line
    fn iter_encodings(&mut self) -> Result<(), RuntimeError>;
}

/// Defines behavior for formatting resolved sizes to the desired output format
pub(super) trait Writer<T> {
    /// Format the size of a single encoding
    fn format_measurement(&self, measurement: &Measurement) -> T;
    /// Format the size of a record and each of its fields
    fn format_record(&self, record: &Record) -> Result<T, RuntimeError>;
    /// Write formatted output
    fn write_to_output(out: &mut BufWriter<Stdout>, text: T) -> Result<(), RuntimeError>;
}
