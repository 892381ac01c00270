use std::io::{stdout, BufWriter, Stdout, Write};

use typesize::util::typesize::models::ResolvedSize;

use crate::{
    app::{
        error::RuntimeError,
        measurement::{Measurement, Record},
        runtime::Config,
    },
    reporters::reporter::{Reporter, Writer},
};

/// Indent for the fields of a record
const FIELD_INDENT: &str = "    ";

pub struct TXT<'a> {
    /// Data that is setup from the application's runtime
    pub config: &'a Config,
    /// Buffered handle to standard output
    pub out: BufWriter<Stdout>,
}

impl<'a> Reporter<'a> for TXT<'a> {
    fn new(config: &'a Config) -> Self {
        TXT {
            config,
            out: BufWriter::new(stdout()),
        }
    }

    fn iter_encodings(&mut self) -> Result<(), RuntimeError> {
        let config = self.config;
        for encoding in &config.options.encodings {
            let text = if config.options.fields {
                self.format_record(&config.measure_record(encoding)?)?
            } else {
                self.format_measurement(&config.measure(encoding)?)
            };
            TXT::write_to_output(&mut self.out, text)?;
        }
        self.out.flush().map_err(RuntimeError::OutputError)
    }
}

impl<'a> Writer<String> for TXT<'a> {
    fn format_measurement(&self, measurement: &Measurement) -> String {
        let mut out_s = String::new();
        out_s.push_str(&measurement.encoding);
        out_s.push_str(": ");
        out_s.push_str(&self.format_size(&measurement.size));

        if measurement.explicit {
            out_s.push_str(" (explicit)");
        } else if let Some(reason) = &measurement.reason {
            out_s.push_str(&format!(" ({reason})"));
        }

        out_s.push('\n');
        out_s
    }

    fn format_record(&self, record: &Record) -> Result<String, RuntimeError> {
        let mut out_s = String::new();
        out_s.push_str(&record.encoding);
        out_s.push_str(": ");
        out_s.push_str(&self.format_size(&record.total));
        out_s.push('\n');

        record.fields.iter().for_each(|field| {
            out_s.push_str(FIELD_INDENT);
            out_s.push_str(&self.format_measurement(field));
        });

        Ok(out_s)
    }

    fn write_to_output(out: &mut BufWriter<Stdout>, text: String) -> Result<(), RuntimeError> {
        out.write_all(text.as_bytes())
            .map_err(RuntimeError::OutputError)
    }
}

impl<'a> TXT<'a> {
    fn format_size(&self, size: &ResolvedSize) -> String {
        match size {
            ResolvedSize::Bytes(1) => String::from("1 byte"),
            ResolvedSize::Bytes(bytes) => format!("{bytes} bytes"),
            ResolvedSize::Indeterminate => size.to_string(),
        }
    }
}
