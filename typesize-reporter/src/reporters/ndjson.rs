use std::io::{stdout, BufWriter, Stdout, Write};

use json::{array, object, JsonValue};

use crate::{
    app::{
        error::RuntimeError,
        measurement::{Measurement, Record},
        runtime::Config,
    },
    reporters::reporter::{Reporter, Writer},
};

pub struct NDJSON<'a> {
    /// Data that is setup from the application's runtime
    pub config: &'a Config,
    /// Buffered handle to standard output
    pub out: BufWriter<Stdout>,
}

impl<'a> Reporter<'a> for NDJSON<'a> {
    fn new(config: &'a Config) -> Self {
        NDJSON {
            config,
            out: BufWriter::new(stdout()),
        }
    }

    fn iter_encodings(&mut self) -> Result<(), RuntimeError> {
        let config = self.config;
        for encoding in &config.options.encodings {
            let line = if config.options.fields {
                self.format_record(&config.measure_record(encoding)?)?
            } else {
                self.format_measurement(&config.measure(encoding)?)
            };
            NDJSON::write_to_output(&mut self.out, line)?;
        }
        self.out.flush().map_err(RuntimeError::OutputError)
    }
}

impl<'a> Writer<JsonValue> for NDJSON<'a> {
    fn format_measurement(&self, measurement: &Measurement) -> JsonValue {
        object! {
            encoding: measurement.encoding.as_str(),
            architecture: self.config.options.architecture.to_string(),
            size: measurement.size.bytes(),
            explicit: measurement.explicit,
            reason: measurement.reason.map(|reason| reason.to_string()),
        }
    }

    fn format_record(&self, record: &Record) -> Result<JsonValue, RuntimeError> {
        let mut fields = array![];
        for field in &record.fields {
            fields
                .push(self.format_measurement(field))
                .map_err(RuntimeError::JsonError)?;
        }

        Ok(object! {
            encoding: record.encoding.as_str(),
            architecture: self.config.options.architecture.to_string(),
            size: record.total.bytes(),
            fields: fields,
        })
    }

    fn write_to_output(out: &mut BufWriter<Stdout>, text: JsonValue) -> Result<(), RuntimeError> {
        out.write_all((text.dump() + "\n").as_bytes())
            .map_err(RuntimeError::OutputError)
    }
}
