use typesize::util::typesize::{
    models::{EncodingToken, ResolvedSize},
    resolver::{element_token, SizeResolver},
};

use crate::{
    app::{
        error::RuntimeError,
        measurement::{Measurement, Record},
        options::{Options, ReportFormat},
    },
    reporters::{ndjson::NDJSON, reporter::Reporter, txt::TXT},
};

/// Stores the application state and handles application lifecycle
pub struct Config {
    /// App configuration options
    pub options: Options,
    /// Resolves sizes for the selected architecture
    pub resolver: SizeResolver,
}

impl Config {
    pub fn new(options: Options) -> Self {
        let resolver = SizeResolver::new(options.architecture);
        Config { options, resolver }
    }

    /// Resolve a single encoding, applying the explicit substitute and strict mode
    pub fn measure(&self, encoding: &str) -> Result<Measurement, RuntimeError> {
        let resolved = self.resolver.resolve(encoding);
        self.apply_policy(encoding.as_bytes(), resolved)
    }

    /// Split a record encoding into fields and resolve each of them
    pub fn measure_record(&self, encoding: &str) -> Result<Record, RuntimeError> {
        let fields = self
            .resolver
            .resolve_fields(encoding.as_bytes())
            .map_err(|why| RuntimeError::EncodingError(encoding.to_string(), why))?;

        let measurements = fields
            .iter()
            .map(|field| self.apply_policy(field.encoding, field.size))
            .collect::<Result<Vec<Measurement>, RuntimeError>>()?;

        Ok(Record::new(encoding.to_string(), measurements))
    }

    fn apply_policy(
        &self,
        encoding: &[u8],
        resolved: ResolvedSize,
    ) -> Result<Measurement, RuntimeError> {
        let encoding_text = String::from_utf8_lossy(encoding).to_string();
        let reason = match (resolved, element_token(encoding)) {
            (ResolvedSize::Indeterminate, EncodingToken::Unsupported(kind)) => Some(kind),
            _ => None,
        };

        let (size, explicit) = match (resolved, self.options.explicit_size) {
            (ResolvedSize::Indeterminate, Some(bytes)) => (ResolvedSize::Bytes(bytes), true),
            (ResolvedSize::Indeterminate, None) if self.options.strict => {
                return Err(RuntimeError::Indeterminate(encoding_text))
            }
            (resolved, _) => (resolved, false),
        };

        Ok(Measurement {
            encoding: encoding_text,
            size,
            explicit,
            reason,
        })
    }

    /// Report on every encoding in the selected format
    pub fn start(&self) -> Result<(), RuntimeError> {
        match self.options.format {
            ReportFormat::TXT => TXT::new(self).iter_encodings()?,
            ReportFormat::NDJSON => NDJSON::new(self).iter_encodings()?,
        }
        Ok(())
    }
}
