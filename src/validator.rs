use rayon::prelude::*;

use crate::config::ValidatorConfig;
use crate::errors::ValidationError;
use crate::record::{FieldValue, Record};
use crate::report;

/// Validates tokenized records for completeness and quote hygiene.
///
/// Consumes its input strictly in order and releases the validated rows as
/// a single batch only once the whole sequence has passed; a failure on any
/// row means no row is released, since a later mis-tokenized row can
/// retroactively invalidate the interpretation of earlier ones.
pub struct RowValidator {
    config: ValidatorConfig,
    verbose: bool,
}

impl Default for RowValidator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl RowValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            verbose: false,
        }
    }

    /// Render every validated record to stdout on success. Independent of
    /// the returned sequence: enabling it never changes pass/fail semantics
    /// and the rows are still returned to the caller.
    pub fn with_verbose(self, verbose: bool) -> Self {
        Self { verbose, ..self }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a record sequence, returning the full sequence in input
    /// order or the error for the first offending record.
    pub fn validate<I>(&self, records: I) -> Result<Vec<Record>, ValidationError>
    where
        I: IntoIterator<Item = Record>,
    {
        self.validate_source(records.into_iter().map(Ok))
    }

    /// Validate records from a fallible source; a source error surfaces
    /// before any check runs for that row.
    pub fn validate_source<I>(&self, records: I) -> Result<Vec<Record>, ValidationError>
    where
        I: IntoIterator<Item = Result<Record, ValidationError>>,
    {
        let validated = self.run(records)?;
        if self.verbose {
            // Rows are only rendered once the entire sequence has passed
            print!("{}", report::render_records(&validated));
        }
        Ok(validated)
    }

    /// Validate independent record sequences in parallel. Each partition
    /// keeps the atomic commit contract on its own; row indices in errors
    /// are partition-local, and the earliest failing partition wins.
    pub fn validate_partitions(
        &self,
        partitions: Vec<Vec<Record>>,
    ) -> Result<Vec<Vec<Record>>, ValidationError> {
        let results: Vec<Result<Vec<Record>, ValidationError>> = partitions
            .into_par_iter()
            .map(|partition| self.run(partition.into_iter().map(Ok)))
            .collect();

        let mut validated = Vec::with_capacity(results.len());
        for result in results {
            validated.push(result?);
        }
        if self.verbose {
            for partition in &validated {
                print!("{}", report::render_records(partition));
            }
        }
        Ok(validated)
    }

    fn run<I>(&self, records: I) -> Result<Vec<Record>, ValidationError>
    where
        I: IntoIterator<Item = Result<Record, ValidationError>>,
    {
        let mut validated = Vec::new();
        for (row_index, record) in records.into_iter().enumerate() {
            let record = record?;
            if !record.is_complete() {
                return Err(ValidationError::IncompleteRecord { row_index, record });
            }
            let corrupt = record.values().iter().any(|value| match value {
                FieldValue::Present(s) => self.has_unescaped_quote(s),
                FieldValue::Absent => false,
            });
            if corrupt {
                return Err(ValidationError::UnescapedQuoteChar { row_index, record });
            }
            validated.push(record);
        }
        Ok(validated)
    }

    /// Escape-aware unescaped-quote predicate.
    ///
    /// Scans the value once, tracking whether the previous character was
    /// the escape char. A quote char not immediately preceded by the escape
    /// char is content the tokenizer should already have consumed: a run of
    /// one is a plain corruption signal, a run of up to
    /// [`ValidatorConfig::max_quote_run`] is the doubled-quote idiom leaking
    /// through a broken tokenizer, and a longer run contains such a run.
    /// Every unescaped quote therefore fails the value.
    fn has_unescaped_quote(&self, value: &str) -> bool {
        let quote = self.config.quote_char();
        let escape = self.config.escape_char();
        let mut prev: Option<char> = None;
        for c in value.chars() {
            if c == quote && prev != Some(escape) {
                return true;
            }
            prev = Some(c);
        }
        false
    }
}
