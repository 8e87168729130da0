use thiserror::Error;

use crate::record::Record;

#[derive(Error, Debug)]
pub enum ValidationError {
    /// A record ended before every field received a value (short row)
    #[error("absent field (incomplete row) at row {row_index}: {record}")]
    IncompleteRecord { row_index: usize, record: Record },

    /// A field value carries a quote char the tokenizer should have consumed
    #[error("unescaped quote char found at row {row_index}: {record}")]
    UnescapedQuoteChar { row_index: usize, record: Record },

    /// Escape and quote chars must be distinct
    #[error("escape char and quote char must differ, both are '{0}'")]
    ConfigError(char),

    /// A batch column holds something other than strings
    #[error("column '{0}' is not a string column (found {1})")]
    ColumnTypeError(String, String),

    /// The underlying CSV reader failed to produce a row
    #[error("CSV reading error: {0}")]
    CsvError(#[from] csv::Error),

    /// The Arrow kernel produced an error (e.g., schema mismatch)
    #[error("Arrow computation error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// CSV reading or IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
