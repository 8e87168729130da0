pub mod batch_source;
pub mod csv_source;

pub use batch_source::BatchRecordSource;
pub use csv_source::{CsvRecordSource, CsvRecordSourceBuilder};
