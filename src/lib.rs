pub mod config;
pub mod errors;
pub mod record;
pub mod report;
pub mod sources;
pub mod validator;

pub use config::{ValidatorConfig, ValidatorConfigBuilder};
pub use errors::ValidationError;
pub use record::{FieldNames, FieldValue, Record};
pub use sources::{BatchRecordSource, CsvRecordSource, CsvRecordSourceBuilder};
pub use validator::RowValidator;
