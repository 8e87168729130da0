use arrow::array::{Array, StringArray};
use arrow::record_batch::RecordBatch;

use crate::errors::ValidationError;
use crate::record::{FieldNames, FieldValue, Record};

/// Record source over a fully materialized Arrow batch.
///
/// Every column must be `Utf8`: reading tabular data with an all-Utf8
/// nullable schema keeps missing cells as nulls instead of coercing them to
/// a numeric NaN, so absence survives to validation. Nulls map to
/// [`FieldValue::Absent`].
#[derive(Debug)]
pub struct BatchRecordSource {
    columns: Vec<StringArray>,
    names: FieldNames,
    row: usize,
    num_rows: usize,
}

impl BatchRecordSource {
    pub fn new(batch: &RecordBatch) -> Result<Self, ValidationError> {
        let schema = batch.schema();
        let names: FieldNames = schema
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect::<Vec<_>>()
            .into();
        let mut columns = Vec::with_capacity(batch.num_columns());
        for (field, column) in schema.fields().iter().zip(batch.columns()) {
            let array = column
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| {
                    ValidationError::ColumnTypeError(
                        field.name().clone(),
                        field.data_type().to_string(),
                    )
                })?;
            columns.push(array.clone());
        }
        Ok(Self {
            columns,
            names,
            row: 0,
            num_rows: batch.num_rows(),
        })
    }

    pub fn field_names(&self) -> &[String] {
        &self.names
    }
}

impl Iterator for BatchRecordSource {
    type Item = Result<Record, ValidationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.num_rows {
            return None;
        }
        let row = self.row;
        self.row += 1;
        let slots = self
            .columns
            .iter()
            .map(|column| {
                if column.is_null(row) {
                    FieldValue::Absent
                } else {
                    FieldValue::Present(column.value(row).to_string())
                }
            })
            .collect();
        Some(Ok(Record::new(self.names.clone(), slots)))
    }
}
