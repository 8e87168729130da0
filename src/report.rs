use prettytable::{Cell, Row, Table};

use crate::record::{FieldValue, Record};

/// Render records as a table, one column per field name, header row first.
/// Absent slots render as `<absent>` so they cannot be confused with an
/// empty string.
pub fn render_records(records: &[Record]) -> String {
    let mut table = Table::new();
    if let Some(first) = records.first() {
        table.add_row(Row::new(
            first.field_names().iter().map(|n| Cell::new(n)).collect(),
        ));
    }
    for record in records {
        table.add_row(Row::new(
            record
                .values()
                .iter()
                .map(|value| match value {
                    FieldValue::Present(s) => Cell::new(s),
                    FieldValue::Absent => Cell::new("<absent>"),
                })
                .collect(),
        ));
    }
    table.to_string()
}
