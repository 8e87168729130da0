use std::fmt;
use std::sync::Arc;

/// Ordered field-name set shared by every record of a validation run.
pub type FieldNames = Arc<[String]>;

/// A single field slot: either a tokenized string value or the absence
/// marker a short row leaves behind. `Absent` is distinct from an empty
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Present(String),
    Absent,
}

impl FieldValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Present(s) => Some(s.as_str()),
            FieldValue::Absent => None,
        }
    }
}

/// One parsed row: a mapping from the shared field-name set to value slots,
/// in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    names: FieldNames,
    slots: Vec<FieldValue>,
}

impl Record {
    pub fn new(names: FieldNames, slots: Vec<FieldValue>) -> Self {
        debug_assert_eq!(names.len(), slots.len());
        Self { names, slots }
    }

    pub fn field_names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.slots
    }

    /// Look up a slot by field name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        let index = self.names.iter().position(|n| n == name)?;
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.names
            .iter()
            .map(|n| n.as_str())
            .zip(self.slots.iter())
    }

    /// A record is complete when no slot carries the absence marker.
    pub fn is_complete(&self) -> bool {
        !self.slots.iter().any(FieldValue::is_absent)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Display for Record {
    /// Renders as `{a: "1", b: <absent>}`, keeping the absence marker
    /// visibly distinct from an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match value {
                FieldValue::Present(s) => write!(f, "{}: {:?}", name, s)?,
                FieldValue::Absent => write!(f, "{}: <absent>", name)?,
            }
        }
        write!(f, "}}")
    }
}
