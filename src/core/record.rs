use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::error::IifError;
use super::types::RecordType;

/// One named, textual IIF cell.
///
/// The name becomes a column of the `!TYPE` header line, the value a cell of
/// the data line. An empty value is valid and renders as an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<'a> {
    /// Column name (e.g. "NAME", "ACCNTTYPE").
    pub name: Cow<'a, str>,
    /// Cell value, written verbatim.
    pub value: Cow<'a, str>,
}

impl<'a> Field<'a> {
    pub fn new(name: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A value that can be written as one IIF line.
///
/// Implementors return their fields in a fixed order; every instance of the
/// same shape must return the same names in the same order so that all
/// records of one type share a header.
///
/// ```
/// use iif::core::{Field, Record, RecordType};
///
/// struct Class {
///     name: String,
/// }
///
/// impl Record for Class {
///     fn record_type(&self) -> RecordType {
///         RecordType::Class
///     }
///
///     fn fields(&self) -> Vec<Field<'_>> {
///         vec![Field::new("NAME", self.name.as_str())]
///     }
/// }
/// ```
pub trait Record {
    /// The record's IIF type tag.
    fn record_type(&self) -> RecordType;

    /// The record's fields in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

impl<T: Record + ?Sized> Record for &T {
    fn record_type(&self) -> RecordType {
        (**self).record_type()
    }

    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn record_type(&self) -> RecordType {
        (**self).record_type()
    }

    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

/// A record whose shape is only known at runtime (e.g. loaded from JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// IIF type tag.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Fields in output order.
    pub fields: Vec<RawField>,
}

/// Owned name/value pair of a [`RawRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawField {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl RawRecord {
    pub fn new(record_type: RecordType) -> Self {
        Self {
            record_type,
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(RawField {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

impl Record for RawRecord {
    fn record_type(&self) -> RecordType {
        self.record_type
    }

    fn fields(&self) -> Vec<Field<'_>> {
        self.fields
            .iter()
            .map(|f| Field::new(f.name.as_str(), f.value.as_str()))
            .collect()
    }
}

/// Extract the type tag and field list of a record.
///
/// Fails if the record has no fields or a field name is empty or contains a
/// tab or line break, since such a name cannot form a header column.
/// Values are passed through unchecked.
pub fn adapt<R: Record + ?Sized>(record: &R) -> Result<(RecordType, Vec<Field<'_>>), IifError> {
    let record_type = record.record_type();
    let fields = record.fields();

    if fields.is_empty() {
        return Err(IifError::adapter(format!(
            "{record_type} record has no fields"
        )));
    }

    for (i, field) in fields.iter().enumerate() {
        if field.name.is_empty() {
            return Err(IifError::adapter(format!(
                "{record_type} field {} has no name",
                i + 1
            )));
        }
        if field.name.contains(['\t', '\n', '\r']) {
            return Err(IifError::adapter(format!(
                "{record_type} field name '{}' contains a tab or line break",
                field.name.escape_default()
            )));
        }
    }

    Ok((record_type, fields))
}
