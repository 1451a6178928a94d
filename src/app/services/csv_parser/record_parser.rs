//! Conversion of split rows into enrollment records

use super::column_mapping::HeaderMapping;
use super::rows::split_fields;
use crate::app::models::{Enrollment, FieldType, FieldValue, SchemaField};
use crate::{Error, Result};

/// Parse an integer field, naming the field on failure
pub fn parse_integer_field(value: &str, field: SchemaField) -> Result<i32> {
    value
        .parse::<i32>()
        .map_err(|_| Error::field_type(field.name(), value))
}

/// Parse one row's fields into an enrollment using the header mapping
///
/// Integer fields must parse as base-10 `i32`; string fields are taken
/// verbatim. Fields without a mapping entry keep their zero value.
pub fn parse_enrollment_record(mapping: &HeaderMapping, fields: &[String]) -> Result<Enrollment> {
    let mut enrollment = Enrollment::default();

    for (field, index) in mapping.iter() {
        let raw = fields.get(index).ok_or_else(|| {
            Error::configuration(format!(
                "Row has {} fields but {} is mapped to column {}",
                fields.len(),
                field,
                index
            ))
        })?;

        let value = match field.field_type() {
            FieldType::Integer => FieldValue::Integer(parse_integer_field(raw, field)?),
            FieldType::String => FieldValue::Text(raw.as_str()),
        };
        field.assign(&mut enrollment, value)?;
    }

    Ok(enrollment)
}

/// Split and parse every row in order, stopping at the first failure
pub fn parse_enrollment_rows(mapping: &HeaderMapping, rows: &[String]) -> Result<Vec<Enrollment>> {
    let required = mapping.max_index().map_or(0, |index| index + 1);

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let fields = split_fields(row);
            if fields.len() < required {
                return Err(Error::row_length_mismatch(required, vec![i + 1]));
            }
            parse_enrollment_record(mapping, &fields)
        })
        .collect()
}
