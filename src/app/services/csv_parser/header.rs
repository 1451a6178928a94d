//! Header row recognition and schema matching
//!
//! A header column belongs to a schema field when its lower-cased text starts
//! with the first [`HEADER_PREFIX_LEN`] lower-cased characters of the field
//! name, so `user_id`, `UserID` and `user` all match `UserId`.

use super::column_mapping::HeaderMapping;
use crate::app::models::{ENROLLMENT_SCHEMA, SchemaField};
use crate::constants::HEADER_PREFIX_LEN;
use crate::{Error, Result};
use tracing::debug;

/// True when no field of the row parses as an integer
pub fn looks_like_header(fields: &[String]) -> bool {
    fields.iter().all(|field| field.parse::<i32>().is_err())
}

/// Lower-cased matching prefix of a schema field name
pub fn field_prefix(field: SchemaField) -> Result<String> {
    let name = field.name();
    if name.chars().count() < HEADER_PREFIX_LEN {
        return Err(Error::configuration(format!(
            "Schema field name '{}' is shorter than {} characters",
            name, HEADER_PREFIX_LEN
        )));
    }
    Ok(name
        .chars()
        .take(HEADER_PREFIX_LEN)
        .collect::<String>()
        .to_lowercase())
}

/// Index of the first header field matching `field`, if any
pub fn match_header(header_fields: &[String], field: SchemaField) -> Result<Option<usize>> {
    let prefix = field_prefix(field)?;
    Ok(header_fields
        .iter()
        .position(|header| header.to_lowercase().starts_with(&prefix)))
}

/// Build the schema mapping for a header row
///
/// Each schema field is matched independently, so two fields may map to the
/// same column. Unmatched fields are left out of the mapping.
pub fn build_mapping(header_fields: &[String]) -> Result<HeaderMapping> {
    let matches = ENROLLMENT_SCHEMA
        .into_iter()
        .map(|field| Ok((field, match_header(header_fields, field)?)))
        .collect::<Result<Vec<_>>>()?;

    Ok(matches
        .into_iter()
        .filter_map(|(field, index)| {
            let index = index?;
            debug!(
                "Mapped {} to column {} ('{}')",
                field, index, header_fields[index]
            );
            Some((field, index))
        })
        .collect())
}
