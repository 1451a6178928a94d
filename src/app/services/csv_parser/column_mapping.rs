//! Header mapping from schema fields to source column indices

use crate::app::models::SchemaField;

/// Schema field to 0-based column index for one input file
///
/// Entries are kept in schema declaration order. A field missing from the
/// header has no entry and keeps its zero value in every parsed row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMapping {
    entries: Vec<(SchemaField, usize)>,
}

impl HeaderMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the column for a field, replacing any earlier entry for it
    pub fn insert(&mut self, field: SchemaField, index: usize) {
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = index,
            None => self.entries.push((field, index)),
        }
    }

    /// Get the column index for a schema field
    pub fn get_index(&self, field: SchemaField) -> Option<usize> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, index)| *index)
    }

    /// Check if a schema field was matched
    pub fn has_field(&self, field: SchemaField) -> bool {
        self.get_index(field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SchemaField, usize)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest column index referenced by the mapping
    pub fn max_index(&self) -> Option<usize> {
        self.entries.iter().map(|(_, index)| *index).max()
    }
}

impl FromIterator<(SchemaField, usize)> for HeaderMapping {
    fn from_iter<I: IntoIterator<Item = (SchemaField, usize)>>(iter: I) -> Self {
        let mut mapping = HeaderMapping::new();
        for (field, index) in iter {
            mapping.insert(field, index);
        }
        mapping
    }
}
