//! JSON output for company groups
//!
//! - [`serializer`] - Fixed-layout document rendering
//! - [`writer`] - Concurrent, atomic per-company file writes

pub mod serializer;
pub mod writer;

#[cfg(test)]
mod tests;

pub use serializer::{closing_bracket, json_line_end, property_value, serialize_enrollments};
pub use writer::{JsonWriter, WrittenFile, validate_company_name, write_atomic};
