//! Core data structures for enrollment processing
//!
//! Defines the [`Enrollment`] record and the static schema table that
//! describes its fields. Header matching, row parsing and serialization all
//! work from [`ENROLLMENT_SCHEMA`] rather than from the struct layout, so the
//! table order is the output field order.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One insurance enrollment record
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Enrollment {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub version: i32,
    pub insurance_company: String,
}

impl Enrollment {
    /// Create a fully populated enrollment
    pub fn new(
        user_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        version: i32,
        insurance_company: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            version,
            insurance_company: insurance_company.into(),
        }
    }

    /// Natural key identifying the same enrollment across versions
    pub fn natural_key(&self) -> (&str, &str) {
        (&self.user_id, &self.insurance_company)
    }
}

/// Semantic type of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    String,
    Integer,
}

/// A value read from or written to an enrollment field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i32),
}

/// One named, typed slot of the enrollment record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaField {
    UserId,
    FirstName,
    LastName,
    Version,
    InsuranceCompany,
}

/// The enrollment schema in declaration order
pub const ENROLLMENT_SCHEMA: [SchemaField; 5] = [
    SchemaField::UserId,
    SchemaField::FirstName,
    SchemaField::LastName,
    SchemaField::Version,
    SchemaField::InsuranceCompany,
];

impl SchemaField {
    /// Field name as it appears in output documents
    pub fn name(self) -> &'static str {
        match self {
            SchemaField::UserId => "UserId",
            SchemaField::FirstName => "FirstName",
            SchemaField::LastName => "LastName",
            SchemaField::Version => "Version",
            SchemaField::InsuranceCompany => "InsuranceCompany",
        }
    }

    pub fn field_type(self) -> FieldType {
        match self {
            SchemaField::Version => FieldType::Integer,
            _ => FieldType::String,
        }
    }

    /// Read this field out of an enrollment
    pub fn value(self, enrollment: &Enrollment) -> FieldValue<'_> {
        match self {
            SchemaField::UserId => FieldValue::Text(&enrollment.user_id),
            SchemaField::FirstName => FieldValue::Text(&enrollment.first_name),
            SchemaField::LastName => FieldValue::Text(&enrollment.last_name),
            SchemaField::Version => FieldValue::Integer(enrollment.version),
            SchemaField::InsuranceCompany => FieldValue::Text(&enrollment.insurance_company),
        }
    }

    /// Assign a value to this field of an enrollment
    ///
    /// The value's type must match [`SchemaField::field_type`].
    pub fn assign(self, enrollment: &mut Enrollment, value: FieldValue<'_>) -> Result<()> {
        match (self, value) {
            (SchemaField::Version, FieldValue::Integer(v)) => enrollment.version = v,
            (SchemaField::UserId, FieldValue::Text(s)) => enrollment.user_id = s.to_string(),
            (SchemaField::FirstName, FieldValue::Text(s)) => enrollment.first_name = s.to_string(),
            (SchemaField::LastName, FieldValue::Text(s)) => enrollment.last_name = s.to_string(),
            (SchemaField::InsuranceCompany, FieldValue::Text(s)) => {
                enrollment.insurance_company = s.to_string()
            }
            (field, FieldValue::Text(s)) => return Err(Error::field_type(field.name(), s)),
            (field, FieldValue::Integer(v)) => {
                return Err(Error::configuration(format!(
                    "Cannot assign integer {} to text field {}",
                    v,
                    field.name()
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for SchemaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
