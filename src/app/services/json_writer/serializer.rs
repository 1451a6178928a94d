//! Fixed-layout JSON rendering of enrollments
//!
//! Downstream consumers read this exact text, so the layout is produced line
//! by line rather than through a general JSON encoder:
//!
//! ```text
//! {
//! "data": [
//! {
//! "UserId": "u1",
//! ...
//! "InsuranceCompany": "Acme"
//! },
//! ...
//! ]
//! }
//! ```

use crate::app::models::{ENROLLMENT_SCHEMA, Enrollment, FieldValue};
use crate::constants::{DATA_KEY, FIELD_LAST_LINE_END, FIELD_SEPARATOR_LINE_END, LINE_ENDING};

/// Render enrollments as an output document
pub fn serialize_enrollments(enrollments: &[Enrollment]) -> String {
    let mut out = String::new();
    push_line(&mut out, "{");
    push_line(&mut out, &format!("\"{}\": [", DATA_KEY));

    for (i, enrollment) in enrollments.iter().enumerate() {
        push_line(&mut out, "{");

        for (j, field) in ENROLLMENT_SCHEMA.iter().enumerate() {
            out.push('"');
            out.push_str(field.name());
            out.push_str("\": ");
            out.push_str(&property_value(field.value(enrollment)));
            out.push_str(json_line_end(ENROLLMENT_SCHEMA.len(), j));
        }

        push_line(&mut out, closing_bracket(enrollments.len(), i));
    }

    push_line(&mut out, "]");
    push_line(&mut out, "}");
    out
}

/// Render one field value: text quoted, integers bare
pub fn property_value(value: FieldValue<'_>) -> String {
    match value {
        FieldValue::Integer(v) => v.to_string(),
        FieldValue::Text(s) => format!("\"{}\"", escape_text(s)),
    }
}

/// Terminator after field `iteration` of `property_count` fields
pub fn json_line_end(property_count: usize, iteration: usize) -> &'static str {
    if iteration + 1 < property_count {
        FIELD_SEPARATOR_LINE_END
    } else {
        FIELD_LAST_LINE_END
    }
}

/// Closing brace for record `iteration` of `record_count` records
pub fn closing_bracket(record_count: usize, iteration: usize) -> &'static str {
    if iteration + 1 < record_count { "}," } else { "}" }
}

// Quotes and backslashes would otherwise end the string early
fn escape_text(s: &str) -> std::borrow::Cow<'_, str> {
    if s.contains(['"', '\\']) {
        std::borrow::Cow::Owned(s.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        std::borrow::Cow::Borrowed(s)
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str(LINE_ENDING);
}
