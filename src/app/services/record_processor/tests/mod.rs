//! Tests for record processor module
//!
//! Unit tests for deduplication, company ordering and the processing pipeline.


use crate::app::models::Enrollment;

/// Create a test enrollment with the given key, version and names
pub fn create_test_enrollment(
    user_id: &str,
    company: &str,
    version: i32,
    first_name: &str,
    last_name: &str,
) -> Enrollment {
    Enrollment::new(user_id, first_name, last_name, version, company)
}

/// Create an enrollment where only the natural key and version matter
pub fn create_versioned_enrollment(user_id: &str, company: &str, version: i32) -> Enrollment {
    create_test_enrollment(user_id, company, version, "First", "Last")
}

/// Create a mixed batch covering duplicates across two companies
pub fn create_mixed_enrollments() -> Vec<Enrollment> {
    vec![
        create_test_enrollment("u1", "Acme", 1, "Ada", "Lovelace"),
        create_test_enrollment("u2", "Globex", 1, "Alan", "Turing"),
        create_test_enrollment("u1", "Acme", 3, "Ada", "King"),
        create_test_enrollment("u3", "Acme", 2, "Grace", "Hopper"),
        create_test_enrollment("u1", "Globex", 1, "Ada", "Lovelace"),
        create_test_enrollment("u1", "Acme", 2, "Ada", "Byron"),
    ]
}
