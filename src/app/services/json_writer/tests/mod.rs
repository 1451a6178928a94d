//! Tests for the json_writer module


use crate::app::models::Enrollment;
use crate::app::services::record_processor::CompanyGroup;

/// Create a company group from (user id, first, last, version) tuples
pub fn create_test_group(company: &str, people: &[(&str, &str, &str, i32)]) -> CompanyGroup {
    CompanyGroup {
        company: company.to_string(),
        enrollments: people
            .iter()
            .map(|(id, first, last, version)| {
                Enrollment::new(*id, *first, *last, *version, company)
            })
            .collect(),
    }
}

/// Names of all entries in a directory
pub fn dir_entries(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
