//! Company grouping and ordering of enrollments

use crate::app::models::Enrollment;
use std::collections::HashSet;

/// Enrollments of one insurance company, in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyGroup {
    pub company: String,
    pub enrollments: Vec<Enrollment>,
}

/// Enrollments of `company` sorted by last name, then first name
///
/// Names are compared ordinally (byte order). The sort is stable, so
/// enrollments with equal names keep their relative order.
pub fn sort_for_company(enrollments: &[Enrollment], company: &str) -> Vec<Enrollment> {
    let mut selected: Vec<Enrollment> = enrollments
        .iter()
        .filter(|e| e.insurance_company == company)
        .cloned()
        .collect();

    selected.sort_by(|a, b| {
        a.last_name
            .cmp(&b.last_name)
            .then_with(|| a.first_name.cmp(&b.first_name))
    });
    selected
}

/// Distinct companies in order of first appearance
pub fn distinct_companies(enrollments: &[Enrollment]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut companies = Vec::new();
    for enrollment in enrollments {
        if seen.insert(enrollment.insurance_company.as_str()) {
            companies.push(enrollment.insurance_company.clone());
        }
    }
    companies
}

/// One sorted group per distinct company, in order of first appearance
pub fn group_by_company(enrollments: &[Enrollment]) -> Vec<CompanyGroup> {
    distinct_companies(enrollments)
        .into_iter()
        .map(|company| {
            let sorted = sort_for_company(enrollments, &company);
            CompanyGroup {
                company,
                enrollments: sorted,
            }
        })
        .collect()
}
