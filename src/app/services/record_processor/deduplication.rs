//! Version deduplication for enrollments
//!
//! Enrollments sharing a natural key (user id, insurance company) are the
//! same enrollment at different versions; only the highest version survives.

use crate::app::models::Enrollment;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, info};

/// Collapse each natural key to its highest-versioned enrollment
///
/// Surviving enrollments keep the position where their key was first seen.
/// When two enrollments share the maximum version, the one encountered last
/// wins.
pub fn deduplicate_enrollments(enrollments: Vec<Enrollment>) -> Vec<Enrollment> {
    let input_count = enrollments.len();
    let mut positions: HashMap<(String, String), usize> = HashMap::new();
    let mut deduplicated: Vec<Enrollment> = Vec::new();

    for enrollment in enrollments {
        let key = (
            enrollment.user_id.clone(),
            enrollment.insurance_company.clone(),
        );

        match positions.entry(key) {
            Entry::Occupied(entry) => {
                let kept = &mut deduplicated[*entry.get()];
                if enrollment.version >= kept.version {
                    debug!(
                        "Replacing version {} of {:?} with version {}",
                        kept.version,
                        entry.key(),
                        enrollment.version
                    );
                    *kept = enrollment;
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(deduplicated.len());
                deduplicated.push(enrollment);
            }
        }
    }

    info!(
        "Deduplication complete: {} enrollments collapsed, {} remaining",
        input_count - deduplicated.len(),
        deduplicated.len()
    );

    deduplicated
}

/// Count keys and duplicates in a collection of enrollments
///
/// Returns (distinct_keys, keys_with_duplicates, total_duplicates).
pub fn analyze_duplicate_patterns(enrollments: &[Enrollment]) -> (usize, usize, usize) {
    let mut groups: HashMap<(&str, &str), usize> = HashMap::new();
    for enrollment in enrollments {
        *groups.entry(enrollment.natural_key()).or_insert(0) += 1;
    }

    let distinct_keys = groups.len();
    let duplicate_groups = groups.values().filter(|&&count| count > 1).count();
    let total_duplicates = groups.values().map(|&count| count - 1).sum();

    (distinct_keys, duplicate_groups, total_duplicates)
}
