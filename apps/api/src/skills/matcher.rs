//! Skill matcher: filters the catalog down to careers sharing at least one
//! skill with the user.
//!
//! Algorithm:
//! 1. Lowercase and trim every user skill into a lookup set (blank tokens dropped)
//! 2. For each career, lowercase its required skills
//! 3. Keep the career if ANY required skill is in the lookup set
//!
//! The result is a stable filter: catalog order is preserved, never re-sorted.

use std::collections::HashSet;

use crate::catalog::{CareerCatalog, CareerRecord};

/// Returns every career for which at least one user skill case-insensitively
/// equals at least one of its required skills.
///
/// No user skills, or a career with no required skills, never match.
pub fn recommend<'a, I, S>(catalog: &'a CareerCatalog, user_skills: I) -> Vec<&'a CareerRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let wanted: HashSet<String> = user_skills
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    if wanted.is_empty() {
        return Vec::new();
    }

    catalog
        .records()
        .iter()
        .filter(|record| has_matching_skill(record, &wanted))
        .collect()
}

fn has_matching_skill(record: &CareerRecord, wanted: &HashSet<String>) -> bool {
    record
        .required_skills
        .iter()
        .any(|required| wanted.contains(&required.to_lowercase()))
}
