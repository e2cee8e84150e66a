// Skill tokens: splitting comma-joined text, merging user sources into a
// SkillSet, and matching a SkillSet against the career catalog.

pub mod aggregator;
pub mod matcher;

/// Splits a comma-joined skill string into trimmed, non-empty tokens.
/// Original casing is kept; order follows the input.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_and_keeps_case() {
        assert_eq!(
            split_skills(" Python,SQL , machine learning"),
            vec!["Python", "SQL", "machine learning"]
        );
    }

    #[test]
    fn test_split_drops_empty_pieces() {
        assert_eq!(split_skills("rust, , ,go,"), vec!["rust", "go"]);
        assert!(split_skills(" , ,").is_empty());
        assert!(split_skills("").is_empty());
    }

    #[test]
    fn test_split_keeps_duplicates() {
        assert_eq!(split_skills("C, C"), vec!["C", "C"]);
    }
}
