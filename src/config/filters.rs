//! Include/exclude filter rules.
//!
//! Rules are matched against the author identifiers (numeric ID and display
//! name) and tag values (name and translation) of each listed illust.
//! Exclude rules win over include rules.

use serde::{Deserialize, Serialize};

/// Filter configuration: an optional include set and an optional exclude set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Filters {
    /// If non-empty, an illust must match at least one include rule.
    #[serde(default)]
    pub include: RuleSet,

    /// An illust matching any exclude rule is dropped.
    #[serde(default)]
    pub exclude: RuleSet,
}

/// A set of author and tag values to match against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub authors: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl RuleSet {
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty() && self.tags.is_empty()
    }

    /// Whether any rule in this set matches the given illust values.
    fn matches(&self, authors: &[&str], tags: &[&str]) -> bool {
        self.authors.iter().any(|a| authors.contains(&a.as_str()))
            || self.tags.iter().any(|t| tags.contains(&t.as_str()))
    }
}

impl Filters {
    /// Decide whether an illust with the given author and tag values is
    /// excluded from the sync.
    pub fn is_excluded(&self, authors: &[&str], tags: &[&str]) -> bool {
        if !self.include.is_empty() && !self.include.matches(authors, tags) {
            return true;
        }

        self.exclude.matches(authors, tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(authors: &[&str], tags: &[&str]) -> RuleSet {
        RuleSet {
            authors: authors.iter().map(|s| s.to_string()).collect(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_no_rules_includes_everything() {
        let filters = Filters::default();
        assert!(!filters.is_excluded(&["42", "someone"], &["scenery"]));
    }

    #[test]
    fn test_include_by_tag() {
        let filters = Filters {
            include: rules(&[], &["scenery"]),
            ..Default::default()
        };

        assert!(!filters.is_excluded(&["42"], &["scenery", "sky"]));
        assert!(filters.is_excluded(&["42"], &["portrait"]));
    }

    #[test]
    fn test_include_by_author_matches_id_or_name() {
        let filters = Filters {
            include: rules(&["104571"], &[]),
            ..Default::default()
        };

        assert!(!filters.is_excluded(&["104571", "artist-name"], &[]));
        assert!(filters.is_excluded(&["9", "other"], &[]));
    }

    #[test]
    fn test_exclude_by_tag() {
        let filters = Filters {
            exclude: rules(&[], &["R-18"]),
            ..Default::default()
        };

        assert!(filters.is_excluded(&["42"], &["R-18", "scenery"]));
        assert!(!filters.is_excluded(&["42"], &["scenery"]));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let filters = Filters {
            include: rules(&[], &["scenery"]),
            exclude: rules(&["104571"], &[]),
        };

        assert!(filters.is_excluded(&["104571"], &["scenery"]));
    }

    #[test]
    fn test_tag_translation_matches() {
        let filters = Filters {
            include: rules(&[], &["scenery"]),
            ..Default::default()
        };

        // Caller passes both the native name and the translation
        assert!(!filters.is_excluded(&["42"], &["風景", "scenery"]));
    }
}
