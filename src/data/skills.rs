//! Skill taxonomy and its flattened form used by the gap analyzer

use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Categorized skill phrases, e.g. `"cloud" -> ["aws", "gcp"]`.
///
/// Loaded once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillTaxonomy {
    categories: BTreeMap<String, Vec<String>>,
}

impl SkillTaxonomy {
    pub fn categories(&self) -> &BTreeMap<String, Vec<String>> {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(|skills| skills.is_empty())
    }

    pub fn flatten(&self) -> FlattenedSkills {
        FlattenedSkills::from_phrases(self.categories.values().flatten())
    }
}

/// Case-folded set of all known skill phrases, deduplicated across
/// categories, plus the token length of the longest phrase.
#[derive(Debug, Clone)]
pub struct FlattenedSkills {
    skills: HashSet<String>,
    max_phrase_words: usize,
}

impl FlattenedSkills {
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let skills: HashSet<String> = phrases
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .filter(|s| !s.trim().is_empty())
            .collect();

        // Bounds n-gram generation; 1 is the floor so an empty taxonomy
        // still yields a functioning (if useless) analyzer.
        let max_phrase_words = skills
            .iter()
            .map(|s| s.split_whitespace().count())
            .max()
            .unwrap_or(1)
            .max(1);

        if skills.is_empty() {
            warn!("No skills loaded; gap analysis will report no matches");
        }

        Self {
            skills,
            max_phrase_words,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.skills.iter()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }
}

/// Load the skill taxonomy from a JSON object mapping category names to
/// arrays of skill phrases. An absent or unreadable file yields an empty
/// taxonomy.
pub fn load_skills(path: &Path) -> SkillTaxonomy {
    if !path.exists() {
        warn!(
            "Skills file not found at {}; gap analysis may not work properly",
            path.display()
        );
        return SkillTaxonomy::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(taxonomy) => taxonomy,
            Err(e) => {
                warn!("Failed to parse skills file {}: {}", path.display(), e);
                SkillTaxonomy::default()
            }
        },
        Err(e) => {
            warn!("Failed to read skills file {}: {}", path.display(), e);
            SkillTaxonomy::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_lowercases_and_dedups_across_categories() {
        let json = r#"{"languages": ["Python", "SQL"], "data": ["python", "Machine Learning"]}"#;
        let taxonomy: SkillTaxonomy = serde_json::from_str(json).unwrap();
        let flat = taxonomy.flatten();

        assert_eq!(flat.len(), 3);
        assert!(flat.contains("python"));
        assert!(flat.contains("machine learning"));
        assert_eq!(flat.max_phrase_words(), 2);
    }

    #[test]
    fn test_empty_taxonomy_falls_back_to_window_of_one() {
        let flat = SkillTaxonomy::default().flatten();
        assert!(flat.is_empty());
        assert_eq!(flat.max_phrase_words(), 1);
    }

    #[test]
    fn test_blank_phrases_dropped() {
        let flat = FlattenedSkills::from_phrases(["", "  ", "rust"]);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat.max_phrase_words(), 1);
    }

    #[test]
    fn test_missing_file_yields_empty_taxonomy() {
        let taxonomy = load_skills(Path::new("/nonexistent/skills.json"));
        assert!(taxonomy.is_empty());
    }
}
