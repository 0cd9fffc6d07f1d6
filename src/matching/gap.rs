//! Resume vs job-description skill-gap analysis

use crate::data::skills::FlattenedSkills;
use crate::error::{CopilotError, Result};
use crate::matching::fuzzy;
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Outcome of a single gap analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapReport {
    /// Percentage (0-100) of job-required skills evidenced in the resume.
    pub score: f64,
    /// Skills required by the job description and found in the resume.
    pub matched: BTreeSet<String>,
    /// All skills detected in the job description.
    pub required: BTreeSet<String>,
}

impl GapReport {
    pub fn empty() -> Self {
        Self {
            score: 0.0,
            matched: BTreeSet::new(),
            required: BTreeSet::new(),
        }
    }

    /// Required skills with no supporting evidence in the resume.
    pub fn missing(&self) -> BTreeSet<String> {
        self.required.difference(&self.matched).cloned().collect()
    }
}

/// Skill-gap analyzer built once from a flattened skill set and reused
/// across calls; holds no per-invocation state.
pub struct GapAnalyzer {
    skills: Vec<String>,
    jd_matcher: AhoCorasick,
    max_phrase_words: usize,
    threshold: f64,
}

impl GapAnalyzer {
    pub fn new(skills: &FlattenedSkills) -> Result<Self> {
        let patterns: Vec<String> = skills.iter().cloned().collect();
        let jd_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| {
                CopilotError::InvalidInput(format!("Failed to build skill matcher: {}", e))
            })?;

        Ok(Self {
            skills: patterns,
            jd_matcher,
            max_phrase_words: skills.max_phrase_words(),
            threshold: fuzzy::DEFAULT_THRESHOLD,
        })
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 100.0);
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Compare a resume against a job description.
    ///
    /// Empty resume or JD text is a defined short-circuit to an empty
    /// report, not an error; callers feed in `""` on extraction failure.
    pub fn analyze(&self, resume_text: &str, jd_text: &str) -> GapReport {
        if resume_text.is_empty() || jd_text.is_empty() {
            return GapReport::empty();
        }

        let resume_text = resume_text.to_lowercase();
        let jd_text = jd_text.to_lowercase();

        // Every skill phrase occurring literally in the JD, overlapping
        // occurrences included ("java" inside "javascript" still counts).
        let required: BTreeSet<String> = self
            .jd_matcher
            .find_overlapping_iter(&jd_text)
            .map(|mat| self.skills[mat.pattern().as_usize()].clone())
            .collect();

        if required.is_empty() {
            return GapReport::empty();
        }

        let candidates = self.resume_ngrams(&resume_text);

        let mut matched = BTreeSet::new();
        for skill in &required {
            // First hit wins; no need to match the same skill twice.
            if candidates
                .iter()
                .any(|gram| fuzzy::ratio(skill, gram) >= self.threshold)
            {
                matched.insert(skill.clone());
            }
        }

        let score = matched.len() as f64 / required.len() as f64 * 100.0;

        GapReport {
            score,
            matched,
            required,
        }
    }

    /// All contiguous n-token phrases of the resume for n up to the
    /// longest known skill phrase.
    fn resume_ngrams(&self, resume_text: &str) -> Vec<String> {
        let words: Vec<&str> = resume_text.split_whitespace().collect();
        let mut grams = Vec::new();
        for n in 1..=self.max_phrase_words {
            if n > words.len() {
                break;
            }
            for window in words.windows(n) {
                grams.push(window.join(" "));
            }
        }
        grams
    }
}
