//! Skill-gap report assembled for rendering

use crate::matching::gap::GapReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapSummary {
    pub resume_path: String,
    pub job_path: String,
    /// Percentage of job-required skills evidenced in the resume.
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub required_skills: Vec<String>,
    pub verdict: String,
    pub generated_at: DateTime<Utc>,
}

impl GapSummary {
    pub fn from_report(report: &GapReport, resume_path: String, job_path: String) -> Self {
        Self {
            resume_path,
            job_path,
            score: report.score,
            matched_skills: report.matched.iter().cloned().collect(),
            missing_skills: report.missing().into_iter().collect(),
            required_skills: report.required.iter().cloned().collect(),
            verdict: verdict_for(report),
            generated_at: Utc::now(),
        }
    }
}

fn verdict_for(report: &GapReport) -> String {
    if report.required.is_empty() {
        return "No known skills detected in the job description.".to_string();
    }
    match report.score {
        s if s >= 80.0 => "Strong match. Polish your stories for the skills you already have.",
        s if s >= 50.0 => "Decent match. Close the highest-impact gaps before applying.",
        s if s >= 25.0 => "Partial match. Expect the gaps to come up in screening.",
        _ => "Weak match. Consider upskilling or targeting a closer role.",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn report(score: f64, matched: &[&str], required: &[&str]) -> GapReport {
        GapReport {
            score,
            matched: matched.iter().map(|s| s.to_string()).collect(),
            required: required.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_summary_derives_missing_skills() {
        let summary = GapSummary::from_report(
            &report(66.67, &["python", "sql"], &["aws", "python", "sql"]),
            "resume.pdf".into(),
            "job.txt".into(),
        );

        assert_eq!(summary.missing_skills, vec!["aws".to_string()]);
        assert_eq!(summary.matched_skills.len(), 2);
    }

    #[test]
    fn test_verdict_for_empty_requirements() {
        let empty = GapReport {
            score: 0.0,
            matched: BTreeSet::new(),
            required: BTreeSet::new(),
        };
        let summary = GapSummary::from_report(&empty, "r".into(), "j".into());
        assert!(summary.verdict.contains("No known skills"));
    }
}
