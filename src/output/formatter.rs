//! Rendering of gap reports to console, JSON, and Markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::GapSummary;
use colored::Colorize;

pub fn render(summary: &GapSummary, format: &OutputFormat, detailed: bool) -> Result<String> {
    match format {
        OutputFormat::Console => Ok(render_console(summary, detailed)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Markdown => Ok(render_markdown(summary, detailed)),
    }
}

fn score_colored(score: f64) -> colored::ColoredString {
    let text = format!("{:.1}%", score);
    match score {
        s if s >= 75.0 => text.green().bold(),
        s if s >= 40.0 => text.yellow().bold(),
        _ => text.red().bold(),
    }
}

fn render_console(summary: &GapSummary, detailed: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Skill Gap Report".bold()));
    out.push_str(&format!("Resume: {}\n", summary.resume_path));
    out.push_str(&format!("Job:    {}\n\n", summary.job_path));
    out.push_str(&format!("Match score: {}\n", score_colored(summary.score)));
    out.push_str(&format!("{}\n", summary.verdict));

    if !summary.matched_skills.is_empty() {
        out.push_str(&format!(
            "\n{} {}\n",
            "Matched:".green(),
            summary.matched_skills.join(", ")
        ));
    }
    if !summary.missing_skills.is_empty() {
        out.push_str(&format!(
            "{} {}\n",
            "Missing:".red(),
            summary.missing_skills.join(", ")
        ));
    }

    if detailed && !summary.required_skills.is_empty() {
        out.push_str(&format!(
            "\nJob requires ({}): {}\n",
            summary.required_skills.len(),
            summary.required_skills.join(", ")
        ));
    }

    out
}

fn render_markdown(summary: &GapSummary, detailed: bool) -> String {
    let mut out = String::new();

    out.push_str("# Skill Gap Report\n\n");
    out.push_str(&format!("- **Resume**: {}\n", summary.resume_path));
    out.push_str(&format!("- **Job**: {}\n", summary.job_path));
    out.push_str(&format!("- **Match score**: {:.1}%\n", summary.score));
    out.push_str(&format!("- **Verdict**: {}\n", summary.verdict));

    out.push_str("\n## Matched skills\n\n");
    if summary.matched_skills.is_empty() {
        out.push_str("_None_\n");
    } else {
        for skill in &summary.matched_skills {
            out.push_str(&format!("- {}\n", skill));
        }
    }

    out.push_str("\n## Missing skills\n\n");
    if summary.missing_skills.is_empty() {
        out.push_str("_None_\n");
    } else {
        for skill in &summary.missing_skills {
            out.push_str(&format!("- {}\n", skill));
        }
    }

    if detailed {
        out.push_str("\n## All detected job requirements\n\n");
        for skill in &summary.required_skills {
            out.push_str(&format!("- {}\n", skill));
        }
    }

    out.push_str(&format!(
        "\n_Generated at {}_\n",
        summary.generated_at.to_rfc3339()
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn summary() -> GapSummary {
        GapSummary {
            resume_path: "resume.pdf".into(),
            job_path: "job.txt".into(),
            score: 200.0 / 3.0,
            matched_skills: vec!["python".into(), "sql".into()],
            missing_skills: vec!["aws".into()],
            required_skills: vec!["aws".into(), "python".into(), "sql".into()],
            verdict: "Decent match.".into(),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_json_output_round_trips() {
        let rendered = render(&summary(), &OutputFormat::Json, false).unwrap();
        let parsed: GapSummary = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed.missing_skills, vec!["aws".to_string()]);
    }

    #[test]
    fn test_markdown_lists_skills() {
        let rendered = render(&summary(), &OutputFormat::Markdown, true).unwrap();
        assert!(rendered.contains("# Skill Gap Report"));
        assert!(rendered.contains("- python"));
        assert!(rendered.contains("## Missing skills"));
        assert!(rendered.contains("- aws"));
    }

    #[test]
    fn test_console_mentions_score_and_verdict() {
        colored::control::set_override(false);
        let rendered = render(&summary(), &OutputFormat::Console, false).unwrap();
        assert!(rendered.contains("66.7%"));
        assert!(rendered.contains("Decent match."));
    }
}
