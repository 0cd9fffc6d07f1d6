//! CLI interface for the career copilot

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// File extensions the extraction pipeline accepts for resumes.
pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "md"];

/// File extensions the extraction pipeline accepts for job descriptions.
pub const JOB_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "md"];

#[derive(Parser)]
#[command(name = "career-copilot")]
#[command(about = "Interview preparation assistant")]
#[command(
    long_about = "Answer career questions from a FAQ set, analyze resume/job skill gaps, and run AI-assisted mock interview practice"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a question from the FAQ set, falling back to the AI model
    Ask {
        /// The question to answer
        question: String,

        /// Override the FAQ file path
        #[arg(long)]
        faqs: Option<PathBuf>,
    },

    /// Analyze the skill gap between a resume and a job description
    Gap {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Override the skill taxonomy file path
        #[arg(long)]
        skills: Option<PathBuf>,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Generate tailored interview questions for a role description
    Questions {
        /// Role description, e.g. "Backend Developer skilled in Python"
        role: String,
    },

    /// Evaluate an interview answer and get scored feedback
    Evaluate {
        /// The interview question
        #[arg(short, long)]
        question: String,

        /// Your answer
        #[arg(short, long)]
        answer: String,

        /// Save the record to this user's session history
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Show a user's interview session history
    History {
        /// User whose history to show
        user: String,

        /// Show only the most recent N records
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert!(matches!(
            parse_output_format("md"),
            Ok(OutputFormat::Markdown)
        ));
        assert!(matches!(
            parse_output_format("JSON"),
            Ok(OutputFormat::Json)
        ));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(&PathBuf::from("resume.PDF"), &["pdf", "txt"]).is_ok());
        assert!(validate_file_extension(&PathBuf::from("resume.odt"), &["pdf", "txt"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("resume"), &["pdf"]).is_err());
    }

    #[test]
    fn test_gap_inputs_accept_every_extractor_format() {
        for ext in ["pdf", "docx", "txt", "md"] {
            let path = PathBuf::from(format!("file.{}", ext));
            assert!(validate_file_extension(&path, RESUME_EXTENSIONS).is_ok());
            assert!(validate_file_extension(&path, JOB_EXTENSIONS).is_ok());
        }
    }
}
