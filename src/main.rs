//! Career copilot: interview preparation assistant

mod cli;
mod config;
mod data;
mod error;
mod input;
mod matching;
mod output;
mod service;
mod session;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use colored::Colorize;
use config::Config;
use error::{CopilotError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use std::process;
use std::time::Duration;

use data::{faq, skills};
use input::manager::InputManager;
use matching::gap::GapAnalyzer;
use output::{formatter, report::GapSummary};
use service::groq::GroqClient;
use service::prompts::PromptTemplates;
use service::{resolve_question, AnswerSource, ChatService};
use session::{HistoryStore, SessionRecord};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_result = match cli.config.clone() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config_result {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if !config.output.color_output {
        colored::control::set_override(false);
    }

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Ask { question, faqs } => {
            let faqs_path = faqs.unwrap_or_else(|| config.data.faqs_path.clone());
            let faq_entries = faq::load_faqs(&faqs_path);
            info!("Loaded {} FAQ entries", faq_entries.len());

            let client = GroqClient::from_config(&config.service);

            let spinner = spinner("Thinking...");
            let resolved = resolve_question(&question, &faq_entries, &client).await;
            spinner.finish_and_clear();

            let resolved = resolved?;
            match resolved.source {
                AnswerSource::Faq => println!("{}", "Answered from FAQ".dimmed()),
                AnswerSource::Model => {
                    println!("{}", format!("Answered by {}", config.service.model).dimmed())
                }
            }
            println!("{}", resolved.text);
        }

        Commands::Gap {
            resume,
            job,
            skills: skills_override,
            detailed,
            output,
            save,
        } => {
            cli::validate_file_extension(&resume, cli::RESUME_EXTENSIONS)
                .map_err(|e| CopilotError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, cli::JOB_EXTENSIONS)
                .map_err(|e| CopilotError::InvalidInput(format!("Job description file: {}", e)))?;

            let output_format = cli::parse_output_format(&output).map_err(CopilotError::InvalidInput)?;

            let skills_path = skills_override.unwrap_or_else(|| config.data.skills_path.clone());
            let taxonomy = skills::load_skills(&skills_path);
            let flattened = taxonomy.flatten();
            info!("Loaded {} skill phrases", flattened.len());

            let mut input_manager = InputManager::new();
            // Extraction failures degrade to empty text and a zero report.
            let resume_text = input_manager.extract_text_or_empty(&resume).await;
            let job_text = input_manager.extract_text_or_empty(&job).await;
            info!(
                "Extracted {} resume chars, {} job chars",
                resume_text.len(),
                job_text.len()
            );

            let analyzer =
                GapAnalyzer::new(&flattened)?.with_threshold(config.matching.skill_threshold);
            let gap_report = analyzer.analyze(&resume_text, &job_text);

            let summary = GapSummary::from_report(
                &gap_report,
                resume.to_string_lossy().to_string(),
                job.to_string_lossy().to_string(),
            );

            let rendered =
                formatter::render(&summary, &output_format, detailed || config.output.detailed)?;

            if let Some(save_path) = save {
                std::fs::write(&save_path, &rendered)?;
                println!("Report saved to {}", save_path.display());
            } else {
                println!("{}", rendered);
            }
        }

        Commands::Questions { role } => {
            let client = GroqClient::from_config(&config.service);
            let templates = PromptTemplates::default();
            let prompt = templates.render_question_generation(&role);

            let spinner = spinner("Generating questions...");
            let questions = client.complete(&prompt).await;
            spinner.finish_and_clear();

            println!("{}", questions?);
        }

        Commands::Evaluate {
            question,
            answer,
            user,
        } => {
            let client = GroqClient::from_config(&config.service);
            let templates = PromptTemplates::default();
            let prompt = templates.render_answer_evaluation(&question, &answer);

            let spinner = spinner("Evaluating answer...");
            let feedback = client.complete(&prompt).await;
            spinner.finish_and_clear();

            let feedback = feedback?;
            println!("{}", feedback);

            if let Some(user) = user {
                let store = HistoryStore::new(HistoryStore::default_dir());
                store.append(
                    &user,
                    SessionRecord::answered(question, answer, Some(feedback)),
                )?;
                println!("\n{}", format!("Saved to {}'s history", user).dimmed());
            }
        }

        Commands::History { user, limit } => {
            let store = HistoryStore::new(HistoryStore::default_dir());
            let records = store.load(&user)?;

            if records.is_empty() {
                println!("No history for '{}'", user);
                return Ok(());
            }

            let start = limit.map(|n| records.len().saturating_sub(n)).unwrap_or(0);
            for record in &records[start..] {
                println!(
                    "{} {}",
                    record.timestamp.format("%Y-%m-%d %H:%M").to_string().dimmed(),
                    record.question.bold()
                );
                if record.skipped {
                    println!("  {}", "(skipped)".yellow());
                } else {
                    println!("  A: {}", record.answer);
                    if let Some(feedback) = &record.feedback {
                        println!("  Feedback: {}", feedback);
                    }
                }
                println!();
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("FAQ file:        {}", config.data.faqs_path.display());
                println!("Skills file:     {}", config.data.skills_path.display());
                println!("Skill threshold: {:.1}", config.matching.skill_threshold);
                println!("Model:           {}", config.service.model);
                println!("API base:        {}", config.service.api_base);
                println!("API key env:     {}", config.service.api_key_env);
            }
            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner());
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
