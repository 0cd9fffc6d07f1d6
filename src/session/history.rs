//! JSON-backed storage of interview question/answer/feedback records

use crate::error::{CopilotError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One answered (or skipped) interview question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub question: String,
    pub answer: String,
    pub feedback: Option<String>,
    pub skipped: bool,
    pub timestamp: DateTime<Utc>,
}

impl SessionRecord {
    pub fn answered(question: String, answer: String, feedback: Option<String>) -> Self {
        Self {
            question,
            answer,
            feedback,
            skipped: false,
            timestamp: Utc::now(),
        }
    }

    pub fn skipped(question: String) -> Self {
        Self {
            question,
            answer: String::new(),
            feedback: None,
            skipped: true,
            timestamp: Utc::now(),
        }
    }
}

/// Stores one pretty-printed JSON file of records per user.
pub struct HistoryStore {
    dir: PathBuf,
}

impl HistoryStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Platform data directory, e.g. `~/.local/share/career-copilot/history`.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("career-copilot")
            .join("history")
    }

    pub fn load(&self, user: &str) -> Result<Vec<SessionRecord>> {
        let path = self.user_path(user)?;
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&path)?;
        let records = serde_json::from_str(&content)?;
        Ok(records)
    }

    pub fn append(&self, user: &str, record: SessionRecord) -> Result<()> {
        let mut records = self.load(user)?;
        records.push(record);
        self.save(user, &records)
    }

    pub fn save(&self, user: &str, records: &[SessionRecord]) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.user_path(user)?;
        let content = serde_json::to_string_pretty(records)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    fn user_path(&self, user: &str) -> Result<PathBuf> {
        let safe: String = user
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
            .collect();

        if safe.is_empty() {
            return Err(CopilotError::History(format!(
                "Invalid user name: '{}'",
                user
            )));
        }

        Ok(self.dir.join(format!("{}.json", safe)))
    }
}
