//! FAQ entries and their JSON loader

use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One known question/answer pair.
///
/// FAQ lookup is first-match-wins, so the order entries are loaded in is
/// significant and preserved exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Load the ordered FAQ list from a JSON array of `{question, answer}`
/// records. An absent or unreadable file yields an empty list.
pub fn load_faqs(path: &Path) -> Vec<FaqEntry> {
    if !path.exists() {
        warn!("FAQ file not found at {}; FAQ lookup disabled", path.display());
        return Vec::new();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(faqs) => faqs,
            Err(e) => {
                warn!("Failed to parse FAQ file {}: {}", path.display(), e);
                Vec::new()
            }
        },
        Err(e) => {
            warn!("Failed to read FAQ file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_empty_list() {
        let faqs = load_faqs(Path::new("/nonexistent/faqs.json"));
        assert!(faqs.is_empty());
    }

    #[test]
    fn test_malformed_file_yields_empty_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(load_faqs(file.path()).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"question": "b?", "answer": "2"}}, {{"question": "a?", "answer": "1"}}]"#
        )
        .unwrap();
        let faqs = load_faqs(file.path());
        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[0].answer, "2");
        assert_eq!(faqs[1].answer, "1");
    }
}
