//! Free-text normalization for fuzzy comparison

/// Lowercase, strip ASCII punctuation, and trim surrounding whitespace.
///
/// Internal whitespace is deliberately left untouched; callers that need
/// tokens split on whitespace afterwards.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("What is Python?"), "what is python");
        assert_eq!(normalize("C.I./C.D.!"), "cicd");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(normalize("  hello world \n"), "hello world");
    }

    #[test]
    fn test_keeps_internal_whitespace() {
        assert_eq!(normalize("a  b"), "a  b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("?!..."), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("Senior Engineer, Backend (Remote)");
        assert_eq!(normalize(&once), once);
    }
}
