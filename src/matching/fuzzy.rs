//! Edit-distance similarity scoring

use strsim::normalized_levenshtein;

/// Default confidence threshold shared by FAQ lookup and skill matching.
pub const DEFAULT_THRESHOLD: f64 = 85.0;

/// Similarity between two strings on a 0-100 scale.
///
/// 100 for identical strings, degrading with edit distance relative to
/// length. Symmetric and deterministic. Two empty strings score 100.
pub fn ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflexive() {
        for s in ["", "python", "machine learning", "über"] {
            assert_eq!(ratio(s, s), 100.0);
        }
    }

    #[test]
    fn test_symmetric() {
        let pairs = [("python", "pyton"), ("sql", "nosql"), ("", "aws")];
        for (a, b) in pairs {
            assert_eq!(ratio(a, b), ratio(b, a));
        }
    }

    #[test]
    fn test_degrades_with_edits() {
        let base = ratio("kubernetes", "kubernetes");
        let one_edit = ratio("kubernetes", "kubernetes1");
        let two_edits = ratio("kubernetes", "kuberne");
        assert!(base > one_edit);
        assert!(one_edit > two_edits);
    }

    #[test]
    fn test_bounds() {
        let score = ratio("completely unrelated", "zzzqq");
        assert!(score >= 0.0 && score < DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_near_miss_scores_high() {
        assert!(ratio("postgresql", "postgresq") >= 85.0);
    }
}
