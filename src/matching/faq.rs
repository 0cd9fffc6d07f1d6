//! Fuzzy FAQ lookup

use crate::data::faq::FaqEntry;
use crate::matching::{fuzzy, normalizer};

/// Hard-coded confidence threshold for accepting an FAQ entry.
pub const FAQ_THRESHOLD: f64 = fuzzy::DEFAULT_THRESHOLD;

/// Find the answer for `question` among `faqs`.
///
/// Entries are scanned in source order and the FIRST one scoring at or
/// above the threshold wins; we do not keep looking for a better match.
/// `None` means the caller should fall back to the chat service.
pub fn find_answer<'a>(question: &str, faqs: &'a [FaqEntry]) -> Option<&'a str> {
    let user_norm = normalizer::normalize(question);
    for faq in faqs {
        let faq_norm = normalizer::normalize(&faq.question);
        if fuzzy::ratio(&user_norm, &faq_norm) >= FAQ_THRESHOLD {
            return Some(&faq.answer);
        }
    }
    None
}
