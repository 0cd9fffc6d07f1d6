//! Text normalization and fuzzy matching
//! The core behind FAQ lookup and resume/job skill-gap analysis

pub mod faq;
pub mod fuzzy;
pub mod gap;
pub mod normalizer;
