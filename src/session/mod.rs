//! Per-user interview session history

pub mod history;

pub use history::{HistoryStore, SessionRecord};
