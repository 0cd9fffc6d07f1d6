//! Loaders for the FAQ and skill taxonomy documents
//! Absent or unreadable sources degrade to empty structures, never errors

pub mod faq;
pub mod skills;
