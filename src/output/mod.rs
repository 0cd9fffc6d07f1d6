//! Report structures and rendering

pub mod formatter;
pub mod report;
