//! Input processing module
//! Handles file detection, text extraction, and input management

pub mod extractor;
pub mod manager;
