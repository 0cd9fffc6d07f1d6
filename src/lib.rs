//! Career copilot library

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod input;
pub mod matching;
pub mod output;
pub mod service;
pub mod session;

pub use config::Config;
pub use error::{CopilotError, Result};
