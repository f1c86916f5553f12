//! Error types for the FAQ assistant.
//!
//! Matching never fails. Everything here is a load-time problem: a broken
//! knowledge base or config file that must stop the process before it
//! answers anything.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaqError {
    #[error("Knowledge base has no categories")]
    EmptyKnowledgeBase,

    #[error("Category #{index} has no name")]
    UnnamedCategory { index: usize },

    #[error("Category '{category}' has no entries")]
    EmptyCategory { category: String },

    #[error("Entry #{entry} in category '{category}' is missing its {field}")]
    MissingField {
        category: String,
        entry: usize,
        field: &'static str,
    },

    #[error("Unsupported knowledge base format: {} (expected .toml or .json)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl FaqError {
    /// Process exit code for CLI callers (sysexits-style)
    pub fn exit_code(&self) -> i32 {
        match self {
            FaqError::Io { .. } => 74,
            FaqError::Config(_) => 78,
            _ => 65,
        }
    }
}

pub type Result<T> = std::result::Result<T, FaqError>;
