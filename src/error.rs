//! Error types for the terminal front-end
//!
//! Engine errors pass through unchanged; everything else here is about
//! files the front-end reads and writes (settings and scenario files) or
//! input it cannot understand.

use std::path::PathBuf;

use chess_rules::RulesError;
use thiserror::Error;

/// Errors that can occur in the front-end
#[derive(Error, Debug)]
pub enum AppError {
    /// Settings or scenario file I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings or scenario file serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Rules(#[from] RulesError),

    /// Scenario file parsed but declares no levels
    #[error("Scenario file {path:?} has no levels")]
    EmptyScenarioFile { path: PathBuf },

    /// Typed input is not a command
    #[error("Unknown command '{input}', type 'help' for the list")]
    UnknownCommand { input: String },
}

/// Result type alias for front-end operations
pub type AppResult<T> = Result<T, AppError>;
