//! scribe - Audio transcription and text processing backed by the Gemini API
//!
//! Two front-ends share this library: `transcribe` (audio files in, transcripts
//! out) and `textify` (text files in, summaries/headlines/rewrites out).

pub mod cli;
pub mod config;
pub mod discovery;
pub mod llm;
pub mod output;
pub mod pipeline;
pub mod prompt;

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for scribe
#[derive(Error, Debug)]
pub enum ScribeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported format '{}' for {}", .extension, .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScribeError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "scribe";
