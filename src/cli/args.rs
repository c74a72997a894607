//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::prompt::{TaskKind, DEFAULT_RULES_PATH};

/// transcribe - Transcribe audio files using the Gemini API
#[derive(Parser, Debug)]
#[command(name = "transcribe")]
#[command(version, about, long_about = None)]
pub struct TranscribeArgs {
    /// Path to an audio file or a directory containing audio files
    pub input_path: PathBuf,

    /// Output file path (single-file runs only)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for derived transcript names
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Process audio files in subdirectories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// File name pattern to match (e.g. '*.mp3', 'interview_*.wav')
    #[arg(long)]
    pub pattern: Option<String>,

    /// Path to a custom prompt file
    #[arg(long)]
    pub prompt: Option<PathBuf>,
}

/// textify - Process text files using the Gemini API
#[derive(Parser, Debug)]
#[command(name = "textify")]
#[command(version, about, long_about = None)]
pub struct TextArgs {
    /// Path to a text file or a directory containing text files
    pub input_path: PathBuf,

    /// Processing task
    #[arg(long, value_enum, default_value_t = TaskArg::Summarize)]
    pub task: TaskArg,

    /// Output file path (single-file runs only)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for derived output names
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Process text files in subdirectories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// File name pattern to match (e.g. '*.txt', 'doc_*.md')
    #[arg(long)]
    pub pattern: Option<String>,

    /// Path to a custom prompt file (required for the custom task)
    #[arg(long)]
    pub prompt: Option<PathBuf>,

    /// Writing-rules file to append to the prompt (bare flag uses the default path)
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_RULES_PATH)]
    pub rules: Option<PathBuf>,
}

/// Task choices exposed by the text tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TaskArg {
    Summarize,
    Headline,
    Custom,
}

impl TaskArg {
    pub fn kind(self) -> TaskKind {
        match self {
            TaskArg::Summarize => TaskKind::Summarize,
            TaskArg::Headline => TaskKind::Headline,
            TaskArg::Custom => TaskKind::Custom,
        }
    }
}
