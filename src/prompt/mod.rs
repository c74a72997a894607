//! Prompt resolution
//!
//! Picks the instruction text for a run: a user-supplied prompt file when
//! given, otherwise the task's built-in default, optionally extended with a
//! writing-rules document. Resolution happens once per run, before any file
//! is processed.

mod defaults;
mod rules;

use std::path::Path;

use anyhow::{Context, Result};

pub use rules::{Rule, RuleSet, DEFAULT_RULES_PATH};

/// The category of work a run performs. Determines the default prompt and
/// the output-name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Transcribe,
    Summarize,
    Headline,
    Custom,
}

impl TaskKind {
    /// Built-in instruction text; Custom has none and requires `--prompt`.
    pub fn default_prompt(self) -> Option<&'static str> {
        match self {
            TaskKind::Transcribe => Some(defaults::TRANSCRIBE),
            TaskKind::Summarize => Some(defaults::SUMMARIZE),
            TaskKind::Headline => Some(defaults::HEADLINE),
            TaskKind::Custom => None,
        }
    }

    /// Suffix appended to the source stem when deriving an output name.
    pub fn output_suffix(self) -> &'static str {
        match self {
            TaskKind::Transcribe => "_transcript",
            TaskKind::Summarize => "_summarize",
            TaskKind::Headline => "_headline",
            TaskKind::Custom => "_processed",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskKind::Transcribe => "transcribe",
            TaskKind::Summarize => "summarize",
            TaskKind::Headline => "headline",
            TaskKind::Custom => "custom",
        }
    }
}

/// Resolve the effective instruction text for a run.
///
/// An explicit prompt file overrides the task default; a rules file, when
/// given, is appended to whichever prompt won.
pub fn resolve_prompt(
    task: TaskKind,
    prompt_path: Option<&Path>,
    rules_path: Option<&Path>,
) -> Result<String> {
    let mut prompt = match prompt_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read prompt file: {}", path.display()))?,
        None => task
            .default_prompt()
            .ok_or_else(|| {
                crate::ScribeError::Config(format!(
                    "The '{}' task requires a prompt file (--prompt)",
                    task.as_str()
                ))
            })?
            .to_string(),
    };

    if let Some(path) = rules_path {
        let rules = RuleSet::load(path)?;
        let rendered = rules.render();
        prompt = format!("{}\n\n{}", prompt.trim_end(), rendered);
    }

    Ok(prompt)
}
