//! Writing-rules documents
//!
//! A rules file is a TOML list of writing conventions the model is told to
//! enforce. The entries are rendered verbatim into the prompt; no local text
//! substitution happens here.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Path used when `--rules` is given without a value.
pub const DEFAULT_RULES_PATH: &str = "rules/writing-rules.toml";

#[derive(Debug, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// One writing convention.
#[derive(Debug, Deserialize)]
pub struct Rule {
    /// How strictly to apply the rule (e.g. "always", "prefer")
    pub judgment: String,

    /// The correct form
    pub correct: String,

    /// Forms the rule replaces
    #[serde(default)]
    pub disallowed: Vec<String>,

    /// When the rule applies (free text, empty = always)
    #[serde(default)]
    pub when: Option<String>,

    #[serde(default)]
    pub example: Option<String>,

    #[serde(default)]
    pub note: Option<String>,
}

impl RuleSet {
    /// Load and parse a rules file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules file: {}", path.display()))?;

        let rules: RuleSet = toml::from_str(&content)
            .with_context(|| format!("Failed to parse rules file: {}", path.display()))?;

        Ok(rules)
    }

    /// Render the rules as instruction text, in file order.
    pub fn render(&self) -> String {
        let mut out = String::from("Apply the following writing rules to your output:\n");

        for rule in &self.rules {
            let _ = write!(out, "\n- [{}] use \"{}\"", rule.judgment, rule.correct);
            if !rule.disallowed.is_empty() {
                let _ = write!(out, " instead of {}", quote_list(&rule.disallowed));
            }
            if let Some(when) = rule.when.as_deref().filter(|w| !w.is_empty()) {
                let _ = write!(out, " (when: {})", when);
            }
            if let Some(example) = rule.example.as_deref() {
                let _ = write!(out, "\n  Example: {}", example);
            }
            if let Some(note) = rule.note.as_deref() {
                let _ = write!(out, "\n  Note: {}", note);
            }
        }

        out
    }
}

fn quote_list(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("\"{}\"", i))
        .collect::<Vec<_>>()
        .join(", ")
}
