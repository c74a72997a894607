//! Configuration module for scribe

mod settings;

pub use settings::{LlmSettings, Settings};
