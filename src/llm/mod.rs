//! Remote generation module
//!
//! Everything that talks to the Gemini API lives here, behind the
//! `TextGenerator` trait so the pipeline can run against a scripted
//! generator in tests.

mod client;
mod gemini;

pub use client::{build_generator, GenerationRequest, Payload, TextGenerator};
pub use gemini::GeminiClient;
