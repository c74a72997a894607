use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;

/// The content half of a generation request.
#[derive(Debug, Clone)]
pub enum Payload {
    /// Document text submitted alongside the instructions.
    Text(String),
    /// Raw audio bytes, shipped inline with their MIME type.
    Audio { mime_type: String, data: Vec<u8> },
}

/// One outbound request: instructions plus a payload.
pub struct GenerationRequest<'a> {
    pub instructions: &'a str,
    pub payload: &'a Payload,
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String>;
}

/// Build the generator from runtime settings.
///
/// Fails fast on a missing API key so a misconfigured run dies before any
/// file is read or request sent.
pub fn build_generator(settings: &Settings) -> Result<Box<dyn TextGenerator>> {
    Ok(Box::new(GeminiClient::from_settings(settings)?))
}
