//! Request payload assembly
//!
//! Reads one source file into the payload half of a generation request.
//! Oversized inputs are submitted anyway; they only get a warning, since the
//! hard limits live on the remote side.

use std::path::Path;

use anyhow::{Context, Result};

use crate::discovery::MediaKind;
use crate::llm::Payload;

/// Soft limit for inline audio uploads.
pub const AUDIO_WARN_BYTES: u64 = 20 * 1024 * 1024;

/// Above this, text processing gets slow enough to be worth a warning.
pub const TEXT_WARN_BYTES: u64 = 10 * 1024 * 1024;

/// Read `source` into a payload for its media kind.
pub fn build_payload(source: &Path, kind: MediaKind) -> Result<Payload> {
    let size = std::fs::metadata(source)
        .with_context(|| format!("Failed to stat input file: {}", source.display()))?
        .len();

    match kind {
        MediaKind::Audio => {
            if size > AUDIO_WARN_BYTES {
                tracing::warn!(
                    "Large audio file ({:.1} MB): {}. Files over 20 MB may be rejected or slow",
                    size as f64 / (1024.0 * 1024.0),
                    source.display()
                );
            }
            let data = std::fs::read(source)
                .with_context(|| format!("Failed to read audio file: {}", source.display()))?;
            Ok(Payload::Audio {
                mime_type: mime_for(source).to_string(),
                data,
            })
        }
        MediaKind::Text => {
            if size > TEXT_WARN_BYTES {
                tracing::warn!(
                    "Large text file ({:.1} MB): {}. Processing may take a while",
                    size as f64 / (1024.0 * 1024.0),
                    source.display()
                );
            }
            let text = std::fs::read_to_string(source)
                .with_context(|| format!("Failed to read text file: {}", source.display()))?;
            Ok(Payload::Text(text))
        }
    }
}

fn mime_for(source: &Path) -> &'static str {
    let ext = source
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "aiff" => "audio/aiff",
        "aac" => "audio/aac",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_payload_keeps_bytes_and_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp3");
        std::fs::write(&path, [0u8, 1, 2, 255]).unwrap();

        match build_payload(&path, MediaKind::Audio).unwrap() {
            Payload::Audio { mime_type, data } => {
                assert_eq!(mime_type, "audio/mpeg");
                assert_eq!(data, vec![0u8, 1, 2, 255]);
            }
            other => panic!("expected audio payload, got {:?}", other),
        }
    }

    #[test]
    fn text_payload_reads_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "héllo\n").unwrap();

        match build_payload(&path, MediaKind::Text).unwrap() {
            Payload::Text(text) => assert_eq!(text, "héllo\n"),
            other => panic!("expected text payload, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(build_payload(Path::new("no/such.mp3"), MediaKind::Audio).is_err());
    }
}
