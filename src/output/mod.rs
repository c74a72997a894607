//! Output file writing
//!
//! Derives where a job's result lands and persists it. An explicit `-o` path
//! wins; otherwise the name is `<stem><task suffix>.md`, placed next to the
//! source or under the chosen output directory. Existing files are
//! overwritten.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::prompt::TaskKind;

/// Compute the output path for one source file.
pub fn derive_output_path(
    source: &Path,
    task: TaskKind,
    explicit: Option<&Path>,
    output_dir: Option<&Path>,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let file_name = format!("{}{}.md", stem, task.output_suffix());

    match output_dir {
        Some(dir) => dir.join(file_name),
        None => source
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(file_name),
    }
}

/// Write the generated text as UTF-8, creating parent directories as needed.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_lands_next_to_the_source() {
        let path = derive_output_path(
            Path::new("/audio/interview.mp3"),
            TaskKind::Transcribe,
            None,
            None,
        );
        assert_eq!(path, PathBuf::from("/audio/interview_transcript.md"));
    }

    #[test]
    fn output_dir_redirects_derived_names() {
        let path = derive_output_path(
            Path::new("/audio/interview.mp3"),
            TaskKind::Transcribe,
            None,
            Some(Path::new("./out")),
        );
        assert_eq!(path, PathBuf::from("./out/interview_transcript.md"));
    }

    #[test]
    fn explicit_output_wins() {
        let path = derive_output_path(
            Path::new("notes.txt"),
            TaskKind::Summarize,
            Some(Path::new("result.md")),
            Some(Path::new("./ignored")),
        );
        assert_eq!(path, PathBuf::from("result.md"));
    }

    #[test]
    fn task_suffix_shapes_the_name() {
        let path = derive_output_path(Path::new("doc.txt"), TaskKind::Headline, None, None);
        assert_eq!(path, PathBuf::from("doc_headline.md"));

        let path = derive_output_path(Path::new("doc.txt"), TaskKind::Custom, None, None);
        assert_eq!(path, PathBuf::from("doc_processed.md"));
    }

    #[test]
    fn write_then_read_round_trips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.md");
        let content = "# Résumé\n\nnon-ASCII: ü, 話, emoji: \u{1F980}\n";

        write_output(&path, content).unwrap();

        let read_back = std::fs::read(&path).unwrap();
        assert_eq!(read_back, content.as_bytes());
    }

    #[test]
    fn overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");

        write_output(&path, "first").unwrap();
        write_output(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }
}
