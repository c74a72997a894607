//! Input file discovery
//!
//! Resolves a root path (file or directory) into the ordered list of files a
//! run will process. Directory walks are filtered by an extension allow-list
//! and an optional glob-style name pattern, and the result is sorted so
//! repeated runs see the same order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Result, ScribeError};

/// Audio formats accepted by the transcription tool.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "aiff", "aac", "ogg", "flac"];

/// Text formats accepted by the text processing tool.
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "text"];

/// Which extension allow-list a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Text,
}

impl MediaKind {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            MediaKind::Audio => AUDIO_EXTENSIONS,
            MediaKind::Text => TEXT_EXTENSIONS,
        }
    }

    fn accepts(self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                let e = e.to_ascii_lowercase();
                self.extensions().contains(&e.as_str())
            })
            .unwrap_or(false)
    }
}

/// Resolve `root` into the files to process.
///
/// A file root must match the allow-list or the call fails; a directory root
/// yields every matching file (descending into subdirectories when
/// `recursive` is set), filtered by `pattern` and sorted lexicographically.
/// An empty result is not an error.
pub fn resolve_files(
    root: &Path,
    kind: MediaKind,
    recursive: bool,
    pattern: Option<&str>,
) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(ScribeError::NotFound(root.to_path_buf()));
    }

    if root.is_file() {
        if !kind.accepts(root) {
            let extension = root
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_string();
            return Err(ScribeError::UnsupportedFormat {
                path: root.to_path_buf(),
                extension,
            });
        }
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    walk(root, kind, recursive, &mut files)?;

    if let Some(pattern) = pattern {
        files.retain(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| matches_pattern(n, pattern))
                .unwrap_or(false)
        });
    }

    files.sort();
    Ok(files)
}

fn walk(dir: &Path, kind: MediaKind, recursive: bool, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            if recursive {
                walk(&path, kind, recursive, out)?;
            }
        } else if kind.accepts(&path) {
            out.push(path);
        }
    }
    Ok(())
}

/// Shell-style name matching: `*` any run, `?` any one character, `[...]` a
/// character class (leading `!` negates). Matches the whole name.
pub fn matches_pattern(name: &str, pattern: &str) -> bool {
    let name: Vec<char> = name.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    match_from(&name, &pattern)
}

fn match_from(name: &[char], pattern: &[char]) -> bool {
    match pattern.first() {
        None => name.is_empty(),
        Some('*') => {
            // Try every possible span for the star, shortest first.
            (0..=name.len()).any(|skip| match_from(&name[skip..], &pattern[1..]))
        }
        Some('?') => !name.is_empty() && match_from(&name[1..], &pattern[1..]),
        Some('[') => match class_end(pattern) {
            Some(end) => match name.first() {
                Some(&c) if class_matches(c, &pattern[1..end]) => {
                    match_from(&name[1..], &pattern[end + 1..])
                }
                _ => false,
            },
            // Unterminated class matches a literal '['.
            None => name.first() == Some(&'[') && match_from(&name[1..], &pattern[1..]),
        },
        Some(&c) => name.first() == Some(&c) && match_from(&name[1..], &pattern[1..]),
    }
}

fn class_end(pattern: &[char]) -> Option<usize> {
    // The closing bracket may not be the first class member.
    pattern
        .iter()
        .enumerate()
        .skip(2)
        .find(|(_, &c)| c == ']')
        .map(|(i, _)| i)
}

fn class_matches(c: char, class: &[char]) -> bool {
    let (negated, class) = match class.first() {
        Some('!') => (true, &class[1..]),
        _ => (false, class),
    };

    let mut hit = false;
    let mut i = 0;
    while i < class.len() {
        if i + 2 < class.len() && class[i + 1] == '-' {
            if class[i] <= c && c <= class[i + 2] {
                hit = true;
            }
            i += 3;
        } else {
            if class[i] == c {
                hit = true;
            }
            i += 1;
        }
    }

    hit != negated
}
