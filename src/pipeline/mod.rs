//! Batch processing pipeline
//!
//! Turns the resolver's file list into written outputs, one job at a time.
//! Jobs are independent: a failure is recorded against its file and the run
//! moves on, so one bad input never aborts the batch. Every submitted job
//! yields exactly one entry in the summary.

mod request;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::discovery::MediaKind;
use crate::llm::{GenerationRequest, TextGenerator};
use crate::output;
use crate::prompt::TaskKind;

pub use request::{build_payload, AUDIO_WARN_BYTES, TEXT_WARN_BYTES};

/// One file's worth of work.
#[derive(Debug, Clone)]
pub struct Job {
    pub source: PathBuf,
    pub output: PathBuf,
}

/// The recorded fate of one job.
#[derive(Debug)]
pub struct JobResult {
    pub job: Job,
    pub error: Option<String>,
}

impl JobResult {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// End-of-run accounting.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub results: Vec<JobResult>,
}

impl BatchSummary {
    pub fn processed(&self) -> usize {
        self.results.len()
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.succeeded()).count()
    }

    pub fn failed(&self) -> usize {
        self.processed() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &JobResult> {
        self.results.iter().filter(|r| !r.succeeded())
    }
}

/// Serial driver for a run: same prompt, task, and generator for every file.
pub struct Pipeline<'a> {
    generator: &'a dyn TextGenerator,
    instructions: &'a str,
    task: TaskKind,
    kind: MediaKind,
    max_retries: u32,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        generator: &'a dyn TextGenerator,
        instructions: &'a str,
        task: TaskKind,
        kind: MediaKind,
        max_retries: u32,
    ) -> Self {
        Self {
            generator,
            instructions,
            task,
            kind,
            max_retries,
        }
    }

    /// Process a single file to completion. The output is written only after
    /// generation succeeded, so a failed job leaves nothing behind.
    pub async fn process_file(&self, source: &Path, output: &Path) -> Result<()> {
        let payload = build_payload(source, self.kind)?;

        let mut attempt = 0;
        let text = loop {
            let result = self
                .generator
                .generate(GenerationRequest {
                    instructions: self.instructions,
                    payload: &payload,
                })
                .await;

            match result {
                Ok(text) => break text,
                Err(err) if attempt < self.max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        "Retrying {} (attempt {}/{}): {:#}",
                        source.display(),
                        attempt + 1,
                        self.max_retries + 1,
                        err
                    );
                }
                Err(err) => return Err(err),
            }
        };

        output::write_output(output, &text)?;
        Ok(())
    }

    /// Run every file in resolver order, isolating per-job failures.
    pub async fn run_batch(
        &self,
        files: &[PathBuf],
        output_dir: Option<&Path>,
    ) -> BatchSummary {
        let total = files.len();
        let mut summary = BatchSummary::default();

        for (i, source) in files.iter().enumerate() {
            let name = source
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("<unnamed>");
            println!("[{}/{}] Processing: {}", i + 1, total, name);

            let output = output::derive_output_path(source, self.task, None, output_dir);
            let job = Job {
                source: source.clone(),
                output: output.clone(),
            };

            let error = match self.process_file(source, &output).await {
                Ok(()) => {
                    println!("  Saved: {}", output.display());
                    None
                }
                Err(err) => {
                    tracing::error!("Failed to process {}: {:#}", source.display(), err);
                    Some(format!("{:#}", err))
                }
            };

            summary.results.push(JobResult { job, error });
        }

        summary
    }
}
