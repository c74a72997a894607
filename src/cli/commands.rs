//! CLI command implementations
//!
//! Shared orchestration for both binaries: resolve configuration and prompt,
//! dispatch on file-vs-directory input, drive the pipeline, and report. The
//! returned count of failed jobs becomes the process exit status.

use std::path::Path;

use anyhow::Result;

use crate::cli::args::{TextArgs, TranscribeArgs};
use crate::config::Settings;
use crate::discovery::{self, MediaKind};
use crate::llm;
use crate::output;
use crate::pipeline::{BatchSummary, Pipeline};
use crate::prompt::{self, TaskKind};

/// Run the transcription tool. Returns the number of failed jobs.
pub async fn run_transcribe(settings: &Settings, args: &TranscribeArgs) -> Result<usize> {
    let generator = llm::build_generator(settings)?;
    let instructions =
        prompt::resolve_prompt(TaskKind::Transcribe, args.prompt.as_deref(), None)?;

    let pipeline = Pipeline::new(
        generator.as_ref(),
        &instructions,
        TaskKind::Transcribe,
        MediaKind::Audio,
        settings.llm.max_retries,
    );

    run(
        &pipeline,
        RunOpts {
            input_path: &args.input_path,
            kind: MediaKind::Audio,
            task: TaskKind::Transcribe,
            output: args.output.as_deref(),
            output_dir: args.output_dir.as_deref(),
            recursive: args.recursive,
            pattern: args.pattern.as_deref(),
        },
    )
    .await
}

/// Run the text-processing tool. Returns the number of failed jobs.
pub async fn run_text(settings: &Settings, args: &TextArgs) -> Result<usize> {
    let task = args.task.kind();
    let generator = llm::build_generator(settings)?;
    let instructions =
        prompt::resolve_prompt(task, args.prompt.as_deref(), args.rules.as_deref())?;

    let pipeline = Pipeline::new(
        generator.as_ref(),
        &instructions,
        task,
        MediaKind::Text,
        settings.llm.max_retries,
    );

    run(
        &pipeline,
        RunOpts {
            input_path: &args.input_path,
            kind: MediaKind::Text,
            task,
            output: args.output.as_deref(),
            output_dir: args.output_dir.as_deref(),
            recursive: args.recursive,
            pattern: args.pattern.as_deref(),
        },
    )
    .await
}

struct RunOpts<'a> {
    input_path: &'a Path,
    kind: MediaKind,
    task: TaskKind,
    output: Option<&'a Path>,
    output_dir: Option<&'a Path>,
    recursive: bool,
    pattern: Option<&'a str>,
}

async fn run(pipeline: &Pipeline<'_>, opts: RunOpts<'_>) -> Result<usize> {
    if opts.input_path.is_file() {
        if opts.output_dir.is_some() {
            println!("Warning: --output-dir is ignored when processing a single file");
        }

        // Validates the extension before anything is read or sent.
        discovery::resolve_files(opts.input_path, opts.kind, false, None)?;

        let output = output::derive_output_path(opts.input_path, opts.task, opts.output, None);
        pipeline.process_file(opts.input_path, &output).await?;
        println!("Output saved to: {}", output.display());
        return Ok(0);
    }

    if opts.output.is_some() {
        println!("Warning: --output is ignored when processing a directory");
    }

    let files =
        discovery::resolve_files(opts.input_path, opts.kind, opts.recursive, opts.pattern)?;

    if files.is_empty() {
        println!(
            "No matching files found in {} (0 files processed)",
            opts.input_path.display()
        );
        println!(
            "Supported extensions: {}",
            opts.kind.extensions().join(", ")
        );
        if !opts.recursive {
            println!("Tip: Use --recursive to search in subdirectories");
        }
        if let Some(pattern) = opts.pattern {
            println!("Pattern used: {}", pattern);
        }
        return Ok(0);
    }

    println!(
        "Found {} file(s) to process (task: {})",
        files.len(),
        opts.task.as_str()
    );

    let summary = pipeline.run_batch(&files, opts.output_dir).await;
    print_summary(&summary);

    Ok(summary.failed())
}

fn print_summary(summary: &BatchSummary) {
    println!();
    println!(
        "Processing complete: {} succeeded, {} failed ({} processed)",
        summary.succeeded(),
        summary.failed(),
        summary.processed()
    );

    if summary.failed() > 0 {
        println!("Failed files:");
        for result in summary.failures() {
            println!(
                "  - {}: {}",
                result.job.source.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
}
