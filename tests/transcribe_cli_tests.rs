mod common;

use common::TestEnv;

#[test]
fn transcribe_help_shows_usage() {
    let output = TestEnv::new().run("transcribe", &["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--pattern"));
    assert!(stdout.contains("--output-dir"));
}

#[test]
fn transcribe_version_shows_version() {
    let output = TestEnv::new().run("transcribe", &["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("transcribe "));
}

#[test]
fn missing_credential_fails_before_touching_the_input() {
    let env = TestEnv::new();
    env.write_file("talk.mp3", "fake audio bytes");

    let output = env.run("transcribe", &["talk.mp3"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !output.status.success(),
        "missing API key must be fatal\nstderr:\n{}",
        stderr
    );
    assert!(
        stderr.contains("Gemini API key is missing"),
        "expected credential error, got:\n{}",
        stderr
    );
    assert!(
        !env.work_path().join("talk_transcript.md").exists(),
        "no output may be written on a fatal configuration error"
    );
}

#[test]
fn nonexistent_input_path_is_fatal() {
    let env = TestEnv::with_fake_key();

    let output = env.run("transcribe", &["no-such-file.mp3"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Path does not exist"),
        "expected missing-path error, got:\n{}",
        stderr
    );
}

#[test]
fn unsupported_extension_is_fatal_for_single_file() {
    let env = TestEnv::with_fake_key();
    env.write_file("slides.pdf", "not audio");

    let output = env.run("transcribe", &["slides.pdf"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Unsupported format"),
        "expected unsupported-format error, got:\n{}",
        stderr
    );
}

#[test]
fn empty_directory_reports_zero_processed_and_succeeds() {
    let env = TestEnv::with_fake_key();
    std::fs::create_dir(env.work_path().join("empty")).unwrap();

    let output = env.run("transcribe", &["empty"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "zero matches is not an error\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("0 files processed"));
    assert!(stdout.contains("Tip: Use --recursive"));
}

#[test]
fn pattern_with_no_matches_reports_the_pattern() {
    let env = TestEnv::with_fake_key();
    env.write_file("clips/a.mp3", "fake");

    let output = env.run("transcribe", &["clips", "--pattern", "interview_*.mp3"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Pattern used: interview_*.mp3"));
}
