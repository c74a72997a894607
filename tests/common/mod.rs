use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub struct TestEnv {
    home: TempDir,
    config: TempDir,
    data: TempDir,
    work: TempDir,
    api_key: Option<String>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
            data: tempfile::tempdir().expect("create temporary XDG data dir"),
            work: tempfile::tempdir().expect("create temporary working dir"),
            api_key: None,
        }
    }

    /// A sandbox whose configuration carries a placeholder API key, for tests
    /// that must get past the startup credential check without ever reaching
    /// the network.
    #[allow(dead_code)]
    pub fn with_fake_key() -> Self {
        let mut env = Self::new();
        env.api_key = Some("test-key-not-real".to_string());
        env
    }

    pub fn run(&self, bin: &str, args: &[&str]) -> Output {
        let exe = match bin {
            "transcribe" => env!("CARGO_BIN_EXE_transcribe"),
            "textify" => env!("CARGO_BIN_EXE_textify"),
            other => panic!("unknown binary: {}", other),
        };

        let mut command = Command::new(exe);
        command
            .args(args)
            .current_dir(self.work.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env("XDG_DATA_HOME", self.data.path())
            .env_remove("GEMINI_API_KEY");

        if let Some(key) = &self.api_key {
            command.env("GEMINI_API_KEY", key);
        }

        command.output().expect("failed to execute binary")
    }

    /// Directory the binary runs in; fixture files go here.
    #[allow(dead_code)]
    pub fn work_path(&self) -> &Path {
        self.work.path()
    }

    #[allow(dead_code)]
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.work.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture parent directory");
        }
        std::fs::write(&path, contents).expect("write fixture file");
        path
    }
}
