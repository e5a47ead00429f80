//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory
//! - Seeding config and session files
//! - Executing CLI commands against a mock backend

use anyhow::Result;
use assert_cmd::Command;
use hypodesk_types::Session;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use hypodesk_testing::{FakeBackend, MockServer, TestWorld};
///
/// let server = MockServer::start(FakeBackend::with_fixture_topics());
/// let world = TestWorld::new().with_api(server.url()).logged_in("u1");
///
/// let result = world.run(&["topics", "counts"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    api_url: Option<String>,
    format: &'static str,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".hypodesk");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            api_url: None,
            format: "json",
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Point every service at `url` (usually a `MockServer`).
    pub fn with_api(mut self, url: &str) -> Self {
        self.api_url = Some(url.to_string());
        self
    }

    /// Render plain text instead of the JSON envelope.
    pub fn plain(mut self) -> Self {
        self.format = "plain";
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write a config file into the data directory.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), toml).expect("Failed to write config");
        self
    }

    /// Seed a persisted session so protected commands run.
    pub fn logged_in(self, user_id: &str) -> Self {
        self.with_session(&fixtures::session(user_id))
    }

    pub fn with_session(self, session: &Session) -> Self {
        let content = serde_json::to_string_pretty(session).expect("Failed to encode session");
        std::fs::write(self.data_dir.join("session.json"), content)
            .expect("Failed to write session");
        self
    }

    pub fn has_session(&self) -> bool {
        self.data_dir.join("session.json").exists()
    }

    /// Write a file into the temp root and return its path.
    pub fn write_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg(self.format);

        if let Some(url) = &self.api_url {
            cmd.arg("--api-url").arg(url);
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("HYPODESK_PATH");
        cmd.env_remove("HYPODESK_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_stdin(args, "")
    }

    #[allow(deprecated)]
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("hypodesk")
            .map_err(|e| anyhow::anyhow!("Failed to find hypodesk binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);
        cmd.write_stdin(stdin.to_string());

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
