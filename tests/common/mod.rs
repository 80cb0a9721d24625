//! Test environment for running the compareoffers binary in isolation.
//!
//! Every run gets a fresh working directory and config home, so a real user
//! config or `COMPAREOFFERS_*` variables never leak into assertions.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated working directory plus config home
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            config_home: TempDir::new().unwrap(),
            env: Vec::new(),
        }
    }

    /// Set an extra environment variable for every run
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Write `compareoffers.toml` into the working directory
    pub fn with_project_config(self, content: &str) -> Self {
        std::fs::write(self.project_path("compareoffers.toml"), content).unwrap();
        self
    }

    /// Write the user-level config under the isolated config home
    pub fn with_user_config(self, content: &str) -> Self {
        let dir = self.config_home.path().join("compareoffers");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), content).unwrap();
        self
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_compareoffers"));
        cmd.args(args)
            .current_dir(self.project_root.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("HOME", self.config_home.path())
            .env("TERM", "dumb")
            .env("NO_COLOR", "1")
            .env_remove("COMPAREOFFERS_PRICE")
            .env_remove("COMPAREOFFERS_SALES_LEVELS")
            .env_remove("COMPAREOFFERS_COLOR")
            .env_remove("COMPAREOFFERS_LOG");
        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Parse NDJSON stdout into one value per line
pub fn json_lines(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}
