//! Test environment for isolated assetkeep runs.
//!
//! Every `TestEnv` owns a temp data directory and a temp HOME, so no user
//! config or real inventory leaks into a test.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{CATEGORIES, LOCATIONS};

/// Result of running an assetkeep command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as a single JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

/// Isolated data directory and HOME
pub struct TestEnv {
    pub data_dir: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            data_dir: TempDir::new().expect("Failed to create data dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_assetkeep")),
        }
    }

    /// Environment with categories and locations already registered
    pub fn with_reference_lists() -> Self {
        let env = Self::new();
        env.write_file("categories.csv", CATEGORIES);
        env.write_file("locations.csv", LOCATIONS);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.data_dir.path().join(relative)
    }

    /// Run assetkeep with the data directory as working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from(self.data_dir.path(), args, env_vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("ASSETKEEP_DATA_DIR", self.data_dir.path())
            .env_remove("ASSETKEEP_OUTPUT")
            .env_remove("ASSETKEEP_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute assetkeep");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        std::fs::write(self.path(relative), content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Non-empty lines of the asset file
    pub fn asset_lines(&self) -> Vec<String> {
        self.read_file("assets.csv")
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}
