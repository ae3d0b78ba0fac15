//! Common test utilities for hwmgr CLI and scenario tests.
//!
//! `TestEnv` gives each test an isolated working directory and home
//! directory, so user config never leaks in from the machine running tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running the hwmgr binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {l:?}: {e}"))
            })
            .collect()
    }

    /// The first event with `"event": name`
    pub fn event(&self, name: &str) -> serde_json::Value {
        self.json_events()
            .into_iter()
            .find(|e| e["event"] == name)
            .unwrap_or_else(|| panic!("no '{name}' event in:\n{}", self.stdout))
    }
}

/// Isolated environment for running hwmgr.
pub struct TestEnv {
    /// Working directory the binary runs in
    pub project_root: TempDir,
    /// HOME / XDG_CONFIG_HOME for the binary
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file relative to the working directory
    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write `<XDG_CONFIG_HOME>/hwmgr/config.toml`
    pub fn write_user_config(&self, content: &str) {
        let dir = self.config_home().join("hwmgr");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        std::fs::write(dir.join("config.toml"), content).expect("Failed to write config");
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with(args, &[], None)
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_with(args, env_vars, None)
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> TestResult {
        self.run_with(args, &[], Some(stdin))
    }

    fn run_with(
        &self,
        args: &[&str],
        env_vars: &[(&str, &str)],
        stdin: Option<&str>,
    ) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_hwmgr"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("NO_COLOR", "1")
            // ASCII glyphs regardless of the host locale
            .env("LANG", "C")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE")
            .env_remove("TERM")
            .env_remove("RUST_LOG")
            .env_remove("HWMGR_DATASET")
            .env_remove("HWMGR_COLOR")
            .env_remove("HWMGR_VERBOSITY")
            .env_remove("HWMGR_STEP")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to execute hwmgr");
        {
            let mut pipe = child.stdin.take().expect("stdin is piped");
            if let Some(input) = stdin {
                pipe.write_all(input.as_bytes())
                    .expect("Failed to write stdin");
            }
        }
        let output = child.wait_with_output().expect("Failed to wait for hwmgr");
        to_result(output)
    }

    fn config_home(&self) -> PathBuf {
        self.home_dir.path().join(".config")
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Assert that output contains a pattern, printing the output on failure.
#[macro_export]
macro_rules! assert_output_contains {
    ($text:expr, $pattern:expr) => {
        assert!(
            $text.contains($pattern),
            "Expected output to contain '{}'\n---\n{}",
            $pattern,
            $text
        );
    };
}

/// One hardware set, one member project holding 4 of 5 units, one guest.
pub const SMALL_DATASET_TOML: &str = r#"
[[hardware_sets]]
id = "hs1"
name = "Scopes"
capacity = 5

[[projects]]
id = "lab"
name = "Signal Lab"
is_member = true
hardware = [{ set_id = "hs1", qty = 4 }]

[[projects]]
id = "club"
name = "Radio Club"
"#;
