//! CLI command execution helpers with automatic timing
//!
//! Wraps the `pacer` binary built by cargo and provides convenient
//! assertion methods.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// CLI command builder with timing
pub struct PacerCommand {
    args: Vec<String>,
    stdin_data: Option<String>,
}

impl PacerCommand {
    /// Create a command that reads its config from `config_path`
    ///
    /// Tests always pass an explicit config so the user's own file is never read.
    pub fn new(config_path: impl AsRef<Path>) -> Self {
        Self {
            args: vec![
                "--config".to_string(),
                config_path.as_ref().display().to_string(),
            ],
            stdin_data: None,
        }
    }

    /// Add command arguments
    pub fn args(&mut self, args: &[&str]) -> &mut Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Provide stdin data
    pub fn stdin(&mut self, data: &str) -> &mut Self {
        self.stdin_data = Some(data.to_string());
        self
    }

    /// Execute command and return result with timing
    pub fn execute(&self) -> Result<CommandResult> {
        let start = Instant::now();

        let mut command = Command::new(pacer_binary());
        command
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = command.spawn().context("Failed to spawn pacer")?;

        // Closing stdin signals EOF to interactive commands
        if let Some(mut stdin) = child.stdin.take() {
            use std::io::Write;
            if let Some(data) = &self.stdin_data {
                stdin.write_all(data.as_bytes())?;
            }
        }

        let output = child
            .wait_with_output()
            .context("Failed to wait for pacer")?;

        Ok(CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            duration: start.elapsed(),
        })
    }

    /// Execute and assert success
    pub fn assert_success(&self) -> Result<CommandResult> {
        let result = self.execute()?;

        if !result.success() {
            anyhow::bail!(
                "Command failed (exit code: {}):\nArgs: {:?}\nStdout: {}\nStderr: {}",
                result.exit_code,
                self.args,
                result.stdout,
                result.stderr
            );
        }

        Ok(result)
    }

    /// Execute and expect failure
    pub fn assert_failure(&self) -> Result<CommandResult> {
        let result = self.execute()?;

        if result.success() {
            anyhow::bail!(
                "Command should have failed but succeeded:\nArgs: {:?}\nStdout: {}",
                self.args,
                result.stdout
            );
        }

        Ok(result)
    }
}

/// Command execution result with timing
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub duration: Duration,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn contains_stdout(&self, text: &str) -> bool {
        self.stdout.contains(text)
    }

    pub fn contains_stderr(&self, text: &str) -> bool {
        self.stderr.contains(text)
    }

    /// Parse the `executed calls: 1, 4` summary line
    pub fn executed_calls(&self) -> Vec<usize> {
        self.stdout
            .lines()
            .find_map(|line| line.strip_prefix("executed calls:"))
            .map(|rest| {
                rest.split(',')
                    .filter_map(|n| n.trim().parse().ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn pacer_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_pacer"))
}

/// Macro for convenient command construction
///
/// Usage:
/// ```ignore
/// pacer!(config, "throttle", "--at", "0,10").assert_success()?;
/// ```
#[macro_export]
macro_rules! pacer {
    ($config:expr, $($arg:expr),*) => {{
        let mut cmd = $crate::common::cli::PacerCommand::new($config);
        cmd.args(&[$($arg),*]);
        cmd
    }};
}
