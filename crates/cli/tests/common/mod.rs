//! Common utilities for integration tests

pub mod cli;

#[allow(unused_imports)]
pub use cli::{CommandResult, PacerCommand};

use tempfile::TempDir;

/// Temporary directory holding an (initially absent) config file
pub struct TestConfig {
    pub dir: TempDir,
}

impl TestConfig {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> std::path::PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn write(&self, contents: &str) {
        std::fs::write(self.path(), contents).expect("failed to write config");
    }
}
