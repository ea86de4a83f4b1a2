#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the doc8 binary.
#[macro_export]
macro_rules! doc8 {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("doc8"));
        cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
        cmd
    }};
}

/// A 99 character line that can be wrapped.
pub const LONG_LINE: &str = "This sentence is padded with enough ordinary words that it runs well past the default line limit ok";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        self.create_bytes(relative_path, content.as_bytes());
    }

    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a `doc8.ini` with a `[doc8]` section holding `body`.
    pub fn create_config(&self, body: &str) {
        self.create_file("doc8.ini", &format!("[doc8]\n{body}"));
    }
}
