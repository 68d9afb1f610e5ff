//! Common test utilities and harness
//!
//! Provides reusable utilities for functional testing including:
//! - Isolated working directories with shader and table files
//! - Running the `embed-shader` binary
//! - Decoding generated declarations back into shader text

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Test environment with an isolated working directory
pub struct TestEnvironment {
    /// Temporary directory used as the binary's working directory
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    /// Create a new isolated test environment
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file relative to the root, creating parent directories
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the root
    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.root().join(relative)).expect("Failed to read test file")
    }

    /// Run the binary with the root as working directory
    pub fn run(&self, args: &[&str]) -> EmbedRun {
        let output = Command::new(env!("CARGO_BIN_EXE_embed-shader"))
            .args(args)
            .current_dir(self.root())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to spawn embed-shader");
        EmbedRun { output }
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

/// Captured result of one binary run
pub struct EmbedRun {
    pub output: Output,
}

impl EmbedRun {
    pub fn stdout(&self) -> String {
        String::from_utf8(self.output.stdout.clone()).expect("stdout should be UTF-8")
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert the run exited with status 0
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.output.status.success(),
            "Expected success, got {:?}. stderr: {}",
            self.output.status,
            self.stderr()
        );
        self
    }

    /// Assert the run exited with a non-zero status
    pub fn assert_failure(&self) -> &Self {
        assert!(
            !self.output.status.success(),
            "Expected failure, got success. stdout: {}",
            self.stdout()
        );
        self
    }

    /// Symbols of the declarations on stdout, in output order
    pub fn symbols(&self) -> Vec<String> {
        decode_declarations(&self.stdout())
            .into_iter()
            .map(|(symbol, _)| symbol)
            .collect()
    }
}

/// Split generated output into (symbol, decoded text) pairs
///
/// Only understands the line-continuation encoding, which is all the tool
/// ever produces.
pub fn decode_declarations(generated: &str) -> Vec<(String, String)> {
    let mut decoded = Vec::new();
    let mut rest = generated;

    while !rest.is_empty() {
        let body = rest
            .strip_prefix("const char * ")
            .unwrap_or_else(|| panic!("Expected declaration, got: {rest:?}"));
        let (symbol, body) = body.split_once(" = \"").expect("Missing opening quote");
        let end = body
            .match_indices("\";\n")
            .map(|(index, _)| index)
            .find(|&index| {
                let after = &body[index + 3..];
                after.is_empty() || after.starts_with("const char * ")
            })
            .expect("Missing closing quote");

        let literal = &body[..end];
        for (index, _) in literal.match_indices('\n') {
            assert!(
                literal[..index].ends_with("\\n\\"),
                "Raw newline without continuation in {symbol}"
            );
        }

        decoded.push((symbol.to_string(), literal.replace("\\n\\\n", "\n")));
        rest = &body[end + 3..];
    }

    decoded
}
