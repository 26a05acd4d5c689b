//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// The sample channel log used across integration tests
pub const SAMPLE_LOG: &str = "
[2021-03-01T10:29:59.215Z] *** creekorful (~creekorfu@static.8.8.8.8.clients.example.org) joined
[2021-03-01T10:29:59.215Z] *** hentiphase (~hentiphase@static.4.4.4.4.clients.example.org) joined
[2021-03-01T11:59:42.847Z] *** creekorful changed nick to creekorful_
[2021-03-01T11:59:43.847Z] *** creekorful_ changed nick to creekorful
[2021-03-01T12:00:43.164Z] *** hentiphase (~hentiphase@static.4.4.4.4.clients.example.org) quit (Ping timeout: 480 seconds)
[2021-03-01T13:00:59.215Z] *** hentiphase (~hentiphase@static.4.4.4.4.clients.example.org) joined
[2021-03-01T13:25:17.928Z] <hentiphase> creekorful: when in doubt, take it to mail. -> unblock
[2021-03-01T13:37:14.974Z] <creekorful> thanks for your feedback :)
[2021-03-01T13:59:00.732Z] <hentiphase> creekorful: https://example.org/manual :)
[2021-03-01T20:38:26.113Z] *** creekorful (~creekorfu@static.8.8.8.8.clients.example.org) quit ()
[2021-03-01T21:24:49.669Z] *** hentiphase (~hentiphase@static.4.4.4.4.clients.example.org) quit (Remote host closed the connection)
[2021-03-23T10:29:59.215Z] *** creekorful (~creekorfu@static.8.8.8.8.clients.example.org) joined
[2021-03-23T10:46:21.525Z] * creekorful sent a long message:  < something >
";

/// Builder for a temporary directory holding a log file and an output path
pub struct LogDirBuilder {
    temp_dir: TempDir,
    file_name: String,
}

impl LogDirBuilder {
    /// Create a new builder; the log file defaults to `#test-channel.txt`
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, file_name: "#test-channel.txt".to_string() }
    }

    /// Set the log file name
    pub fn file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    /// Write the log file with the given content
    pub fn with_log(self, content: &str) -> Self {
        self.with_log_bytes(content.as_bytes())
    }

    /// Write the log file with raw bytes
    pub fn with_log_bytes(self, content: &[u8]) -> Self {
        fs::write(self.input(), content).expect("Failed to write log file");
        self
    }

    /// Write chat lines built with [`ChatLineBuilder`]
    pub fn with_lines(self, lines: &[ChatLineBuilder]) -> Self {
        let content = lines.iter().map(|l| l.to_line()).collect::<Vec<_>>().join("\n");
        self.with_log(&content)
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the log file
    pub fn input(&self) -> PathBuf {
        self.temp_dir.path().join(&self.file_name)
    }

    /// Path where the HTML page should go
    pub fn output(&self) -> PathBuf {
        self.temp_dir.path().join("out.html")
    }

    /// Read the generated page
    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output()).expect("Failed to read output file")
    }
}

impl Default for LogDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single chat line
pub struct ChatLineBuilder {
    timestamp: String,
    sender: String,
    content: String,
}

impl ChatLineBuilder {
    /// Create a chat line with default values
    pub fn new() -> Self {
        Self {
            timestamp: "2021-03-01T13:25:17.928Z".to_string(),
            sender: "hentiphase".to_string(),
            content: "hello".to_string(),
        }
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    pub fn sender(mut self, sender: &str) -> Self {
        self.sender = sender.to_string();
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    /// Format as a log line
    pub fn to_line(&self) -> String {
        format!("[{}] <{}> {}", self.timestamp, self.sender, self.content)
    }
}

impl Default for ChatLineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
