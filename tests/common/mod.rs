//! Common test utilities for integration tests
//!
//! Provides a recording container runtime and credentials file fixtures.

#![allow(dead_code)]

use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

use helix_runner::{Container, ContainerError, ContainerRuntime};

/// One call made against [`RecordingRuntime`]
#[derive(Debug, Clone)]
pub struct RecordedExec {
    pub container: Container,
    pub args: Vec<String>,
}

/// Container runtime that records every call and returns a canned result
pub struct RecordingRuntime {
    calls: Mutex<Vec<RecordedExec>>,
    response: Mutex<Option<ContainerError>>,
    stdout: String,
}

impl RecordingRuntime {
    /// Runtime that succeeds with `stdout`
    pub fn returning(stdout: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response: Mutex::new(None),
            stdout: stdout.into(),
        }
    }

    /// Runtime whose next call fails with `error`
    pub fn failing(error: ContainerError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response: Mutex::new(Some(error)),
            stdout: String::new(),
        }
    }

    /// Calls recorded so far
    pub fn calls(&self) -> Vec<RecordedExec> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContainerRuntime for RecordingRuntime {
    fn runtime_id(&self) -> &str {
        "recording"
    }

    async fn stdout(&self, container: &Container, args: &[String]) -> Result<String, ContainerError> {
        self.calls.lock().unwrap().push(RecordedExec {
            container: container.clone(),
            args: args.to_vec(),
        });
        match self.response.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(self.stdout.clone()),
        }
    }
}

/// Write `contents` to a temporary credentials file
pub fn credentials_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write credentials");
    file.flush().expect("Failed to flush credentials");
    file
}
