//! Error types for credential loading and container execution.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a container runtime
#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("Failed to start container runtime '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Container exited with code {code:?}: {stderr}")]
    NonZeroExit { code: Option<i32>, stderr: String },

    #[error("Container execution timed out after {0}s")]
    Timeout(u64),

    #[error("Container I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while preparing or running a Helix invocation
#[derive(Error, Debug)]
pub enum HelixError {
    #[error("Failed to read credentials file {}: {source}", path.display())]
    CredentialsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Container(#[from] ContainerError),
}

pub type HelixResult<T> = Result<T, HelixError>;
