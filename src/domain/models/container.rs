//! Container description handed to a [`ContainerRuntime`](crate::domain::ports::ContainerRuntime).
//!
//! A [`Container`] is an immutable value: every `with_*` method consumes it
//! and returns a new description. Nothing runs until the value is passed to
//! a runtime together with the exec arguments.

use std::fmt;
use std::path::PathBuf;

/// A named secret value.
///
/// The value is only reachable through [`Secret::expose`]; `Debug` prints the
/// name alone.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret {
    name: String,
    value: String,
}

impl Secret {
    /// Create a secret with the given name and plaintext value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Secret name (for diagnostics, never the value).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plaintext value. Only runtimes should call this.
    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// A host file made visible inside the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mount {
    /// Absolute path inside the container
    pub container_path: String,
    /// Path on the host
    pub host_path: PathBuf,
}

/// Description of a container to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    image: String,
    env: Vec<(String, String)>,
    secrets: Vec<(String, Secret)>,
    mounts: Vec<Mount>,
    entrypoint: Vec<String>,
}

impl Container {
    /// Start a container description from a base image.
    pub fn from_image(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            env: Vec::new(),
            secrets: Vec::new(),
            mounts: Vec::new(),
            entrypoint: Vec::new(),
        }
    }

    /// Set a plain environment variable, replacing any earlier value.
    #[must_use]
    pub fn with_env_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.env.retain(|(existing, _)| existing != &name);
        self.env.push((name, value.into()));
        self
    }

    /// Expose a secret as an environment variable, replacing any earlier one.
    #[must_use]
    pub fn with_secret_variable(mut self, name: impl Into<String>, secret: Secret) -> Self {
        let name = name.into();
        self.secrets.retain(|(existing, _)| existing != &name);
        self.secrets.push((name, secret));
        self
    }

    /// Mount a host file read-only at `container_path`.
    #[must_use]
    pub fn with_mounted_file(
        mut self,
        container_path: impl Into<String>,
        host_path: impl Into<PathBuf>,
    ) -> Self {
        self.mounts.push(Mount {
            container_path: container_path.into(),
            host_path: host_path.into(),
        });
        self
    }

    /// Replace the entrypoint. Exec arguments are appended to it.
    #[must_use]
    pub fn with_entrypoint<I, S>(mut self, entrypoint: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entrypoint = entrypoint.into_iter().map(Into::into).collect();
        self
    }

    /// Base image reference.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Plain environment variables in insertion order.
    pub fn env(&self) -> &[(String, String)] {
        &self.env
    }

    /// Look up a plain environment variable.
    pub fn env_variable(&self, name: &str) -> Option<&str> {
        self.env
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Secret environment variables in insertion order.
    pub fn secrets(&self) -> &[(String, Secret)] {
        &self.secrets
    }

    /// Look up a secret environment variable.
    pub fn secret_variable(&self, name: &str) -> Option<&Secret> {
        self.secrets
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, secret)| secret)
    }

    /// Mounted files.
    pub fn mounts(&self) -> &[Mount] {
        &self.mounts
    }

    /// Entrypoint override, empty when the image default is used.
    pub fn entrypoint(&self) -> &[String] {
        &self.entrypoint
    }
}
