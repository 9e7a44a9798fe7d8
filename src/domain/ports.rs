//! Ports to external systems.

use async_trait::async_trait;

use super::error::ContainerError;
use super::models::Container;

/// Interface to an external container runtime.
///
/// Image pulling, secret handling and process execution all live behind this
/// trait, so callers can be exercised without a real container engine.
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// Short identifier used in logs
    fn runtime_id(&self) -> &str;

    /// Run `args` in the described container and return captured stdout
    ///
    /// # Arguments
    /// * `container` - Image, environment, secrets, mounts and entrypoint
    /// * `args` - Exec arguments, appended to the entrypoint if one is set
    ///
    /// # Returns
    /// * `Ok(stdout)` when the process exits successfully
    /// * `Err(ContainerError)` on spawn failure, non-zero exit or timeout
    async fn stdout(&self, container: &Container, args: &[String])
        -> Result<String, ContainerError>;
}
