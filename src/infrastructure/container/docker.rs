//! Docker CLI container runtime
//!
//! Shells out to a Docker-compatible CLI (`docker run --rm ...`). Any binary
//! accepting the same flags works, so `podman` can be configured instead.
//!
//! Secret variables are passed as `-e NAME` with the value set in the CLI
//! process environment, so secret values never appear in the argument list.
//!
//! Every container gets a unique `--name`. Killing the local CLI process does
//! not stop the container, so on timeout the runtime removes it by name.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::domain::error::ContainerError;
use crate::domain::models::container::Container;
use crate::domain::ports::ContainerRuntime;
use crate::infrastructure::logging::SecretScrubber;

/// Prefix of generated container names
pub const CONTAINER_NAME_PREFIX: &str = "helix-runner-";

/// Configuration for the Docker CLI runtime
#[derive(Debug, Clone)]
pub struct DockerCliConfig {
    /// Path to the docker CLI executable (defaults to "docker" in PATH)
    pub binary: String,

    /// Remove the container after this many seconds (None = no limit)
    pub timeout_secs: Option<u64>,
}

impl Default for DockerCliConfig {
    fn default() -> Self {
        Self {
            binary: "docker".to_string(),
            timeout_secs: None,
        }
    }
}

/// Container runtime backed by the docker CLI
pub struct DockerCliRuntime {
    config: DockerCliConfig,
}

impl DockerCliRuntime {
    /// Create a runtime with default configuration
    pub fn new() -> Self {
        Self::with_config(DockerCliConfig::default())
    }

    /// Create a runtime with custom configuration
    pub fn with_config(config: DockerCliConfig) -> Self {
        Self { config }
    }

    /// Generate a unique container name
    pub fn container_name() -> String {
        format!("{CONTAINER_NAME_PREFIX}{}", Uuid::new_v4().simple())
    }

    /// Build the `run` argument list for a named container and exec arguments
    pub fn build_args(container: &Container, args: &[String], name: &str) -> Vec<String> {
        let mut cli_args = vec![
            "run".to_string(),
            "--rm".to_string(),
            "--name".to_string(),
            name.to_string(),
        ];

        for (name, value) in container.env() {
            cli_args.push("-e".to_string());
            cli_args.push(format!("{name}={value}"));
        }

        for (name, _) in container.secrets() {
            cli_args.push("-e".to_string());
            cli_args.push(name.clone());
        }

        for mount in container.mounts() {
            cli_args.push("-v".to_string());
            cli_args.push(format!(
                "{}:{}:ro",
                mount.host_path.display(),
                mount.container_path
            ));
        }

        let mut exec_args: Vec<String> = Vec::new();
        if let Some((entrypoint, rest)) = container.entrypoint().split_first() {
            cli_args.push("--entrypoint".to_string());
            cli_args.push(entrypoint.clone());
            exec_args.extend(rest.iter().cloned());
        }
        exec_args.extend(args.iter().cloned());

        cli_args.push(container.image().to_string());
        cli_args.extend(exec_args);
        cli_args
    }

    fn build_command(&self, cli_args: &[String], container: &Container) -> Command {
        let mut cmd = Command::new(&self.config.binary);
        cmd.args(cli_args);

        for (name, secret) in container.secrets() {
            cmd.env(name, secret.expose());
        }

        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        cmd
    }

    /// Force-remove a container by name. Failures are logged, not returned.
    async fn remove_container(&self, name: &str) {
        let status = Command::new(&self.config.binary)
            .args(["rm", "-f", name])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) if status.success() => debug!(container = name, "removed container"),
            Ok(status) => warn!(container = name, code = ?status.code(), "failed to remove container"),
            Err(err) => warn!(container = name, error = %err, "failed to remove container"),
        }
    }

    fn scrubber(container: &Container) -> SecretScrubber {
        container
            .secrets()
            .iter()
            .fold(SecretScrubber::new(), |scrubber, (_, secret)| {
                scrubber.with_secret(secret.expose())
            })
    }
}

impl Default for DockerCliRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContainerRuntime for DockerCliRuntime {
    fn runtime_id(&self) -> &str {
        "docker-cli"
    }

    #[instrument(skip_all, fields(image = %container.image()))]
    async fn stdout(
        &self,
        container: &Container,
        args: &[String],
    ) -> Result<String, ContainerError> {
        let name = Self::container_name();
        let cli_args = Self::build_args(container, args, &name);
        let scrubber = Self::scrubber(container);
        debug!(
            binary = %self.config.binary,
            command = %scrubber.scrub_message(&cli_args.join(" ")),
            "starting container"
        );

        let child = self
            .build_command(&cli_args, container)
            .spawn()
            .map_err(|source| ContainerError::Spawn {
                binary: self.config.binary.clone(),
                source,
            })?;

        let output = match self.config.timeout_secs {
            Some(secs) => {
                match timeout(Duration::from_secs(secs), child.wait_with_output()).await {
                    Ok(output) => output?,
                    Err(_) => {
                        warn!(container = %name, secs, "container timed out");
                        self.remove_container(&name).await;
                        return Err(ContainerError::Timeout(secs));
                    }
                }
            }
            None => child.wait_with_output().await?,
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
            debug!(
                code = ?output.status.code(),
                stderr = %scrubber.scrub_message(&stderr),
                "container failed"
            );
            return Err(ContainerError::NonZeroExit {
                code: output.status.code(),
                stderr,
            });
        }

        debug!(bytes = output.stdout.len(), "container finished");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::container::Secret;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    /// Write an executable shell script standing in for the docker CLI.
    /// Every invocation appends its arguments to `calls.log` next to it.
    #[cfg(unix)]
    fn fake_docker(dir: &TempDir, body: &str) -> (PathBuf, PathBuf) {
        use std::os::unix::fs::PermissionsExt;

        let script = dir.path().join("docker");
        let log = dir.path().join("calls.log");
        let contents = format!(
            "#!/bin/sh\necho \"$@\" >> '{}'\n{body}\n",
            log.display()
        );
        std::fs::write(&script, contents).unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        (script, log)
    }

    fn runtime_for(binary: &Path, timeout_secs: Option<u64>) -> DockerCliRuntime {
        DockerCliRuntime::with_config(DockerCliConfig {
            binary: binary.display().to_string(),
            timeout_secs,
        })
    }

    #[test]
    fn test_build_args_plain() {
        let container = Container::from_image("ubuntu:latest");
        let cli_args =
            DockerCliRuntime::build_args(&container, &args(&["echo", "hi"]), "helix-runner-1");

        assert_eq!(
            cli_args,
            args(&["run", "--rm", "--name", "helix-runner-1", "ubuntu:latest", "echo", "hi"])
        );
    }

    #[test]
    fn test_build_args_full() {
        let container = Container::from_image("helix:dev")
            .with_secret_variable("HELIX_API_KEY", Secret::new("helix-api-key", "hl-secret"))
            .with_env_variable("HELIX_API_URL", "http://localhost")
            .with_mounted_file("/root/.helix/credentials", "/home/me/.helix/credentials")
            .with_entrypoint(["/helix"]);

        let cli_args = DockerCliRuntime::build_args(
            &container,
            &args(&["run", "--prompt", "hi"]),
            "helix-runner-2",
        );

        assert_eq!(
            cli_args,
            args(&[
                "run",
                "--rm",
                "--name",
                "helix-runner-2",
                "-e",
                "HELIX_API_URL=http://localhost",
                "-e",
                "HELIX_API_KEY",
                "-v",
                "/home/me/.helix/credentials:/root/.helix/credentials:ro",
                "--entrypoint",
                "/helix",
                "helix:dev",
                "run",
                "--prompt",
                "hi",
            ])
        );
        assert!(cli_args.iter().all(|arg| !arg.contains("hl-secret")));
    }

    #[test]
    fn test_multi_part_entrypoint_prefixes_args() {
        let container = Container::from_image("alpine").with_entrypoint(["sh", "-c"]);
        let cli_args = DockerCliRuntime::build_args(&container, &args(&["echo hi"]), "c");

        assert_eq!(
            cli_args,
            args(&["run", "--rm", "--name", "c", "--entrypoint", "sh", "alpine", "-c", "echo hi"])
        );
    }

    #[test]
    fn test_container_names_are_unique() {
        let first = DockerCliRuntime::container_name();
        let second = DockerCliRuntime::container_name();

        assert!(first.starts_with(CONTAINER_NAME_PREFIX));
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_missing_binary_is_spawn_error() {
        let runtime = runtime_for(Path::new("/nonexistent/helix-runner-docker"), None);

        let result = runtime
            .stdout(&Container::from_image("alpine"), &args(&["true"]))
            .await;

        assert!(matches!(result, Err(ContainerError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_stdout_is_captured_and_secret_passed_by_env() {
        let dir = TempDir::new().unwrap();
        let (script, log) = fake_docker(&dir, "printf '%s' \"$HELIX_API_KEY\"");
        let runtime = runtime_for(&script, None);
        let container = Container::from_image("ubuntu")
            .with_secret_variable("HELIX_API_KEY", Secret::new("helix-api-key", "hl-secret"));

        let stdout = runtime.stdout(&container, &args(&["true"])).await.unwrap();
        assert_eq!(stdout, "hl-secret");

        let calls = std::fs::read_to_string(log).unwrap();
        assert!(calls.starts_with("run --rm --name helix-runner-"));
        assert!(!calls.contains("hl-secret"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_utf8_stdout_is_lossy() {
        let dir = TempDir::new().unwrap();
        let (script, _) = fake_docker(&dir, "printf 'ok\\377'");
        let runtime = runtime_for(&script, None);

        let stdout = runtime
            .stdout(&Container::from_image("ubuntu"), &args(&["true"]))
            .await
            .unwrap();
        assert!(stdout.starts_with("ok"));
        assert!(stdout.contains('\u{FFFD}'));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_carries_code_and_stderr() {
        let dir = TempDir::new().unwrap();
        let (script, _) = fake_docker(&dir, "echo 'Unable to find image' >&2\nexit 3");
        let runtime = runtime_for(&script, None);

        let result = runtime
            .stdout(&Container::from_image("missing:latest"), &args(&["true"]))
            .await;

        match result {
            Err(ContainerError::NonZeroExit { code, stderr }) => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "Unable to find image");
            }
            other => panic!("Expected NonZeroExit, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timeout_is_reported_and_container_removed() {
        let dir = TempDir::new().unwrap();
        let (script, log) = fake_docker(&dir, "if [ \"$1\" = rm ]; then exit 0; fi\nsleep 10");
        let runtime = runtime_for(&script, Some(1));

        let result = runtime
            .stdout(&Container::from_image("ubuntu"), &args(&["true"]))
            .await;
        assert!(matches!(result, Err(ContainerError::Timeout(1))));

        let calls = std::fs::read_to_string(log).unwrap();
        let lines: Vec<&str> = calls.lines().collect();
        assert_eq!(lines.len(), 2);

        let name = lines[0].split_whitespace().nth(3).unwrap();
        assert!(name.starts_with(CONTAINER_NAME_PREFIX));
        assert_eq!(lines[1], format!("rm -f {name}"));
    }
}
