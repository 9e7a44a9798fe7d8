//! Implementation of the `helix-runner get-secret` command.

use anyhow::{Context, Result};

use crate::cli::output::{output, StdoutOutput};
use crate::cli::types::GetSecretArgs;
use crate::domain::models::Config;

pub async fn execute(args: GetSecretArgs, config: &Config, json_mode: bool) -> Result<()> {
    let credentials_path = super::resolve_credentials_path(&args.credentials)?;
    let service = super::build_service(config);

    let stdout = service
        .get_secret(&credentials_path)
        .await
        .context("get-secret failed")?;

    output(
        &StdoutOutput {
            command: "get-secret",
            stdout,
        },
        json_mode,
    );
    Ok(())
}
