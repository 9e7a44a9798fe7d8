//! Implementation of the `helix-runner run` command.

use anyhow::{Context, Result};

use crate::cli::output::{output, StdoutOutput};
use crate::cli::types::RunArgs;
use crate::domain::models::Config;

pub async fn execute(args: RunArgs, config: &Config, json_mode: bool) -> Result<()> {
    let credentials_path = super::resolve_credentials_path(&args.credentials)?;
    let service = super::build_service(config);

    let stdout = service
        .run(&args.prompt, &credentials_path)
        .await
        .context("helix run failed")?;

    output(
        &StdoutOutput {
            command: "run",
            stdout,
        },
        json_mode,
    );
    Ok(())
}
