//! Implementation of the `helix-runner inspect` command.

use anyhow::{Context, Result};

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::InspectArgs;
use crate::domain::models::Config;
use crate::services::CredentialSummary;

impl CommandOutput for CredentialSummary {
    fn to_human(&self) -> String {
        let tools = if self.active_tools.is_empty() {
            "(none)"
        } else {
            self.active_tools.as_str()
        };
        let key = if self.api_key_present { "present" } else { "MISSING" };

        [
            format!("Credentials:  {}", self.path.display()),
            format!("API URL:      {}", self.api_url),
            format!("Active tools: {tools}"),
            format!("API key:      {key}"),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: InspectArgs, config: &Config, json_mode: bool) -> Result<()> {
    let credentials_path = super::resolve_credentials_path(&args.credentials)?;
    let service = super::build_service(config);

    let summary = service
        .inspect(&credentials_path)
        .await
        .context("Failed to inspect credentials")?;

    output(&summary, json_mode);
    Ok(())
}
