//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "helix-runner")]
#[command(about = "Run Helix CLI prompts inside containers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Additional YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the credentials file, base64 encoded, as seen inside a container
    GetSecret(GetSecretArgs),

    /// Run a prompt through the Helix CLI inside a container
    Run(RunArgs),

    /// Show the parsed credentials without revealing the API key
    Inspect(InspectArgs),
}

/// Location of the Helix credentials file
#[derive(Args, Debug, Clone)]
pub struct CredentialsArgs {
    /// Path to the Helix credentials file (defaults to ~/.helix/credentials)
    #[arg(long = "helix-credentials", env = "HELIX_CREDENTIALS", value_name = "PATH")]
    pub helix_credentials: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct GetSecretArgs {
    #[command(flatten)]
    pub credentials: CredentialsArgs,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Prompt passed to `helix run --prompt`
    #[arg(long)]
    pub prompt: String,

    #[command(flatten)]
    pub credentials: CredentialsArgs,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub credentials: CredentialsArgs,
}
