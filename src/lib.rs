//! helix-runner - run Helix CLI prompts inside containers
//!
//! Reads a Helix credentials file (`~/.helix/credentials`), injects the API
//! key as a container secret and the API URL and active tools as environment
//! variables, then runs `helix run --prompt ...` in the container and returns
//! its stdout.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): credentials parser, container description,
//!   runtime port and errors
//! - **Service Layer** (`services`): credentials loading and Helix invocations
//! - **Infrastructure Layer** (`infrastructure`): docker CLI runtime,
//!   configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use helix_runner::parse_credentials;
//!
//! let config = parse_credentials("HELIX_API_KEY=a1b2\nHELIX_API_URL=http://localhost");
//! assert_eq!(config.api_key, "a1b2");
//! assert_eq!(config.api_url, "http://localhost");
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::error::{ContainerError, HelixError, HelixResult};
pub use domain::models::{
    parse_credentials, Config, Container, CredentialConfig, CredentialParser, Secret,
    DEFAULT_API_URL,
};
pub use domain::ports::ContainerRuntime;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::container::{DockerCliConfig, DockerCliRuntime};
pub use services::{CredentialSummary, HelixService, HelixSettings};
