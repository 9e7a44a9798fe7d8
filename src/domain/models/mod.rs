//! Domain models

pub mod config;
pub mod container;
pub mod credentials;

pub use config::{Config, ImagesConfig, LoggingConfig, RuntimeConfig};
pub use container::{Container, Mount, Secret};
pub use credentials::{parse_credentials, CredentialConfig, CredentialParser, DEFAULT_API_URL};
