//! Container runtime adapters

pub mod docker;

pub use docker::{DockerCliConfig, DockerCliRuntime};
