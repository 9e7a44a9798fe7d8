//! Domain layer for helix-runner
//!
//! Credentials parsing, the container description and the runtime port.

pub mod error;
pub mod models;
pub mod ports;

pub use error::{ContainerError, HelixError, HelixResult};
