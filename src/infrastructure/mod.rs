//! Infrastructure layer module
//!
//! Adapters for everything outside the domain:
//! - Configuration management
//! - Logging
//! - Container runtime (docker CLI)

pub mod config;
pub mod container;
pub mod logging;
