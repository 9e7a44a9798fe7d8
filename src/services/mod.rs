//! Service layer
//!
//! Coordinates credentials loading and container execution.

pub mod helix_service;

pub use helix_service::{CredentialSummary, HelixService, HelixSettings};
