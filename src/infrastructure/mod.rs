//! Infrastructure layer
//!
//! Adapters for configuration, logging, auditing and credentials storage.

pub mod config;
pub mod credentials;
pub mod logging;
