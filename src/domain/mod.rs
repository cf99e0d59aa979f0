//! Domain layer for the credentials endpoint
//!
//! This module contains the credentials model, error classification and the
//! ports implemented by infrastructure adapters.

pub mod error;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use error::{EncodeError, ResolveError, StoreError};
