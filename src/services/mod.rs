//! Service layer
//!
//! Business logic coordinating the domain ports.

pub mod credentials_service;

pub use credentials_service::{CredentialsService, Resolution};
