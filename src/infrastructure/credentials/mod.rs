//! Credentials management infrastructure
//!
//! Stores backing the credentials endpoint:
//! - In-memory credentials manager
//! - YAML seed file loading

pub mod in_memory;

pub use in_memory::InMemoryCredentialsManager;
