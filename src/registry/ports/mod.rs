//! Port contracts for the registry.

pub mod store;

pub use store::{RegistryStore, RegistryStoreError, RegistryStoreResult};
