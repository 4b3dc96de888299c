//! Clinical visit registry for Semmelweis.
//!
//! This module implements the registry core: registering a visit that links
//! an existing hospital and patient, the two de-duplicated relationship
//! listings, and lifecycle CRUD for the hospital and patient entities. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
