//! Semmelweis: a small clinical visit registry.
//!
//! This crate tracks hospitals, patients, and the visits that associate a
//! patient with a hospital on a given date. It answers the two relationship
//! queries (which patients have ever visited a hospital, and which hospitals
//! a patient has ever visited) and provides lifecycle management for the
//! hospital and patient entities themselves.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, wire formats)
//!
//! # Modules
//!
//! - [`registry`]: Visit registration, relationship listings, and entity CRUD

pub mod registry;
