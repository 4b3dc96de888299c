//! Adapter implementations for the registry ports.

pub mod memory;
pub mod postgres;
pub mod wire;
