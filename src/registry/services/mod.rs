//! Orchestration services for the registry.

pub mod registry;

pub use registry::{
    RegistrationAck, RegistryService, RegistryServiceError, RegistryServiceResult,
};
