//! Shared test helpers for in-memory store integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use semmelweis::registry::{
    adapters::memory::InMemoryRegistryStore,
    domain::{Hospital, Patient, Sex},
    services::{RegistryService, RegistryServiceError},
};
use chrono::NaiveDate;
use std::sync::Arc;

/// Service type used throughout the integration tests.
pub type TestService = RegistryService<InMemoryRegistryStore, DefaultClock>;

/// Provides a fresh in-memory store for each test.
#[fixture]
pub fn store() -> InMemoryRegistryStore {
    InMemoryRegistryStore::new()
}

/// Builds a registry service sharing state with the given store.
pub fn service_over(store: &InMemoryRegistryStore) -> TestService {
    RegistryService::new(Arc::new(store.clone()), Arc::new(DefaultClock))
}

/// A date of birth shared by the seeded patients.
pub fn dob() -> NaiveDate {
    NaiveDate::from_ymd_opt(1988, 9, 23).expect("valid date")
}

/// A fixed visit date for deterministic registrations.
pub fn visit_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).expect("valid date")
}

/// Creates "City Hospital" and the three canonical patients.
///
/// # Errors
///
/// Returns an error if any creation fails.
pub async fn seed_city_hospital(
    service: &TestService,
) -> Result<(Hospital, Vec<Patient>), RegistryServiceError> {
    let hospital = service.create_hospital("City Hospital").await?;
    let mut patients = Vec::new();
    for (name, sex) in [
        ("Alice", Sex::Female),
        ("Bob", Sex::Male),
        ("Charlie", Sex::Other),
    ] {
        patients.push(service.create_patient(name, sex, dob()).await?);
    }
    Ok((hospital, patients))
}
