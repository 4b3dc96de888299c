//! Store port for registry persistence and relationship queries.

use crate::registry::domain::{Hospital, HospitalId, NewVisit, Patient, PatientId, Visit};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for registry store operations.
pub type RegistryStoreResult<T> = Result<T, RegistryStoreError>;

/// Registry persistence contract.
///
/// One keyed collection per entity type, plus the relationship queries over
/// the visit table. Implementations must preserve visit insertion order in
/// [`RegistryStore::visits_by_hospital`] and
/// [`RegistryStore::visits_by_patient`], since the first-seen de-duplication
/// of the hospital→patients listing depends on it.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// Inserts or updates a hospital row keyed by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryStoreError::Persistence`] when the write fails.
    async fn upsert_hospital(&self, hospital: &Hospital) -> RegistryStoreResult<()>;

    /// Finds a hospital by identifier.
    ///
    /// Returns `None` when the hospital does not exist.
    async fn find_hospital(&self, id: HospitalId) -> RegistryStoreResult<Option<Hospital>>;

    /// Reports whether a hospital row exists.
    async fn hospital_exists(&self, id: HospitalId) -> RegistryStoreResult<bool>;

    /// Deletes a hospital row, reporting whether a row was removed.
    ///
    /// Deleting an unknown identifier is a normal outcome (`false`), never an
    /// error.
    async fn delete_hospital(&self, id: HospitalId) -> RegistryStoreResult<bool>;

    /// Returns all hospital rows.
    async fn list_hospitals(&self) -> RegistryStoreResult<Vec<Hospital>>;

    /// Inserts or updates a patient row keyed by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryStoreError::Persistence`] when the write fails.
    async fn upsert_patient(&self, patient: &Patient) -> RegistryStoreResult<()>;

    /// Finds a patient by identifier.
    ///
    /// Returns `None` when the patient does not exist.
    async fn find_patient(&self, id: PatientId) -> RegistryStoreResult<Option<Patient>>;

    /// Reports whether a patient row exists.
    async fn patient_exists(&self, id: PatientId) -> RegistryStoreResult<bool>;

    /// Deletes a patient row, reporting whether a row was removed.
    ///
    /// Deleting an unknown identifier is a normal outcome (`false`), never an
    /// error.
    async fn delete_patient(&self, id: PatientId) -> RegistryStoreResult<bool>;

    /// Returns all patient rows.
    async fn list_patients(&self) -> RegistryStoreResult<Vec<Patient>>;

    /// Appends a visit row, returning it with its store-assigned identifier.
    ///
    /// Identifiers are assigned monotonically. Duplicate (hospital, patient)
    /// pairs are permitted, including on the same date.
    async fn insert_visit(&self, record: NewVisit) -> RegistryStoreResult<Visit>;

    /// Returns all visits referencing the given hospital, in insertion order.
    async fn visits_by_hospital(&self, id: HospitalId) -> RegistryStoreResult<Vec<Visit>>;

    /// Returns all visits referencing the given patient, in insertion order.
    async fn visits_by_patient(&self, id: PatientId) -> RegistryStoreResult<Vec<Visit>>;

    /// Returns the distinct hospitals the given patient has ever visited.
    ///
    /// De-duplication happens at the storage layer (set semantics); ordering
    /// is unspecified beyond each hospital appearing exactly once.
    async fn distinct_hospitals_of_patient(
        &self,
        id: PatientId,
    ) -> RegistryStoreResult<Vec<Hospital>>;
}

/// Errors returned by registry store implementations.
#[derive(Debug, Clone, Error)]
pub enum RegistryStoreError {
    /// The referenced or targeted hospital was not found.
    #[error("hospital not found: {0}")]
    HospitalNotFound(HospitalId),

    /// The referenced or targeted patient was not found.
    #[error("patient not found: {0}")]
    PatientNotFound(PatientId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RegistryStoreError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
