//! Service layer for the clinical visit registry.
//!
//! Provides [`RegistryService`] which coordinates visit registration, the two
//! de-duplicated relationship listings, and lifecycle CRUD for hospitals and
//! patients.

use crate::registry::{
    domain::{
        Hospital, HospitalId, NewVisit, Patient, PatientId, RegistryDomainError, Sex,
    },
    ports::{RegistryStore, RegistryStoreError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Acknowledgement returned by a successful visit registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationAck {
    hospital: HospitalId,
    patient: PatientId,
    registered: bool,
}

impl RegistrationAck {
    /// Returns the hospital the visit was registered against.
    #[must_use]
    pub const fn hospital(&self) -> HospitalId {
        self.hospital
    }

    /// Returns the patient the visit was registered for.
    #[must_use]
    pub const fn patient(&self) -> PatientId {
        self.patient
    }

    /// Reports whether the registration was recorded.
    #[must_use]
    pub const fn registered(&self) -> bool {
        self.registered
    }
}

/// Service-level errors for registry operations.
#[derive(Debug, Error)]
pub enum RegistryServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] RegistryDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] RegistryStoreError),
}

/// Result type for registry service operations.
pub type RegistryServiceResult<T> = Result<T, RegistryServiceError>;

/// Visit registration and relationship listing orchestration service.
#[derive(Clone)]
pub struct RegistryService<S, C>
where
    S: RegistryStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> RegistryService<S, C>
where
    S: RegistryStore,
    C: Clock + Send + Sync,
{
    /// Creates a new registry service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Creates a hospital with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Domain`] when the name is blank, or
    /// [`RegistryServiceError::Store`] when persistence fails.
    pub async fn create_hospital(
        &self,
        name: impl Into<String>,
    ) -> RegistryServiceResult<Hospital> {
        let hospital = Hospital::new(name)?;
        self.store.upsert_hospital(&hospital).await?;
        Ok(hospital)
    }

    /// Finds a hospital by identifier.
    ///
    /// Returns `Ok(None)` when no hospital has the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Store`] when persistence lookup fails.
    pub async fn find_hospital(
        &self,
        id: HospitalId,
    ) -> RegistryServiceResult<Option<Hospital>> {
        Ok(self.store.find_hospital(id).await?)
    }

    /// Updates a hospital's name.
    ///
    /// A blank name leaves the stored name unchanged; the update call still
    /// succeeds and returns the current record.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryStoreError::HospitalNotFound`] when the identifier
    /// does not resolve, or [`RegistryServiceError::Store`] when persistence
    /// fails.
    pub async fn update_hospital(
        &self,
        id: HospitalId,
        name: &str,
    ) -> RegistryServiceResult<Hospital> {
        let mut hospital = self
            .store
            .find_hospital(id)
            .await?
            .ok_or(RegistryStoreError::HospitalNotFound(id))?;
        if !name.trim().is_empty() {
            hospital.rename(name)?;
        }
        self.store.upsert_hospital(&hospital).await?;
        Ok(hospital)
    }

    /// Deletes a hospital, reporting whether a row was removed.
    ///
    /// Deleting an unknown identifier returns `false`, never an error.
    /// Existing visits referencing the hospital are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Store`] when persistence fails.
    pub async fn delete_hospital(&self, id: HospitalId) -> RegistryServiceResult<bool> {
        Ok(self.store.delete_hospital(id).await?)
    }

    /// Returns all hospitals, unfiltered and unpaginated.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Store`] when persistence lookup fails.
    pub async fn list_hospitals(&self) -> RegistryServiceResult<Vec<Hospital>> {
        Ok(self.store.list_hospitals().await?)
    }

    /// Creates a patient with the given attributes.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Domain`] when the name is blank, or
    /// [`RegistryServiceError::Store`] when persistence fails.
    pub async fn create_patient(
        &self,
        name: impl Into<String>,
        sex: Sex,
        dob: NaiveDate,
    ) -> RegistryServiceResult<Patient> {
        let patient = Patient::new(name, sex, dob)?;
        self.store.upsert_patient(&patient).await?;
        Ok(patient)
    }

    /// Finds a patient by identifier.
    ///
    /// Returns `Ok(None)` when no patient has the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Store`] when persistence lookup fails.
    pub async fn find_patient(&self, id: PatientId) -> RegistryServiceResult<Option<Patient>> {
        Ok(self.store.find_patient(id).await?)
    }

    /// Updates a patient's attributes.
    ///
    /// A blank name leaves the stored name unchanged, while sex and date of
    /// birth are always overwritten with the supplied values. The asymmetry
    /// is part of the update contract, not an accident of implementation.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryStoreError::PatientNotFound`] when the identifier
    /// does not resolve, or [`RegistryServiceError::Store`] when persistence
    /// fails.
    pub async fn update_patient(
        &self,
        id: PatientId,
        name: &str,
        sex: Sex,
        dob: NaiveDate,
    ) -> RegistryServiceResult<Patient> {
        let mut patient = self
            .store
            .find_patient(id)
            .await?
            .ok_or(RegistryStoreError::PatientNotFound(id))?;
        if !name.trim().is_empty() {
            patient.set_name(name)?;
        }
        patient.set_sex(sex);
        patient.set_dob(dob);
        self.store.upsert_patient(&patient).await?;
        Ok(patient)
    }

    /// Deletes a patient, reporting whether a row was removed.
    ///
    /// Deleting an unknown identifier returns `false`, never an error.
    /// Existing visits referencing the patient are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Store`] when persistence fails.
    pub async fn delete_patient(&self, id: PatientId) -> RegistryServiceResult<bool> {
        Ok(self.store.delete_patient(id).await?)
    }

    /// Returns all patients, unfiltered and unpaginated.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Store`] when persistence lookup fails.
    pub async fn list_patients(&self) -> RegistryServiceResult<Vec<Patient>> {
        Ok(self.store.list_patients().await?)
    }

    /// Registers a visit linking an existing hospital and patient.
    ///
    /// The visit date defaults to the current date when not supplied. Both
    /// references are checked before anything is written, so a failed
    /// registration never leaves a partial row behind. The existence checks
    /// and the insert are separate store calls: a concurrent delete of the
    /// hospital or patient between them can leave the new visit dangling.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryStoreError::HospitalNotFound`] or
    /// [`RegistryStoreError::PatientNotFound`] when a reference does not
    /// resolve, or [`RegistryServiceError::Store`] when persistence fails.
    pub async fn register_visit(
        &self,
        hospital: HospitalId,
        patient: PatientId,
        visit_date: Option<NaiveDate>,
    ) -> RegistryServiceResult<RegistrationAck> {
        if !self.store.hospital_exists(hospital).await? {
            return Err(RegistryStoreError::HospitalNotFound(hospital).into());
        }
        if !self.store.patient_exists(patient).await? {
            return Err(RegistryStoreError::PatientNotFound(patient).into());
        }

        let date = visit_date.unwrap_or_else(|| self.clock.utc().date_naive());
        self.store
            .insert_visit(NewVisit::new(hospital, patient, date))
            .await?;

        Ok(RegistrationAck {
            hospital,
            patient,
            registered: true,
        })
    }

    /// Returns the distinct patients that have ever visited a hospital.
    ///
    /// Each patient appears exactly once, in the order of their first
    /// qualifying visit (first-seen-wins, keyed by patient identity, never by
    /// name). An unknown hospital identifier yields an empty list. Visits
    /// whose patient no longer resolves are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Store`] when persistence lookup fails.
    pub async fn patients_of_hospital(
        &self,
        hospital: HospitalId,
    ) -> RegistryServiceResult<Vec<Patient>> {
        let visits = self.store.visits_by_hospital(hospital).await?;
        let mut seen = HashSet::new();
        let mut patients = Vec::new();
        for visit in visits {
            if seen.insert(visit.patient())
                && let Some(patient) = self.store.find_patient(visit.patient()).await?
            {
                patients.push(patient);
            }
        }
        Ok(patients)
    }

    /// Returns the distinct hospitals a patient has ever visited.
    ///
    /// De-duplication is delegated to the store's distinct relationship
    /// query; each hospital appears exactly once but ordering is unspecified.
    /// An unknown patient identifier yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Store`] when persistence lookup fails.
    pub async fn hospitals_of_patient(
        &self,
        patient: PatientId,
    ) -> RegistryServiceResult<Vec<Hospital>> {
        Ok(self.store.distinct_hospitals_of_patient(patient).await?)
    }
}
