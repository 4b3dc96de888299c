//! In-memory registry store.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::registry::{
    domain::{Hospital, HospitalId, NewVisit, Patient, PatientId, Visit, VisitId},
    ports::{RegistryStore, RegistryStoreError, RegistryStoreResult},
};

/// Thread-safe in-memory registry store.
///
/// Visits are kept in a plain vector so that insertion order survives, which
/// the first-seen de-duplication of the hospital→patients listing relies on.
#[derive(Debug, Clone)]
pub struct InMemoryRegistryStore {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug)]
struct InMemoryState {
    hospitals: HashMap<HospitalId, Hospital>,
    patients: HashMap<PatientId, Patient>,
    visits: Vec<Visit>,
    next_visit_id: i64,
}

impl Default for InMemoryState {
    fn default() -> Self {
        Self {
            hospitals: HashMap::new(),
            patients: HashMap::new(),
            visits: Vec::new(),
            next_visit_id: 1,
        }
    }
}

impl InMemoryRegistryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RegistryStoreResult<std::sync::RwLockReadGuard<'_, InMemoryState>> {
        self.state
            .read()
            .map_err(|err| RegistryStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> RegistryStoreResult<std::sync::RwLockWriteGuard<'_, InMemoryState>> {
        self.state
            .write()
            .map_err(|err| RegistryStoreError::persistence(std::io::Error::other(err.to_string())))
    }
}

impl Default for InMemoryRegistryStore {
    fn default() -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryState::default())),
        }
    }
}

#[async_trait]
impl RegistryStore for InMemoryRegistryStore {
    async fn upsert_hospital(&self, hospital: &Hospital) -> RegistryStoreResult<()> {
        let mut state = self.write()?;
        state.hospitals.insert(hospital.id(), hospital.clone());
        Ok(())
    }

    async fn find_hospital(&self, id: HospitalId) -> RegistryStoreResult<Option<Hospital>> {
        let state = self.read()?;
        Ok(state.hospitals.get(&id).cloned())
    }

    async fn hospital_exists(&self, id: HospitalId) -> RegistryStoreResult<bool> {
        let state = self.read()?;
        Ok(state.hospitals.contains_key(&id))
    }

    async fn delete_hospital(&self, id: HospitalId) -> RegistryStoreResult<bool> {
        let mut state = self.write()?;
        Ok(state.hospitals.remove(&id).is_some())
    }

    async fn list_hospitals(&self) -> RegistryStoreResult<Vec<Hospital>> {
        let state = self.read()?;
        Ok(state.hospitals.values().cloned().collect())
    }

    async fn upsert_patient(&self, patient: &Patient) -> RegistryStoreResult<()> {
        let mut state = self.write()?;
        state.patients.insert(patient.id(), patient.clone());
        Ok(())
    }

    async fn find_patient(&self, id: PatientId) -> RegistryStoreResult<Option<Patient>> {
        let state = self.read()?;
        Ok(state.patients.get(&id).cloned())
    }

    async fn patient_exists(&self, id: PatientId) -> RegistryStoreResult<bool> {
        let state = self.read()?;
        Ok(state.patients.contains_key(&id))
    }

    async fn delete_patient(&self, id: PatientId) -> RegistryStoreResult<bool> {
        let mut state = self.write()?;
        Ok(state.patients.remove(&id).is_some())
    }

    async fn list_patients(&self) -> RegistryStoreResult<Vec<Patient>> {
        let state = self.read()?;
        Ok(state.patients.values().cloned().collect())
    }

    async fn insert_visit(&self, record: NewVisit) -> RegistryStoreResult<Visit> {
        let mut state = self.write()?;
        let visit = Visit::from_persisted(VisitId::from_i64(state.next_visit_id), record);
        state.next_visit_id += 1;
        state.visits.push(visit);
        Ok(visit)
    }

    async fn visits_by_hospital(&self, id: HospitalId) -> RegistryStoreResult<Vec<Visit>> {
        let state = self.read()?;
        Ok(state
            .visits
            .iter()
            .filter(|v| v.hospital() == id)
            .copied()
            .collect())
    }

    async fn visits_by_patient(&self, id: PatientId) -> RegistryStoreResult<Vec<Visit>> {
        let state = self.read()?;
        Ok(state
            .visits
            .iter()
            .filter(|v| v.patient() == id)
            .copied()
            .collect())
    }

    async fn distinct_hospitals_of_patient(
        &self,
        id: PatientId,
    ) -> RegistryStoreResult<Vec<Hospital>> {
        let state = self.read()?;
        let mut seen = HashSet::new();
        let mut hospitals = Vec::new();
        for visit in state.visits.iter().filter(|v| v.patient() == id) {
            if seen.insert(visit.hospital())
                && let Some(hospital) = state.hospitals.get(&visit.hospital())
            {
                hospitals.push(hospital.clone());
            }
        }
        Ok(hospitals)
    }
}
