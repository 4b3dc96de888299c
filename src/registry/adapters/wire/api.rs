//! Wire-facing facade over the registry service.

use super::dto::{
    CreateHospitalRequest, CreatePatientRequest, DeleteHospitalResponse, DeletePatientResponse,
    HospitalIdMessage, HospitalList, HospitalTuple, PatientIdMessage, PatientList, PatientRecord,
    PatientTuple, RegisterAck, RegisterVisitRequest, UpdateHospitalRequest, UpdatePatientRequest,
    WireDate,
};
use crate::registry::{
    domain::{Hospital, HospitalId, Patient, PatientId, Sex},
    ports::RegistryStore,
    services::{RegistryService, RegistryServiceError},
};
use chrono::NaiveDate;
use mockable::Clock;
use thiserror::Error;
use uuid::Uuid;

/// Result type for wire operations.
pub type WireResult<T> = Result<T, WireError>;

/// Errors produced while decoding wire messages or executing the underlying
/// operation.
#[derive(Debug, Error)]
pub enum WireError {
    /// An identity string could not be parsed back into an internal key.
    ///
    /// This is a transport concern: a well-formed but unknown identity is
    /// reported as not-found by the core instead.
    #[error("malformed identity: {0}")]
    MalformedIdentity(String),

    /// A date triple does not name a real calendar date.
    #[error("invalid calendar date: {year}-{month}-{day}")]
    InvalidDate {
        /// Calendar year from the wire.
        year: i32,
        /// Calendar month from the wire.
        month: i32,
        /// Day of month from the wire.
        day: i32,
    },

    /// The registry service rejected the operation.
    #[error(transparent)]
    Service(#[from] RegistryServiceError),
}

/// Wire adapter translating transport messages to and from registry service
/// calls.
#[derive(Clone)]
pub struct WireRegistry<S, C>
where
    S: RegistryStore,
    C: Clock + Send + Sync,
{
    service: RegistryService<S, C>,
}

impl<S, C> WireRegistry<S, C>
where
    S: RegistryStore,
    C: Clock + Send + Sync,
{
    /// Creates a wire adapter over a registry service.
    #[must_use]
    pub const fn new(service: RegistryService<S, C>) -> Self {
        Self { service }
    }

    /// Creates a hospital, returning its assigned identity.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Service`] when the name is blank or persistence
    /// fails.
    pub async fn create_hospital(
        &self,
        request: CreateHospitalRequest,
    ) -> WireResult<HospitalIdMessage> {
        let hospital = self.service.create_hospital(request.name).await?;
        Ok(HospitalIdMessage {
            id: hospital.id().to_string(),
        })
    }

    /// Updates a hospital's name; a blank name is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::MalformedIdentity`] when the identity string does
    /// not parse, or [`WireError::Service`] when the hospital is unknown.
    pub async fn update_hospital(
        &self,
        request: UpdateHospitalRequest,
    ) -> WireResult<HospitalTuple> {
        let id = HospitalId::from_uuid(parse_identity(&request.id)?);
        let hospital = self.service.update_hospital(id, &request.name).await?;
        Ok(hospital_tuple(&hospital))
    }

    /// Deletes a hospital, reporting whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::MalformedIdentity`] when the identity string does
    /// not parse, or [`WireError::Service`] when persistence fails.
    pub async fn delete_hospital(
        &self,
        request: HospitalIdMessage,
    ) -> WireResult<DeleteHospitalResponse> {
        let id = HospitalId::from_uuid(parse_identity(&request.id)?);
        let deleted = self.service.delete_hospital(id).await?;
        Ok(DeleteHospitalResponse {
            id: request.id,
            deleted,
        })
    }

    /// Lists all hospitals.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Service`] when persistence lookup fails.
    pub async fn list_hospitals(&self) -> WireResult<HospitalList> {
        let hospitals = self.service.list_hospitals().await?;
        Ok(HospitalList {
            hospitals: hospitals.iter().map(hospital_tuple).collect(),
        })
    }

    /// Lists the distinct patients that have ever visited a hospital.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::MalformedIdentity`] when the identity string does
    /// not parse, or [`WireError::Service`] when persistence lookup fails.
    pub async fn list_patients_of_hospital(
        &self,
        request: HospitalIdMessage,
    ) -> WireResult<PatientList> {
        let id = HospitalId::from_uuid(parse_identity(&request.id)?);
        let patients = self.service.patients_of_hospital(id).await?;
        Ok(PatientList {
            patients: patients.iter().map(patient_tuple).collect(),
        })
    }

    /// Creates a patient, returning its assigned identity.
    ///
    /// Out-of-range sex codes clamp to unspecified rather than erroring.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::InvalidDate`] when the date of birth is not a
    /// real calendar date, or [`WireError::Service`] when the name is blank
    /// or persistence fails.
    pub async fn create_patient(
        &self,
        request: CreatePatientRequest,
    ) -> WireResult<PatientIdMessage> {
        let dob = parse_date(request.dob)?;
        let patient = self
            .service
            .create_patient(request.name, Sex::from_wire(request.sex), dob)
            .await?;
        Ok(PatientIdMessage {
            id: patient.id().to_string(),
        })
    }

    /// Updates a patient; blank names are a no-op, sex and date of birth
    /// always overwrite.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::MalformedIdentity`] or [`WireError::InvalidDate`]
    /// on decode failure, or [`WireError::Service`] when the patient is
    /// unknown.
    pub async fn update_patient(&self, request: UpdatePatientRequest) -> WireResult<PatientRecord> {
        let id = PatientId::from_uuid(parse_identity(&request.id)?);
        let dob = parse_date(request.dob)?;
        let patient = self
            .service
            .update_patient(id, &request.name, Sex::from_wire(request.sex), dob)
            .await?;
        Ok(patient_record(&patient))
    }

    /// Deletes a patient, reporting whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::MalformedIdentity`] when the identity string does
    /// not parse, or [`WireError::Service`] when persistence fails.
    pub async fn delete_patient(
        &self,
        request: PatientIdMessage,
    ) -> WireResult<DeletePatientResponse> {
        let id = PatientId::from_uuid(parse_identity(&request.id)?);
        let deleted = self.service.delete_patient(id).await?;
        Ok(DeletePatientResponse {
            id: request.id,
            deleted,
        })
    }

    /// Lists all patients.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Service`] when persistence lookup fails.
    pub async fn list_patients(&self) -> WireResult<PatientList> {
        let patients = self.service.list_patients().await?;
        Ok(PatientList {
            patients: patients.iter().map(patient_tuple).collect(),
        })
    }

    /// Lists the distinct hospitals a patient has ever visited.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::MalformedIdentity`] when the identity string does
    /// not parse, or [`WireError::Service`] when persistence lookup fails.
    pub async fn list_hospitals_of_patient(
        &self,
        request: PatientIdMessage,
    ) -> WireResult<HospitalList> {
        let id = PatientId::from_uuid(parse_identity(&request.id)?);
        let hospitals = self.service.hospitals_of_patient(id).await?;
        Ok(HospitalList {
            hospitals: hospitals.iter().map(hospital_tuple).collect(),
        })
    }

    /// Registers a visit linking an existing hospital and patient.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::MalformedIdentity`] or [`WireError::InvalidDate`]
    /// on decode failure, or [`WireError::Service`] when either reference is
    /// unknown.
    pub async fn register_visit(&self, request: RegisterVisitRequest) -> WireResult<RegisterAck> {
        let hospital = HospitalId::from_uuid(parse_identity(&request.hospital_id)?);
        let patient = PatientId::from_uuid(parse_identity(&request.patient_id)?);
        let visit_date = request.visit_date.map(parse_date).transpose()?;
        let ack = self
            .service
            .register_visit(hospital, patient, visit_date)
            .await?;
        Ok(RegisterAck {
            registered: ack.registered(),
            hospital_id: ack.hospital().to_string(),
            patient_id: ack.patient().to_string(),
        })
    }
}

fn parse_identity(raw: &str) -> WireResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| WireError::MalformedIdentity(raw.to_owned()))
}

fn parse_date(date: WireDate) -> WireResult<NaiveDate> {
    date.to_naive_date().ok_or(WireError::InvalidDate {
        year: date.year,
        month: date.month,
        day: date.day,
    })
}

fn hospital_tuple(hospital: &Hospital) -> HospitalTuple {
    HospitalTuple {
        id: hospital.id().to_string(),
        name: hospital.name().to_owned(),
    }
}

fn patient_tuple(patient: &Patient) -> PatientTuple {
    PatientTuple {
        id: patient.id().to_string(),
        name: patient.name().to_owned(),
    }
}

fn patient_record(patient: &Patient) -> PatientRecord {
    PatientRecord {
        id: patient.id().to_string(),
        name: patient.name().to_owned(),
        sex: patient.sex().to_wire(),
        dob: WireDate::from(patient.dob()),
    }
}
