//! Serde message shapes for the registry transport contract.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar date decomposed into integer fields, as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireDate {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: i32,
    /// Day of month, 1-31.
    pub day: i32,
}

impl WireDate {
    /// Decodes the triple into a calendar date.
    ///
    /// Returns `None` when the fields do not name a real calendar date.
    #[must_use]
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        let month = u32::try_from(self.month).ok()?;
        let day = u32::try_from(self.day).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)
    }
}

impl From<NaiveDate> for WireDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: i32::try_from(date.month()).unwrap_or_default(),
            day: i32::try_from(date.day()).unwrap_or_default(),
        }
    }
}

/// Request to create a hospital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateHospitalRequest {
    /// Hospital display name.
    pub name: String,
}

/// Request to update a hospital; a blank name leaves the stored name
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateHospitalRequest {
    /// Hospital identity string.
    pub id: String,
    /// Replacement name, or blank for no change.
    pub name: String,
}

/// Message carrying a hospital identity string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalIdMessage {
    /// Hospital identity string.
    pub id: String,
}

/// Response to a hospital delete request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteHospitalResponse {
    /// The identity the delete targeted.
    pub id: String,
    /// Whether a row was removed; `false` for an unknown identity.
    pub deleted: bool,
}

/// Identity and name of a hospital, as emitted by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalTuple {
    /// Hospital identity string.
    pub id: String,
    /// Hospital display name.
    pub name: String,
}

/// Sequence of hospital tuples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalList {
    /// Listed hospitals.
    pub hospitals: Vec<HospitalTuple>,
}

/// Request to create a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    /// Patient display name.
    pub name: String,
    /// Sex enumeration code; out-of-range codes clamp to unspecified.
    pub sex: i32,
    /// Date of birth.
    pub dob: WireDate,
}

/// Request to update a patient; a blank name leaves the stored name
/// unchanged, while sex and date of birth always overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePatientRequest {
    /// Patient identity string.
    pub id: String,
    /// Replacement name, or blank for no change.
    pub name: String,
    /// Sex enumeration code, always applied.
    pub sex: i32,
    /// Date of birth, always applied.
    pub dob: WireDate,
}

/// Message carrying a patient identity string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientIdMessage {
    /// Patient identity string.
    pub id: String,
}

/// Full patient record, as returned by update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Patient identity string.
    pub id: String,
    /// Patient display name.
    pub name: String,
    /// Sex enumeration code.
    pub sex: i32,
    /// Date of birth.
    pub dob: WireDate,
}

/// Response to a patient delete request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePatientResponse {
    /// The identity the delete targeted.
    pub id: String,
    /// Whether a row was removed; `false` for an unknown identity.
    pub deleted: bool,
}

/// Identity and name of a patient, as emitted by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientTuple {
    /// Patient identity string.
    pub id: String,
    /// Patient display name.
    pub name: String,
}

/// Sequence of patient tuples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientList {
    /// Listed patients.
    pub patients: Vec<PatientTuple>,
}

/// Request to register a visit linking an existing hospital and patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterVisitRequest {
    /// Hospital identity string.
    pub hospital_id: String,
    /// Patient identity string.
    pub patient_id: String,
    /// Visit date; the current date is used when absent.
    pub visit_date: Option<WireDate>,
}

/// Acknowledgement of a successful visit registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterAck {
    /// Whether the registration was recorded.
    pub registered: bool,
    /// Hospital identity string echoed from the request.
    pub hospital_id: String,
    /// Patient identity string echoed from the request.
    pub patient_id: String,
}
