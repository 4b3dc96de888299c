//! Wire adapter: transport message shapes and identity/date decoding.
//!
//! Identities cross the wire as canonical strings, calendar dates as
//! `(year, month, day)` integer triples, and patient sex as an integer code.
//! RPC framing itself belongs to the owning transport, not to this crate.

mod api;
mod dto;

pub use api::{WireError, WireRegistry, WireResult};
pub use dto::{
    CreateHospitalRequest, CreatePatientRequest, DeleteHospitalResponse, DeletePatientResponse,
    HospitalIdMessage, HospitalList, HospitalTuple, PatientIdMessage, PatientList, PatientRecord,
    PatientTuple, RegisterAck, RegisterVisitRequest, UpdateHospitalRequest, UpdatePatientRequest,
    WireDate,
};
