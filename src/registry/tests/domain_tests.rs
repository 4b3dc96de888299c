//! Unit tests for registry domain types.

use crate::registry::domain::{
    Hospital, HospitalId, NewVisit, Patient, PatientId, RegistryDomainError, Sex, Visit, VisitId,
};
use chrono::NaiveDate;
use rstest::rstest;
use uuid::Uuid;

fn dob() -> NaiveDate {
    NaiveDate::from_ymd_opt(1984, 3, 17).expect("valid date")
}

// ── Hospital name validation ───────────────────────────────────────

#[rstest]
#[case("City Hospital")]
#[case("st. mary's")]
#[case("x")]
fn valid_hospital_names_are_accepted(#[case] input: &str) {
    let hospital = Hospital::new(input).expect("name should be valid");
    assert_eq!(hospital.name(), input);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn blank_hospital_name_is_rejected(#[case] input: &str) {
    let result = Hospital::new(input);
    assert!(matches!(result, Err(RegistryDomainError::EmptyHospitalName)));
}

#[rstest]
fn hospital_name_is_stored_verbatim() {
    let hospital = Hospital::new("  City Hospital  ").expect("non-blank name");
    assert_eq!(hospital.name(), "  City Hospital  ");
}

#[rstest]
fn failed_rename_leaves_name_unchanged() {
    let mut hospital = Hospital::new("City Hospital").expect("valid name");
    let result = hospital.rename("  ");
    assert!(matches!(result, Err(RegistryDomainError::EmptyHospitalName)));
    assert_eq!(hospital.name(), "City Hospital");
}

#[rstest]
fn hospitals_sharing_a_name_have_distinct_ids() {
    let first = Hospital::new("City Hospital").expect("valid name");
    let second = Hospital::new("City Hospital").expect("valid name");
    assert_ne!(first.id(), second.id());
}

#[rstest]
fn hospital_from_persisted_rejects_blank_name() {
    let result = Hospital::from_persisted(HospitalId::new(), "");
    assert!(matches!(result, Err(RegistryDomainError::EmptyHospitalName)));
}

// ── Patient validation and mutation ────────────────────────────────

#[rstest]
fn patient_round_trips_attributes() {
    let patient = Patient::new("Alice", Sex::Female, dob()).expect("valid patient");
    assert_eq!(patient.name(), "Alice");
    assert_eq!(patient.sex(), Sex::Female);
    assert_eq!(patient.dob(), dob());
}

#[rstest]
#[case("")]
#[case("  ")]
fn blank_patient_name_is_rejected(#[case] input: &str) {
    let result = Patient::new(input, Sex::Male, dob());
    assert!(matches!(result, Err(RegistryDomainError::EmptyPatientName)));
}

#[rstest]
fn failed_set_name_leaves_patient_unchanged() {
    let mut patient = Patient::new("Bob", Sex::Male, dob()).expect("valid patient");
    let result = patient.set_name("");
    assert!(matches!(result, Err(RegistryDomainError::EmptyPatientName)));
    assert_eq!(patient.name(), "Bob");
}

#[rstest]
fn patients_sharing_all_attributes_have_distinct_ids() {
    let first = Patient::new("Bob", Sex::Male, dob()).expect("valid patient");
    let second = Patient::new("Bob", Sex::Male, dob()).expect("valid patient");
    assert_ne!(first.id(), second.id());
}

// ── Sex enumeration ────────────────────────────────────────────────

#[rstest]
#[case(0, Sex::Unspecified)]
#[case(1, Sex::Male)]
#[case(2, Sex::Female)]
#[case(3, Sex::Other)]
fn known_wire_codes_decode(#[case] code: i32, #[case] expected: Sex) {
    assert_eq!(Sex::from_wire(code), expected);
    assert_eq!(expected.to_wire(), code);
}

#[rstest]
#[case(-1)]
#[case(4)]
#[case(i32::MAX)]
fn out_of_range_wire_codes_clamp_to_unspecified(#[case] code: i32) {
    assert_eq!(Sex::from_wire(code), Sex::Unspecified);
}

#[rstest]
#[case("male", Sex::Male)]
#[case("FEMALE", Sex::Female)]
#[case(" other ", Sex::Other)]
#[case("unspecified", Sex::Unspecified)]
fn storage_strings_parse(#[case] input: &str, #[case] expected: Sex) {
    assert_eq!(Sex::try_from(input).expect("known value"), expected);
}

#[rstest]
fn unknown_storage_string_is_rejected() {
    let result = Sex::try_from("neuter");
    assert!(result.is_err());
}

#[rstest]
fn sex_storage_round_trips() {
    for sex in [Sex::Unspecified, Sex::Male, Sex::Female, Sex::Other] {
        assert_eq!(Sex::try_from(sex.as_str()).expect("round trip"), sex);
    }
}

// ── Identifiers and visits ─────────────────────────────────────────

#[rstest]
fn hospital_id_display_parses_back() {
    let id = HospitalId::new();
    let parsed = Uuid::parse_str(&id.to_string()).expect("canonical uuid string");
    assert_eq!(HospitalId::from_uuid(parsed), id);
}

#[rstest]
fn patient_id_display_parses_back() {
    let id = PatientId::new();
    let parsed = Uuid::parse_str(&id.to_string()).expect("canonical uuid string");
    assert_eq!(PatientId::from_uuid(parsed), id);
}

#[rstest]
fn visit_preserves_references_and_date() {
    let hospital = HospitalId::new();
    let patient = PatientId::new();
    let date = NaiveDate::from_ymd_opt(2024, 7, 9).expect("valid date");
    let visit = Visit::from_persisted(VisitId::from_i64(7), NewVisit::new(hospital, patient, date));

    assert_eq!(visit.id().into_inner(), 7);
    assert_eq!(visit.hospital(), hospital);
    assert_eq!(visit.patient(), patient);
    assert_eq!(visit.visit_date(), date);
}
