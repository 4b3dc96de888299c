//! Diesel row models for registry persistence.

use super::schema::{hospitals, patients, visits};
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query and upsert model for hospital records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = hospitals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct HospitalRow {
    /// Hospital identifier.
    pub id: uuid::Uuid,
    /// Hospital display name.
    pub name: String,
}

/// Query and upsert model for patient records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = patients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PatientRow {
    /// Patient identifier.
    pub id: uuid::Uuid,
    /// Patient display name.
    pub name: String,
    /// Patient sex storage string.
    pub sex: String,
    /// Patient date of birth.
    pub dob: NaiveDate,
}

/// Query result row for visit records.
#[derive(Debug, Clone, Copy, Queryable, Selectable)]
#[diesel(table_name = visits)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct VisitRow {
    /// Store-assigned visit identifier.
    pub id: i64,
    /// Referenced hospital identifier.
    pub hospital_id: uuid::Uuid,
    /// Referenced patient identifier.
    pub patient_id: uuid::Uuid,
    /// Visit date.
    pub visit_date: NaiveDate,
}

/// Insert model for visit records; the serial identifier is assigned by the
/// database.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = visits)]
pub struct NewVisitRow {
    /// Referenced hospital identifier.
    pub hospital_id: uuid::Uuid,
    /// Referenced patient identifier.
    pub patient_id: uuid::Uuid,
    /// Visit date.
    pub visit_date: NaiveDate,
}
