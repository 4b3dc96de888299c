//! Visit join record.

use super::{HospitalId, PatientId, VisitId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Insert payload for a visit not yet persisted.
///
/// The store assigns the visit identifier at insertion; until then the
/// record is represented by its foreign keys and date alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVisit {
    hospital: HospitalId,
    patient: PatientId,
    visit_date: NaiveDate,
}

impl NewVisit {
    /// Creates an insert payload linking a hospital and a patient on a date.
    #[must_use]
    pub const fn new(hospital: HospitalId, patient: PatientId, visit_date: NaiveDate) -> Self {
        Self {
            hospital,
            patient,
            visit_date,
        }
    }

    /// Returns the referenced hospital identifier.
    #[must_use]
    pub const fn hospital(&self) -> HospitalId {
        self.hospital
    }

    /// Returns the referenced patient identifier.
    #[must_use]
    pub const fn patient(&self) -> PatientId {
        self.patient
    }

    /// Returns the visit date.
    #[must_use]
    pub const fn visit_date(&self) -> NaiveDate {
        self.visit_date
    }
}

/// A persisted visit: one hospital, one patient, one date.
///
/// Visits are immutable once created. Multiple visits may exist for the same
/// (hospital, patient) pair, including on the same date. The references were
/// validated when the visit was registered; a later delete of the hospital or
/// patient may leave them dangling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    id: VisitId,
    hospital: HospitalId,
    patient: PatientId,
    visit_date: NaiveDate,
}

impl Visit {
    /// Reconstructs a visit from its store-assigned identifier and insert
    /// payload.
    #[must_use]
    pub const fn from_persisted(id: VisitId, record: NewVisit) -> Self {
        Self {
            id,
            hospital: record.hospital,
            patient: record.patient,
            visit_date: record.visit_date,
        }
    }

    /// Returns the store-assigned visit identifier.
    #[must_use]
    pub const fn id(&self) -> VisitId {
        self.id
    }

    /// Returns the referenced hospital identifier.
    #[must_use]
    pub const fn hospital(&self) -> HospitalId {
        self.hospital
    }

    /// Returns the referenced patient identifier.
    #[must_use]
    pub const fn patient(&self) -> PatientId {
        self.patient
    }

    /// Returns the visit date.
    #[must_use]
    pub const fn visit_date(&self) -> NaiveDate {
        self.visit_date
    }
}
