//! Patient entity.

use super::{PatientId, RegistryDomainError, Sex};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A patient known to the registry.
///
/// Identity is the only immutable field; name, sex, and date of birth may all
/// be overwritten after creation. Names are not unique: two patients sharing
/// a name (and even sex and date of birth) remain distinct entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    id: PatientId,
    name: String,
    sex: Sex,
    dob: NaiveDate,
}

impl Patient {
    /// Creates a patient with a freshly assigned identity.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError::EmptyPatientName`] when the name is
    /// blank.
    pub fn new(
        name: impl Into<String>,
        sex: Sex,
        dob: NaiveDate,
    ) -> Result<Self, RegistryDomainError> {
        Ok(Self {
            id: PatientId::new(),
            name: validated_name(name.into())?,
            sex,
            dob,
        })
    }

    /// Reconstructs a patient from persisted storage, re-validating the
    /// stored name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError::EmptyPatientName`] when the persisted
    /// name is blank.
    pub fn from_persisted(
        id: PatientId,
        name: impl Into<String>,
        sex: Sex,
        dob: NaiveDate,
    ) -> Result<Self, RegistryDomainError> {
        Ok(Self {
            id,
            name: validated_name(name.into())?,
            sex,
            dob,
        })
    }

    /// Returns the patient identifier.
    #[must_use]
    pub const fn id(&self) -> PatientId {
        self.id
    }

    /// Returns the patient name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the patient sex.
    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.sex
    }

    /// Returns the patient date of birth.
    #[must_use]
    pub const fn dob(&self) -> NaiveDate {
        self.dob
    }

    /// Replaces the patient name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError::EmptyPatientName`] when the new name is
    /// blank.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), RegistryDomainError> {
        self.name = validated_name(name.into())?;
        Ok(())
    }

    /// Replaces the patient sex.
    pub const fn set_sex(&mut self, sex: Sex) {
        self.sex = sex;
    }

    /// Replaces the patient date of birth.
    pub const fn set_dob(&mut self, dob: NaiveDate) {
        self.dob = dob;
    }
}

fn validated_name(raw: String) -> Result<String, RegistryDomainError> {
    if raw.trim().is_empty() {
        return Err(RegistryDomainError::EmptyPatientName);
    }
    Ok(raw)
}
