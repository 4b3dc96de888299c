//! Hospital entity.

use super::{HospitalId, RegistryDomainError};
use serde::{Deserialize, Serialize};

/// A hospital known to the registry.
///
/// Hospitals carry only an identity and a display name. Names are not unique:
/// two hospitals may share a name and remain distinct entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hospital {
    id: HospitalId,
    name: String,
}

impl Hospital {
    /// Creates a hospital with a freshly assigned identity.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError::EmptyHospitalName`] when the name is
    /// blank.
    pub fn new(name: impl Into<String>) -> Result<Self, RegistryDomainError> {
        Ok(Self {
            id: HospitalId::new(),
            name: validated_name(name.into())?,
        })
    }

    /// Reconstructs a hospital from persisted storage, re-validating the
    /// stored name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError::EmptyHospitalName`] when the persisted
    /// name is blank.
    pub fn from_persisted(
        id: HospitalId,
        name: impl Into<String>,
    ) -> Result<Self, RegistryDomainError> {
        Ok(Self {
            id,
            name: validated_name(name.into())?,
        })
    }

    /// Returns the hospital identifier.
    #[must_use]
    pub const fn id(&self) -> HospitalId {
        self.id
    }

    /// Returns the hospital name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the hospital name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError::EmptyHospitalName`] when the new name is
    /// blank.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), RegistryDomainError> {
        self.name = validated_name(name.into())?;
        Ok(())
    }
}

fn validated_name(raw: String) -> Result<String, RegistryDomainError> {
    if raw.trim().is_empty() {
        return Err(RegistryDomainError::EmptyHospitalName);
    }
    Ok(raw)
}
