//! Patient sex enumeration.

use super::ParseSexError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sex of a patient.
///
/// `Unspecified` is the zero value: clients never choose it explicitly, but
/// out-of-range wire codes clamp to it rather than propagating an undefined
/// state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// No sex was supplied, or the wire value was out of range.
    #[default]
    Unspecified,
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other.
    Other,
}

impl Sex {
    /// Decodes a wire enumeration code, clamping unknown codes to
    /// [`Sex::Unspecified`].
    #[must_use]
    pub const fn from_wire(code: i32) -> Self {
        match code {
            1 => Self::Male,
            2 => Self::Female,
            3 => Self::Other,
            _ => Self::Unspecified,
        }
    }

    /// Returns the wire enumeration code.
    #[must_use]
    pub const fn to_wire(self) -> i32 {
        match self {
            Self::Unspecified => 0,
            Self::Male => 1,
            Self::Female => 2,
            Self::Other => 3,
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Sex {
    type Error = ParseSexError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "unspecified" => Ok(Self::Unspecified),
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(ParseSexError(value.to_owned())),
        }
    }
}
