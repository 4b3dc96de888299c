//! Domain model for the clinical visit registry.
//!
//! The registry domain models hospitals, patients, and the visit join record
//! that associates one hospital with one patient on a calendar date. All
//! infrastructure concerns are kept outside the domain boundary.

mod error;
mod hospital;
mod ids;
mod patient;
mod sex;
mod visit;

pub use error::{ParseSexError, RegistryDomainError};
pub use hospital::Hospital;
pub use ids::{HospitalId, PatientId, VisitId};
pub use patient::Patient;
pub use sex::Sex;
pub use visit::{NewVisit, Visit};
