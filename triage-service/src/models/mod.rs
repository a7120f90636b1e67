//! Domain models for the triage service.

pub mod booking;
pub mod diagnosis;
pub mod hospital;
pub mod patient;

pub use booking::{REQUIRED_BOOKING_FIELDS, SESSION_SLOTS};
pub use diagnosis::{DiagnosisCondition, DiagnosisRequest, DiagnosisResult, Severity, Urgency};
pub use hospital::Hospital;
pub use patient::{Gender, PatientProfile, SymptomReport};
