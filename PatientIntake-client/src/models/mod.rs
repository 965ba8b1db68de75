// Wire models for the patient intake backend
pub mod patient;
pub mod vitals;
pub mod assessment;
pub mod common;

// Re-export commonly used types
pub use assessment::{AssessmentResponse, GeneralAssessmentRequest, OverweightAssessmentRequest};
pub use common::PingResponse;
pub use patient::{PatientSummary, RegisterPatientRequest, RegisterPatientResponse};
pub use vitals::{NextForm, SaveVitalsRequest, SaveVitalsResponse};
