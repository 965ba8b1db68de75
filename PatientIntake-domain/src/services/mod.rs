pub mod admission;
pub mod listing;

// Domain services
// This module contains business logic implementations.

// Re-export commonly used types
pub use admission::{check_admission, AdmissionDecision, DenialReason};
pub use listing::{build_rows, PatientRow};
