use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

/// Payload for registering a new patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPatientRequest {
    /// Identifier chosen for the patient
    pub patient_id: String,

    /// Patient's first name
    pub first_name: String,

    /// Patient's last name
    pub last_name: String,

    /// Date of birth
    pub dob: NaiveDate,

    /// Patient's gender
    pub gender: String,

    /// Date the patient registered
    pub registration_date: NaiveDate,
}

/// Backend response to a successful registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPatientResponse {
    /// Confirmation message
    pub message: Option<String>,

    /// Identifier of the registered patient, carried to the vitals step
    pub patient_id: String,

    /// Hint for the next workflow page
    pub next_page: Option<String>,
}

/// One patient in the listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientSummary {
    /// Patient's first name
    pub first_name: String,

    /// Patient's last name
    pub last_name: String,

    /// Date of birth
    pub date_of_birth: NaiveDate,

    /// BMI from the patient's most recent vitals
    pub last_bmi: f64,
}
