use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

/// Payload for the overweight assessment form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverweightAssessmentRequest {
    /// Identifier of the patient being assessed
    pub patient_id: String,

    /// Date of the visit
    pub visit_date: NaiveDate,

    /// General health description
    pub health: String,

    /// Diet description
    pub diet: String,

    /// Additional comments
    pub comments: String,
}

/// Payload for the general assessment form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralAssessmentRequest {
    /// Identifier of the patient being assessed
    pub patient_id: String,

    /// General health description
    pub health: String,

    /// Current medications
    pub drugs: String,

    /// Additional comments
    pub comments: String,

    /// Date of the visit
    pub visit_date: NaiveDate,
}

/// Backend response to a successful assessment submission
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentResponse {
    /// Confirmation message
    pub message: Option<String>,

    /// Identifier of the stored assessment
    pub assessment_id: Option<i64>,
}
