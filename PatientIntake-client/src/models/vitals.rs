use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

/// Payload for recording a patient's vitals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveVitalsRequest {
    /// Identifier of the patient the vitals belong to
    pub patient_id: String,

    /// Height in centimeters
    pub height: f64,

    /// Weight in kilograms
    pub weight: f64,

    /// Date of the visit
    pub visit_date: NaiveDate,
}

/// Assessment form the backend routes the patient to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum NextForm {
    /// General assessment (BMI at or below the routing threshold)
    General,

    /// Overweight assessment (BMI above the routing threshold)
    Overweight,
}

impl From<String> for NextForm {
    fn from(value: String) -> Self {
        // Anything other than the literal "general" selects the overweight form
        if value == "general" {
            NextForm::General
        } else {
            NextForm::Overweight
        }
    }
}

/// Backend response to a successful vitals submission
#[derive(Debug, Clone, Deserialize)]
pub struct SaveVitalsResponse {
    /// Confirmation message
    pub message: Option<String>,

    /// BMI computed by the backend from height and weight
    pub bmi: f64,

    /// Assessment form selected by the backend
    pub next_form: NextForm,

    /// Identifier of the stored vitals record
    pub vitals_id: Option<i64>,
}
