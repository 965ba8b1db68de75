use thiserror::Error;
use validator::Validate;

/// Errors raised while turning raw form input into a request
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// A required field is empty
    #[error("All fields are required!")]
    MissingFields,

    /// A numeric field does not parse
    #[error("{0} must be a number")]
    InvalidNumber(String),

    /// A date field does not parse
    #[error("{0} must be a date in YYYY-MM-DD format")]
    InvalidDate(String),
}

/// Check a form's presence constraints.
/// Any violation collapses into the workflow's single
/// "all fields required" failure.
pub fn check_presence<T: Validate>(form: &T) -> Result<(), FormError> {
    form.validate().map_err(|_| FormError::MissingFields)
}

/// Raw input of the registration form
#[derive(Debug, Clone, Default, Validate)]
pub struct RegistrationForm {
    /// Identifier chosen for the patient
    #[validate(length(min = 1, message = "Patient ID is required"))]
    pub patient_id: String,

    /// Patient's first name
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    /// Patient's last name
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    /// Date of birth, as typed (YYYY-MM-DD)
    #[validate(length(min = 1, message = "Date of birth is required"))]
    pub dob: String,

    /// Patient's gender
    #[validate(length(min = 1, message = "Gender is required"))]
    pub gender: String,

    /// Registration date, as typed (YYYY-MM-DD)
    #[validate(length(min = 1, message = "Registration date is required"))]
    pub registration_date: String,
}

/// Raw input of the vitals form
#[derive(Debug, Clone, Default, Validate)]
pub struct VitalsForm {
    /// Patient identifier, pre-filled from the incoming navigation
    #[validate(length(min = 1, message = "Patient ID is required"))]
    pub patient_id: String,

    /// Height in centimeters, as typed
    #[validate(length(min = 1, message = "Height is required"))]
    pub height: String,

    /// Weight in kilograms, as typed
    #[validate(length(min = 1, message = "Weight is required"))]
    pub weight: String,

    /// Visit date, as typed (YYYY-MM-DD)
    #[validate(length(min = 1, message = "Visit date is required"))]
    pub visit_date: String,
}

/// Raw input of the overweight assessment form
#[derive(Debug, Clone, Default, Validate)]
pub struct OverweightAssessmentForm {
    /// Patient identifier, carried in from the vitals step
    #[validate(length(min = 1, message = "Patient ID is required"))]
    pub patient_id: String,

    /// Visit date, carried in from the vitals step (YYYY-MM-DD)
    #[validate(length(min = 1, message = "Visit date is required"))]
    pub visit_date: String,

    /// General health description
    #[validate(length(min = 1, message = "Health description is required"))]
    pub health: String,

    /// Diet description
    #[validate(length(min = 1, message = "Diet description is required"))]
    pub diet: String,

    /// Additional comments
    #[validate(length(min = 1, message = "Comments are required"))]
    pub comments: String,
}

/// Raw input of the general assessment form.
/// This form carries no visit date; the submission stamps the current
/// date instead.
#[derive(Debug, Clone, Default, Validate)]
pub struct GeneralAssessmentForm {
    /// Patient identifier, carried in from the vitals step
    #[validate(length(min = 1, message = "Patient ID is required"))]
    pub patient_id: String,

    /// General health description
    #[validate(length(min = 1, message = "Health description is required"))]
    pub health: String,

    /// Current medications
    #[validate(length(min = 1, message = "Medications are required"))]
    pub drugs: String,

    /// Additional comments
    #[validate(length(min = 1, message = "Comments are required"))]
    pub comments: String,
}
