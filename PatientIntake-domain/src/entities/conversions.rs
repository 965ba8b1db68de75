use chrono::NaiveDate;

use patient_intake_client::models::assessment::{
    GeneralAssessmentRequest, OverweightAssessmentRequest,
};
use patient_intake_client::models::patient::RegisterPatientRequest;
use patient_intake_client::models::vitals::SaveVitalsRequest;

use super::forms::{
    check_presence, FormError, GeneralAssessmentForm, OverweightAssessmentForm, RegistrationForm,
    VitalsForm,
};

/// Conversion functions from raw form input to client request models
/// These functions follow the pattern convert_to_[request_name] and run
/// the presence check before any field is parsed, so an empty field
/// always reports as missing rather than malformed

/// Parse a numeric field, tolerating surrounding whitespace
pub fn parse_number(field: &str, raw: &str) -> Result<f64, FormError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| FormError::InvalidNumber(field.to_string()))
}

/// Parse a date field in YYYY-MM-DD form, tolerating surrounding whitespace
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| FormError::InvalidDate(field.to_string()))
}

/// Convert registration form input into the wire request
pub fn convert_to_register_request(
    form: &RegistrationForm,
) -> Result<RegisterPatientRequest, FormError> {
    check_presence(form)?;

    Ok(RegisterPatientRequest {
        patient_id: form.patient_id.clone(),
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        dob: parse_date("Date of birth", &form.dob)?,
        gender: form.gender.clone(),
        registration_date: parse_date("Registration date", &form.registration_date)?,
    })
}

/// Convert vitals form input into the wire request
pub fn convert_to_vitals_request(form: &VitalsForm) -> Result<SaveVitalsRequest, FormError> {
    check_presence(form)?;

    Ok(SaveVitalsRequest {
        patient_id: form.patient_id.clone(),
        height: parse_number("Height", &form.height)?,
        weight: parse_number("Weight", &form.weight)?,
        visit_date: parse_date("Visit date", &form.visit_date)?,
    })
}

/// Convert overweight assessment form input into the wire request
pub fn convert_to_overweight_request(
    form: &OverweightAssessmentForm,
) -> Result<OverweightAssessmentRequest, FormError> {
    check_presence(form)?;

    Ok(OverweightAssessmentRequest {
        patient_id: form.patient_id.clone(),
        visit_date: parse_date("Visit date", &form.visit_date)?,
        health: form.health.clone(),
        diet: form.diet.clone(),
        comments: form.comments.clone(),
    })
}

/// Convert general assessment form input into the wire request.
/// The visit date is stamped with the given date, not read from the form.
pub fn convert_to_general_request(
    form: &GeneralAssessmentForm,
    today: NaiveDate,
) -> Result<GeneralAssessmentRequest, FormError> {
    check_presence(form)?;

    Ok(GeneralAssessmentRequest {
        patient_id: form.patient_id.clone(),
        health: form.health.clone(),
        drugs: form.drugs.clone(),
        comments: form.comments.clone(),
        visit_date: today,
    })
}
