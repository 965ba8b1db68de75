// PatientIntake Domain
// This crate contains the business logic for the patient intake workflow

// BMI classification and assessment routing
pub mod bmi;

// Form entities and conversions
pub mod entities;

// Services that implement business logic
pub mod services;
