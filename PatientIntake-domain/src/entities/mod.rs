// Domain entities and value objects
pub mod forms;
pub mod conversions;

// Re-export common types for easier imports
pub use conversions::{
    convert_to_general_request, convert_to_overweight_request, convert_to_register_request,
    convert_to_vitals_request,
};
pub use forms::{
    FormError, GeneralAssessmentForm, OverweightAssessmentForm, RegistrationForm, VitalsForm,
};
