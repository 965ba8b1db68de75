use tracing::{debug, error, info};

use patient_intake_client::api::{IntakeApi, IntakeApiTrait};
use patient_intake_domain::entities::{convert_to_register_request, RegistrationForm};

use crate::handlers::{failure_notice, FormOutcome, SubmissionState};
use crate::pages::Page;

/// Handler for the patient registration form
pub struct RegistrationHandler {
    api: IntakeApi,
    state: SubmissionState,
}

impl RegistrationHandler {
    /// Create a handler over the shared API client
    pub fn new(api: IntakeApi) -> Self {
        Self {
            api,
            state: SubmissionState::Idle,
        }
    }

    /// Current submission state
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Submit the registration form.
    ///
    /// Validation runs locally before any network attempt; a form with
    /// an empty field never reaches the backend. On success the
    /// outcome navigates to vitals entry carrying the registered
    /// patient id.
    pub async fn submit(&mut self, form: &RegistrationForm) -> FormOutcome {
        if self.state == SubmissionState::Submitting {
            debug!("Registration submit ignored: a submission is already in flight");
            return FormOutcome::ignored();
        }

        let request = match convert_to_register_request(form) {
            Ok(request) => request,
            Err(e) => return FormOutcome::stay(e.to_string()),
        };

        self.state = SubmissionState::Submitting;
        info!("Registering patient {}", request.patient_id);

        match self.api.register_patient(request).await {
            Ok(response) => {
                self.state = SubmissionState::Success;
                info!("Patient {} registered", response.patient_id);
                FormOutcome::navigate(Page::Vitals {
                    patient_id: Some(response.patient_id),
                })
            }
            Err(e) => {
                self.state = SubmissionState::Failure;
                error!("Registration failed: {}", e);
                FormOutcome::stay(failure_notice(&e))
            }
        }
    }
}
