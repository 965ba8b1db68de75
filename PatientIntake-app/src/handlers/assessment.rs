use chrono::Utc;
use tracing::{debug, error, info};

use patient_intake_client::api::{IntakeApi, IntakeApiTrait};
use patient_intake_client::session::SessionStore;
use patient_intake_domain::bmi::AssessmentRoute;
use patient_intake_domain::entities::{
    convert_to_general_request, convert_to_overweight_request, GeneralAssessmentForm,
    OverweightAssessmentForm,
};
use patient_intake_domain::services::admission::BMI_NOT_FOUND_NOTICE;
use patient_intake_domain::services::{check_admission, AdmissionDecision};

use crate::handlers::{failure_notice, FormOutcome, SubmissionState};
use crate::pages::Page;

/// Fallback notice when the backend confirms an overweight assessment
/// without a message
const OVERWEIGHT_SAVED_FALLBACK: &str = "Overweight assessment saved";

/// Fallback notice when the backend confirms a general assessment
/// without a message
const GENERAL_SAVED_FALLBACK: &str = "General assessment saved";

/// Run the admission gate for a page load.
///
/// Returns `None` when the page may proceed. For an assessment page
/// whose gate refuses, the outcome shows the refusal notice and sends
/// the visitor back to vitals entry. Pages without a gate always
/// proceed.
pub fn check_page_admission(page: &Page, session: &dyn SessionStore) -> Option<FormOutcome> {
    let (page_route, visit_date) = match page {
        Page::OverweightAssessment { visit_date, .. } => {
            (AssessmentRoute::OverweightForm, *visit_date)
        }
        Page::GeneralAssessment { visit_date, .. } => (AssessmentRoute::GeneralForm, *visit_date),
        _ => return None,
    };

    match check_admission(page_route, visit_date, session) {
        Ok(AdmissionDecision::Granted { bmi }) => {
            debug!("Admission granted for {} with BMI {}", page, bmi);
            None
        }
        Ok(AdmissionDecision::Denied { notice, .. }) => Some(FormOutcome::alert_then_navigate(
            notice,
            Page::Vitals { patient_id: None },
        )),
        Err(e) => {
            // An unreadable session counts as no recorded BMI
            error!("Session read failed during admission check: {}", e);
            Some(FormOutcome::alert_then_navigate(
                BMI_NOT_FOUND_NOTICE,
                Page::Vitals { patient_id: None },
            ))
        }
    }
}

/// Handler for the overweight assessment form
pub struct OverweightAssessmentHandler {
    api: IntakeApi,
    state: SubmissionState,
}

impl OverweightAssessmentHandler {
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

    /// Submit the overweight assessment form
    pub async fn submit(&mut self, form: &OverweightAssessmentForm) -> FormOutcome {
        if self.state == SubmissionState::Submitting {
            debug!("Overweight assessment submit ignored: a submission is already in flight");
            return FormOutcome::ignored();
        }

        let request = match convert_to_overweight_request(form) {
            Ok(request) => request,
            Err(e) => return FormOutcome::stay(e.to_string()),
        };

        self.state = SubmissionState::Submitting;
        let patient_id = request.patient_id.clone();
        info!("Submitting overweight assessment for {}", patient_id);

        match self.api.submit_overweight_assessment(request).await {
            Ok(response) => {
                self.state = SubmissionState::Success;
                info!("Overweight assessment saved for {}", patient_id);
                let notice = response
                    .message
                    .unwrap_or_else(|| OVERWEIGHT_SAVED_FALLBACK.to_string());
                FormOutcome::alert_then_navigate(notice, Page::PatientList)
            }
            Err(e) => {
                self.state = SubmissionState::Failure;
                error!("Overweight assessment failed: {}", e);
                FormOutcome::stay(failure_notice(&e))
            }
        }
    }
}

/// Handler for the general assessment form.
///
/// The general form carries no visit date of its own; the submission
/// stamps the current date instead.
pub struct GeneralAssessmentHandler {
    api: IntakeApi,
    state: SubmissionState,
}

impl GeneralAssessmentHandler {
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

    /// Submit the general assessment form, stamped with today's date
    pub async fn submit(&mut self, form: &GeneralAssessmentForm) -> FormOutcome {
        if self.state == SubmissionState::Submitting {
            debug!("General assessment submit ignored: a submission is already in flight");
            return FormOutcome::ignored();
        }

        let today = Utc::now().date_naive();
        let request = match convert_to_general_request(form, today) {
            Ok(request) => request,
            Err(e) => return FormOutcome::stay(e.to_string()),
        };

        self.state = SubmissionState::Submitting;
        let patient_id = request.patient_id.clone();
        info!("Submitting general assessment for {}", patient_id);

        match self.api.submit_general_assessment(request).await {
            Ok(response) => {
                self.state = SubmissionState::Success;
                info!("General assessment saved for {}", patient_id);
                let notice = response
                    .message
                    .unwrap_or_else(|| GENERAL_SAVED_FALLBACK.to_string());
                FormOutcome::alert_then_navigate(notice, Page::PatientList)
            }
            Err(e) => {
                self.state = SubmissionState::Failure;
                error!("General assessment failed: {}", e);
                FormOutcome::stay(failure_notice(&e))
            }
        }
    }
}
