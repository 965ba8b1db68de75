use tracing::{debug, error, info, warn};

use patient_intake_client::api::{IntakeApi, IntakeApiTrait};
use patient_intake_client::models::NextForm;
use patient_intake_client::session::{RecordedBmi, Session, SessionStore};
use patient_intake_domain::bmi::{route, AssessmentRoute};
use patient_intake_domain::entities::{convert_to_vitals_request, VitalsForm};

use crate::handlers::{failure_notice, FormOutcome, SubmissionState};
use crate::pages::Page;

/// Handler for the vitals entry form.
///
/// A successful submission records the returned BMI in the session,
/// tagged with the visit date, then navigates to whichever assessment
/// form the BMI routes to.
pub struct VitalsHandler {
    api: IntakeApi,
    session: Session,
    state: SubmissionState,
}

impl VitalsHandler {
    /// Create a handler over the shared API client and session
    pub fn new(api: IntakeApi, session: Session) -> Self {
        Self {
            api,
            session,
            state: SubmissionState::Idle,
        }
    }

    /// Current submission state
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Submit the vitals form
    pub async fn submit(&mut self, form: &VitalsForm) -> FormOutcome {
        if self.state == SubmissionState::Submitting {
            debug!("Vitals submit ignored: a submission is already in flight");
            return FormOutcome::ignored();
        }

        let request = match convert_to_vitals_request(form) {
            Ok(request) => request,
            Err(e) => return FormOutcome::stay(e.to_string()),
        };

        self.state = SubmissionState::Submitting;
        let patient_id = request.patient_id.clone();
        let visit_date = request.visit_date;
        info!("Saving vitals for {} on visit {}", patient_id, visit_date);

        match self.api.submit_vitals(request).await {
            Ok(response) => {
                self.state = SubmissionState::Success;

                // Record the BMI for the assessment gate before navigating
                if let Err(e) = self
                    .session
                    .put_bmi(RecordedBmi::new(response.bmi, visit_date))
                {
                    error!("Could not record BMI in the session: {}", e);
                }
                info!("Vitals saved for {} with BMI {}", patient_id, response.bmi);

                let local_route = route(response.bmi);
                let server_route = match response.next_form {
                    NextForm::General => AssessmentRoute::GeneralForm,
                    NextForm::Overweight => AssessmentRoute::OverweightForm,
                };
                if server_route != local_route {
                    warn!(
                        "Backend routed BMI {} to {:?}; following the local route {:?}",
                        response.bmi, server_route, local_route
                    );
                }

                let next = match local_route {
                    AssessmentRoute::GeneralForm => Page::GeneralAssessment {
                        patient_id,
                        visit_date,
                    },
                    AssessmentRoute::OverweightForm => Page::OverweightAssessment {
                        patient_id,
                        visit_date,
                    },
                };
                FormOutcome::alert_then_navigate(
                    format!("Vitals saved successfully.\nBMI: {}", response.bmi),
                    next,
                )
            }
            Err(e) => {
                self.state = SubmissionState::Failure;
                error!("Vitals submission failed: {}", e);
                FormOutcome::stay(failure_notice(&e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use patient_intake_client::api::tests::MockIntakeApi;
    use patient_intake_client::session::InMemorySession;

    use super::*;
    use crate::handlers::check_page_admission;

    fn filled_form() -> VitalsForm {
        VitalsForm {
            patient_id: "PT-001".to_string(),
            height: "170".to_string(),
            weight: "88".to_string(),
            visit_date: "2026-08-22".to_string(),
        }
    }

    fn visit_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 22).unwrap()
    }

    #[tokio::test]
    async fn test_high_bmi_routes_to_overweight_form() {
        let mock = Arc::new(MockIntakeApi::new().with_bmi(30.0));
        let session: Session = Arc::new(InMemorySession::new());
        let mut handler = VitalsHandler::new(mock.clone(), session.clone());

        let outcome = handler.submit(&filled_form()).await;

        assert_eq!(
            outcome.alert.as_deref(),
            Some("Vitals saved successfully.\nBMI: 30")
        );
        assert_eq!(
            outcome.next,
            Some(Page::OverweightAssessment {
                patient_id: "PT-001".to_string(),
                visit_date: visit_date(),
            }),
            "The assessment page receives the same patient id and visit date"
        );
        assert_eq!(handler.state(), SubmissionState::Success);

        let recorded = session.bmi().unwrap().unwrap();
        assert_eq!(recorded.bmi, 30.0);
        assert!(recorded.is_for_visit(visit_date()));
    }

    #[tokio::test]
    async fn test_low_bmi_routes_to_general_form() {
        let mock = Arc::new(MockIntakeApi::new().with_bmi(22.49));
        let session: Session = Arc::new(InMemorySession::new());
        let mut handler = VitalsHandler::new(mock, session);

        let outcome = handler.submit(&filled_form()).await;

        assert_eq!(
            outcome.alert.as_deref(),
            Some("Vitals saved successfully.\nBMI: 22.49")
        );
        assert_eq!(
            outcome.next,
            Some(Page::GeneralAssessment {
                patient_id: "PT-001".to_string(),
                visit_date: visit_date(),
            })
        );
    }

    #[tokio::test]
    async fn test_saved_bmi_admits_the_next_page() {
        let mock = Arc::new(MockIntakeApi::new().with_bmi(30.0));
        let session: Session = Arc::new(InMemorySession::new());
        let mut handler = VitalsHandler::new(mock, session.clone());

        let outcome = handler.submit(&filled_form()).await;
        let next = outcome.next.unwrap();

        assert_eq!(
            check_page_admission(&next, session.as_ref()),
            None,
            "Loading the routed page right after vitals must not redirect"
        );
    }

    #[tokio::test]
    async fn test_malformed_height_is_a_local_failure() {
        let mock = Arc::new(MockIntakeApi::new());
        let session: Session = Arc::new(InMemorySession::new());
        let mut handler = VitalsHandler::new(mock.clone(), session.clone());

        let mut form = filled_form();
        form.height = "abc".to_string();

        let outcome = handler.submit(&form).await;

        assert_eq!(outcome.alert.as_deref(), Some("Height must be a number"));
        assert_eq!(outcome.next, None);
        assert_eq!(mock.submission_count(), 0);
        assert_eq!(
            session.bmi().unwrap(),
            None,
            "A rejected form must not record a BMI"
        );
    }

    #[tokio::test]
    async fn test_backend_rejection_keeps_the_form() {
        let mock = Arc::new(
            MockIntakeApi::new().with_api_error(400, "Height and weight must be greater than zero"),
        );
        let session: Session = Arc::new(InMemorySession::new());
        let mut handler = VitalsHandler::new(mock, session.clone());

        let outcome = handler.submit(&filled_form()).await;

        assert_eq!(
            outcome.alert.as_deref(),
            Some("Height and weight must be greater than zero")
        );
        assert_eq!(outcome.next, None);
        assert_eq!(handler.state(), SubmissionState::Failure);
        assert_eq!(session.bmi().unwrap(), None);
    }

    #[tokio::test]
    async fn test_backend_routing_disagreement_follows_local_route() {
        // A BMI above the threshold paired with a "general" next_form
        let mock = Arc::new(
            MockIntakeApi::new()
                .with_bmi(30.0)
                .with_next_form(NextForm::General),
        );
        let session: Session = Arc::new(InMemorySession::new());
        let mut handler = VitalsHandler::new(mock, session);

        let outcome = handler.submit(&filled_form()).await;

        assert_eq!(
            outcome.next,
            Some(Page::OverweightAssessment {
                patient_id: "PT-001".to_string(),
                visit_date: visit_date(),
            }),
            "Navigation follows the locally computed route"
        );
    }

    #[tokio::test]
    async fn test_request_carries_parsed_measurements() {
        let mock = Arc::new(MockIntakeApi::new());
        let session: Session = Arc::new(InMemorySession::new());
        let mut handler = VitalsHandler::new(mock.clone(), session);

        handler.submit(&filled_form()).await;

        let request = mock.last_vitals_request().unwrap();
        assert_eq!(request.height, 170.0);
        assert_eq!(request.weight, 88.0);
        assert_eq!(request.visit_date, visit_date());
    }
}
