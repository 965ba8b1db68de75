// Submission handlers for the intake workflow
mod assessment;
mod registration;
mod vitals;

pub use assessment::{check_page_admission, GeneralAssessmentHandler, OverweightAssessmentHandler};
pub use registration::RegistrationHandler;
pub use vitals::VitalsHandler;

use patient_intake_client::error::ClientError;

use crate::pages::Page;

/// Notice shown whenever the backend cannot be reached
pub const CONNECTION_NOTICE: &str = "Error connecting to backend";

/// Lifecycle of one form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Waiting for input
    #[default]
    Idle,

    /// A submission is in flight; further submits are ignored
    Submitting,

    /// The last submission succeeded
    Success,

    /// The last submission failed; the form accepts another attempt
    Failure,
}

/// What a handler asks the surrounding page to do once a submission
/// settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOutcome {
    /// Notice to show the user, if any
    pub alert: Option<String>,

    /// Page to navigate to; `None` stays on the current page
    pub next: Option<Page>,
}

impl FormOutcome {
    /// Stay on the current page and show a notice
    pub fn stay(alert: impl Into<String>) -> Self {
        Self {
            alert: Some(alert.into()),
            next: None,
        }
    }

    /// Navigate without a notice
    pub fn navigate(next: Page) -> Self {
        Self {
            alert: None,
            next: Some(next),
        }
    }

    /// Show a notice, then navigate
    pub fn alert_then_navigate(alert: impl Into<String>, next: Page) -> Self {
        Self {
            alert: Some(alert.into()),
            next: Some(next),
        }
    }

    /// Drop the action entirely, e.g. a repeated submit
    pub fn ignored() -> Self {
        Self {
            alert: None,
            next: None,
        }
    }
}

/// Notice text for a failed API call. Connection failures collapse to
/// the generic connectivity notice; API failures surface their message
/// verbatim.
pub(crate) fn failure_notice(error: &ClientError) -> String {
    if error.is_connection() {
        CONNECTION_NOTICE.to_string()
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_notice_collapses_connection_errors() {
        let error = ClientError::Connection("dns lookup failed".to_string());
        assert_eq!(failure_notice(&error), CONNECTION_NOTICE);
    }

    #[test]
    fn test_failure_notice_keeps_api_message() {
        let error = ClientError::Api {
            status: 400,
            message: "Patient already registered".to_string(),
        };
        assert_eq!(failure_notice(&error), "Patient already registered");
    }

    #[test]
    fn test_submission_state_defaults_to_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
    }
}
