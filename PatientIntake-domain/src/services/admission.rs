use chrono::NaiveDate;
use tracing::debug;

use patient_intake_client::error::SessionError;
use patient_intake_client::session::SessionStore;

use crate::bmi::{route, AssessmentRoute};

/// Notice shown when no BMI is recorded for the visit
pub const BMI_NOT_FOUND_NOTICE: &str = "BMI not found. Please enter vitals first.";

/// Notice shown on the overweight form when the recorded BMI routes elsewhere
pub const OVERWEIGHT_ONLY_NOTICE: &str =
    "Access denied: This form is only for patients with BMI > 25.";

/// Notice shown on the general form when the recorded BMI routes elsewhere
pub const GENERAL_ONLY_NOTICE: &str =
    "Access denied: This form is only for patients with BMI ≤ 25.";

/// Why an assessment page turned a visitor away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// No BMI recorded in this session
    NotRecorded,

    /// The recorded BMI belongs to a different visit
    StaleVisit,

    /// The recorded BMI routes to the other assessment form
    WrongForm,
}

/// Outcome of an assessment page's admission check
#[derive(Debug, Clone, PartialEq)]
pub enum AdmissionDecision {
    /// The page may proceed with the recorded BMI
    Granted {
        /// BMI recorded for this visit
        bmi: f64,
    },

    /// The visitor is sent back to vitals entry
    Denied {
        /// Why admission was refused
        reason: DenialReason,

        /// Notice to show before redirecting
        notice: String,
    },
}

/// Check whether an assessment page may proceed.
///
/// `page_route` names the form the check runs for and `visit_date` is
/// the visit carried in by navigation. A BMI recorded for a different
/// visit counts as not recorded at all, so a value left over from an
/// earlier visit can never pass a later visit's gate.
pub fn check_admission(
    page_route: AssessmentRoute,
    visit_date: NaiveDate,
    session: &dyn SessionStore,
) -> Result<AdmissionDecision, SessionError> {
    let record = match session.bmi()? {
        Some(record) => record,
        None => {
            debug!("Admission denied for {:?}: no BMI recorded", page_route);
            return Ok(AdmissionDecision::Denied {
                reason: DenialReason::NotRecorded,
                notice: BMI_NOT_FOUND_NOTICE.to_string(),
            });
        }
    };

    if !record.is_for_visit(visit_date) {
        debug!(
            "Admission denied for {:?}: BMI recorded for {} but page is for {}",
            page_route, record.visit_date, visit_date
        );
        return Ok(AdmissionDecision::Denied {
            reason: DenialReason::StaleVisit,
            notice: BMI_NOT_FOUND_NOTICE.to_string(),
        });
    }

    if route(record.bmi) != page_route {
        debug!(
            "Admission denied for {:?}: BMI {} routes to the other form",
            page_route, record.bmi
        );
        let notice = match page_route {
            AssessmentRoute::OverweightForm => OVERWEIGHT_ONLY_NOTICE,
            AssessmentRoute::GeneralForm => GENERAL_ONLY_NOTICE,
        };
        return Ok(AdmissionDecision::Denied {
            reason: DenialReason::WrongForm,
            notice: notice.to_string(),
        });
    }

    Ok(AdmissionDecision::Granted { bmi: record.bmi })
}
