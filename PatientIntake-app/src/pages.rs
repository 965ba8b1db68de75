use std::fmt;

use chrono::NaiveDate;

/// One page of the intake workflow.
///
/// Values carried between pages in query parameters are typed fields
/// here, so a navigation target always has everything the next page
/// needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Patient registration form
    Register,

    /// Vitals entry form, optionally pre-filled with a patient id
    Vitals { patient_id: Option<String> },

    /// Assessment form for patients with BMI above the routing threshold
    OverweightAssessment {
        patient_id: String,
        visit_date: NaiveDate,
    },

    /// Assessment form for patients at or below the routing threshold
    GeneralAssessment {
        patient_id: String,
        visit_date: NaiveDate,
    },

    /// Patient listing
    PatientList,
}

impl Page {
    /// Location of the page including its query parameters
    pub fn location(&self) -> String {
        match self {
            Page::Register => "register".to_string(),
            Page::Vitals { patient_id: None } => "vitals".to_string(),
            Page::Vitals {
                patient_id: Some(id),
            } => format!("vitals?patient_id={}", id),
            Page::OverweightAssessment {
                patient_id,
                visit_date,
            } => format!(
                "overweight?patient_id={}&visit_date={}",
                patient_id, visit_date
            ),
            Page::GeneralAssessment {
                patient_id,
                visit_date,
            } => format!(
                "general?patient_id={}&visit_date={}",
                patient_id, visit_date
            ),
            Page::PatientList => "patients".to_string(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.location())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_carries_query_parameters() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 22).unwrap();

        let page = Page::OverweightAssessment {
            patient_id: "PT-001".to_string(),
            visit_date: date,
        };
        assert_eq!(
            page.location(),
            "overweight?patient_id=PT-001&visit_date=2026-08-22",
            "Assessment pages carry the patient id and visit date"
        );

        let page = Page::Vitals {
            patient_id: Some("PT-001".to_string()),
        };
        assert_eq!(page.location(), "vitals?patient_id=PT-001");
    }

    #[test]
    fn test_location_without_parameters() {
        assert_eq!(Page::Register.location(), "register");
        assert_eq!(Page::Vitals { patient_id: None }.location(), "vitals");
        assert_eq!(Page::PatientList.location(), "patients");
    }

    #[test]
    fn test_display_matches_location() {
        let page = Page::GeneralAssessment {
            patient_id: "PT-002".to_string(),
            visit_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        };
        assert_eq!(page.to_string(), page.location());
    }
}
