//! Interactive console driving the intake workflow.
//!
//! Each page maps to one prompt sequence. A submitted form dispatches
//! to its handler and the returned outcome decides the notice shown
//! and the page navigated to, with carried values typed into the
//! `Page` variants instead of query strings.

use std::io::{self, Write};

use chrono::NaiveDate;
use tracing::{info, warn};

use patient_intake_client::api::{IntakeApi, IntakeApiTrait};
use patient_intake_client::session::Session;
use patient_intake_domain::entities::conversions::parse_date;
use patient_intake_domain::entities::{
    GeneralAssessmentForm, OverweightAssessmentForm, RegistrationForm, VitalsForm,
};
use patient_intake_domain::services::PatientRow;

use crate::handlers::{
    check_page_admission, FormOutcome, GeneralAssessmentHandler, OverweightAssessmentHandler,
    RegistrationHandler, VitalsHandler, CONNECTION_NOTICE,
};
use crate::pages::Page;
use crate::views::ListingView;

/// Console front end for the intake workflow
pub struct Console {
    api: IntakeApi,
    session: Session,
}

impl Console {
    /// Create a console over the shared API client and session
    pub fn new(api: IntakeApi, session: Session) -> Self {
        Self { api, session }
    }

    /// Run the workflow until the user quits from the listing page
    pub async fn run(&self) -> io::Result<()> {
        // Reachability check before the first page
        match self.api.ping().await {
            Ok(response) => info!("Backend reachable: {}", response.message),
            Err(e) => {
                warn!("Backend not reachable: {}", e);
                show_alert(CONNECTION_NOTICE);
            }
        }

        let mut page = Page::Register;
        loop {
            // Gated pages run their admission check on load
            if let Some(outcome) = check_page_admission(&page, self.session.as_ref()) {
                if let Some(alert) = outcome.alert {
                    show_alert(&alert);
                }
                if let Some(next) = outcome.next {
                    page = next;
                    continue;
                }
            }

            page = match page {
                Page::Register => self.register_page().await?,
                Page::Vitals { patient_id } => self.vitals_page(patient_id).await?,
                Page::OverweightAssessment {
                    patient_id,
                    visit_date,
                } => self.overweight_page(patient_id, visit_date).await?,
                Page::GeneralAssessment {
                    patient_id,
                    visit_date,
                } => self.general_page(patient_id, visit_date).await?,
                Page::PatientList => match self.listing_page().await? {
                    Some(next) => next,
                    None => break,
                },
            };
        }

        Ok(())
    }

    async fn register_page(&self) -> io::Result<Page> {
        println!();
        println!("== Patient registration ==");

        let form = RegistrationForm {
            patient_id: prompt("Patient ID")?,
            first_name: prompt("First name")?,
            last_name: prompt("Last name")?,
            dob: prompt("Date of birth (YYYY-MM-DD)")?,
            gender: prompt("Gender")?,
            registration_date: prompt("Registration date (YYYY-MM-DD)")?,
        };

        let mut handler = RegistrationHandler::new(self.api.clone());
        let outcome = handler.submit(&form).await;
        Ok(follow(outcome, Page::Register))
    }

    async fn vitals_page(&self, carried_id: Option<String>) -> io::Result<Page> {
        println!();
        println!("== Vitals entry ==");

        let patient_id = match carried_id {
            Some(id) => {
                // Pre-filled from the incoming navigation
                println!("Patient ID: {}", id);
                id
            }
            None => prompt("Patient ID")?,
        };

        let form = VitalsForm {
            patient_id,
            height: prompt("Height (cm)")?,
            weight: prompt("Weight (kg)")?,
            visit_date: prompt("Visit date (YYYY-MM-DD)")?,
        };

        let mut handler = VitalsHandler::new(self.api.clone(), self.session.clone());
        let outcome = handler.submit(&form).await;
        let current = Page::Vitals {
            patient_id: Some(form.patient_id),
        };
        Ok(follow(outcome, current))
    }

    async fn overweight_page(&self, patient_id: String, visit_date: NaiveDate) -> io::Result<Page> {
        println!();
        println!("== Overweight assessment ==");
        println!("Patient ID: {}", patient_id);
        println!("Visit date: {}", visit_date);

        let form = OverweightAssessmentForm {
            patient_id,
            visit_date: visit_date.to_string(),
            health: prompt("General health")?,
            diet: prompt("Diet description")?,
            comments: prompt("Comments")?,
        };

        let mut handler = OverweightAssessmentHandler::new(self.api.clone());
        let outcome = handler.submit(&form).await;
        let current = Page::OverweightAssessment {
            patient_id: form.patient_id,
            visit_date,
        };
        Ok(follow(outcome, current))
    }

    async fn general_page(&self, patient_id: String, visit_date: NaiveDate) -> io::Result<Page> {
        println!();
        println!("== General assessment ==");
        println!("Patient ID: {}", patient_id);

        let form = GeneralAssessmentForm {
            patient_id,
            health: prompt("General health")?,
            drugs: prompt("Current medications")?,
            comments: prompt("Comments")?,
        };

        let mut handler = GeneralAssessmentHandler::new(self.api.clone());
        let outcome = handler.submit(&form).await;
        let current = Page::GeneralAssessment {
            patient_id: form.patient_id,
            visit_date,
        };
        Ok(follow(outcome, current))
    }

    async fn listing_page(&self) -> io::Result<Option<Page>> {
        println!();
        println!("== Patients ==");

        let mut view = ListingView::new(self.api.clone());
        if view.refresh(None).await.is_err() {
            show_alert(CONNECTION_NOTICE);
        }
        print_rows(view.rows());

        loop {
            let choice = prompt("[f]ilter by visit date, [r]egister another patient, [q]uit")?;
            match choice.trim() {
                "f" => {
                    let raw = prompt("Visit date (YYYY-MM-DD, empty for all)")?;
                    let filter = match parse_filter(&raw) {
                        Ok(filter) => filter,
                        Err(notice) => {
                            show_alert(&notice);
                            continue;
                        }
                    };
                    if view.refresh(filter).await.is_err() {
                        show_alert(CONNECTION_NOTICE);
                    }
                    print_rows(view.rows());
                }
                "r" => return Ok(Some(Page::Register)),
                "q" => return Ok(None),
                other => println!("Unknown choice: {:?}", other),
            }
        }
    }
}

/// Apply a form outcome: show its notice, then either navigate or
/// stay on the current page
fn follow(outcome: FormOutcome, current: Page) -> Page {
    if let Some(alert) = outcome.alert {
        show_alert(&alert);
    }
    outcome.next.unwrap_or(current)
}

/// Parse a listing filter; an empty input means no filter
fn parse_filter(raw: &str) -> Result<Option<NaiveDate>, String> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_date("Visit date", raw)
        .map(Some)
        .map_err(|e| e.to_string())
}

/// Show a notice the way the browser pages surfaced alerts
fn show_alert(message: &str) {
    println!("[!] {}", message);
}

/// Read one line of input against a field label
fn prompt(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches('\n').trim_end_matches('\r').to_string())
}

/// Render the listing table
fn print_rows(rows: &[PatientRow]) {
    if rows.is_empty() {
        println!("No patients recorded yet.");
        return;
    }

    println!("{:<24} {:>4}  {:>6}  {}", "Name", "Age", "BMI", "Classification");
    for row in rows {
        println!(
            "{:<24} {:>4}  {:>6}  {}",
            row.name, row.age, row.bmi, row.classification
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter_empty_means_no_filter() {
        assert_eq!(parse_filter(""), Ok(None));
        assert_eq!(parse_filter("   "), Ok(None));
    }

    #[test]
    fn test_parse_filter_accepts_a_date() {
        assert_eq!(
            parse_filter("2026-08-22"),
            Ok(Some(NaiveDate::from_ymd_opt(2026, 8, 22).unwrap()))
        );
    }

    #[test]
    fn test_parse_filter_rejects_malformed_input() {
        let result = parse_filter("22/08/2026");
        assert_eq!(
            result,
            Err("Visit date must be a date in YYYY-MM-DD format".to_string())
        );
    }

    #[test]
    fn test_follow_prefers_the_outcome_page() {
        let next = follow(FormOutcome::navigate(Page::PatientList), Page::Register);
        assert_eq!(next, Page::PatientList);

        let stayed = follow(FormOutcome::stay("notice"), Page::Register);
        assert_eq!(stayed, Page::Register);
    }
}
