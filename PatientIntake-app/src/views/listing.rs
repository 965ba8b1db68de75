use chrono::{NaiveDate, Utc};
use tracing::{error, info};

use patient_intake_client::api::{IntakeApi, IntakeApiTrait};
use patient_intake_client::error::ClientError;
use patient_intake_client::models::PatientSummary;
use patient_intake_domain::services::{build_rows, PatientRow};

/// Patient listing view.
///
/// Each refresh fetches the whole collection and replaces every row.
/// When two refreshes overlap, the table ends up showing whichever
/// response was applied last, regardless of which request went out
/// first. That is accepted behavior for this view, not an ordering
/// guarantee.
pub struct ListingView {
    api: IntakeApi,
    rows: Vec<PatientRow>,
    applied: usize,
}

impl ListingView {
    /// Create an empty view over the shared API client
    pub fn new(api: IntakeApi) -> Self {
        Self {
            api,
            rows: Vec::new(),
            applied: 0,
        }
    }

    /// Rows currently rendered
    pub fn rows(&self) -> &[PatientRow] {
        &self.rows
    }

    /// Number of responses applied so far
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Fetch the collection and re-render, optionally filtered by
    /// visit date. A failed fetch leaves the current rows in place.
    pub async fn refresh(&mut self, filter: Option<NaiveDate>) -> Result<(), ClientError> {
        match filter {
            Some(date) => info!("Fetching patients for visit {}", date),
            None => info!("Fetching all patients"),
        }

        let patients = self.api.list_patients(filter).await.map_err(|e| {
            error!("Patient fetch failed: {}", e);
            e
        })?;

        self.apply(&patients, Utc::now().date_naive());
        Ok(())
    }

    /// Replace the table with rows derived from a fetched collection
    pub fn apply(&mut self, patients: &[PatientSummary], today: NaiveDate) {
        self.rows = build_rows(patients, today);
        self.applied += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use patient_intake_client::api::tests::MockIntakeApi;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 22).unwrap()
    }

    fn summary(first: &str, last: &str, dob: (i32, u32, u32), bmi: f64) -> PatientSummary {
        PatientSummary {
            first_name: first.to_string(),
            last_name: last.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(dob.0, dob.1, dob.2).unwrap(),
            last_bmi: bmi,
        }
    }

    #[tokio::test]
    async fn test_refresh_builds_rows_from_the_fetch() {
        let patients = vec![
            summary("Jane", "Doe", (1986, 8, 22), 30.45),
            summary("John", "Smith", (2006, 9, 1), 17.0),
        ];
        let mock = Arc::new(MockIntakeApi::new().with_patients(patients));
        let mut view = ListingView::new(mock.clone());

        view.refresh(None).await.unwrap();

        assert_eq!(view.applied(), 1);
        assert_eq!(view.rows().len(), 2);
        assert_eq!(view.rows()[0].name, "Jane Doe");
        assert_eq!(view.rows()[1].classification, "Underweight");
        assert_eq!(mock.last_list_filter(), Some(None));
    }

    #[tokio::test]
    async fn test_refresh_passes_the_filter_through() {
        let mock = Arc::new(MockIntakeApi::new());
        let mut view = ListingView::new(mock.clone());

        let date = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        view.refresh(Some(date)).await.unwrap();

        assert_eq!(mock.last_list_filter(), Some(Some(date)));
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_the_rows() {
        let mock = Arc::new(MockIntakeApi::new().with_connection_failure());
        let mut view = ListingView::new(mock);

        view.apply(&[summary("Jane", "Doe", (1986, 8, 22), 22.0)], today());
        assert_eq!(view.rows().len(), 1);

        let result = view.refresh(None).await;

        assert!(result.is_err(), "A connection failure surfaces as an error");
        assert_eq!(view.rows().len(), 1, "The previous rows stay rendered");
        assert_eq!(view.applied(), 1);
    }

    #[test]
    fn test_last_applied_response_wins() {
        let mock = Arc::new(MockIntakeApi::new());
        let mut view = ListingView::new(mock);

        let first_requested = vec![summary("Jane", "Doe", (1986, 8, 22), 22.0)];
        let second_requested = vec![
            summary("Jane", "Doe", (1986, 8, 22), 22.0),
            summary("John", "Smith", (2006, 9, 1), 17.0),
        ];

        // Responses land out of request order
        view.apply(&second_requested, today());
        view.apply(&first_requested, today());

        assert_eq!(view.applied(), 2);
        assert_eq!(
            view.rows().len(),
            1,
            "The response applied last decides the table"
        );
    }
}
