use chrono::{Datelike, NaiveDate};

use patient_intake_client::models::patient::PatientSummary;

use crate::bmi::classify;

/// One rendered row of the patient listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRow {
    /// Patient's full name
    pub name: String,

    /// Whole years of age as of the rendering date
    pub age: i32,

    /// BMI formatted to one decimal place
    pub bmi: String,

    /// Display classification of the BMI
    pub classification: String,
}

/// Whole years elapsed from `dob` to `today`.
/// The year difference is reduced by one until the birthday has passed.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Derive listing rows from patient summaries
pub fn build_rows(patients: &[PatientSummary], today: NaiveDate) -> Vec<PatientRow> {
    patients
        .iter()
        .map(|patient| PatientRow {
            name: format!("{} {}", patient.first_name, patient.last_name),
            age: age_on(patient.date_of_birth, today),
            bmi: format!("{:.1}", patient.last_bmi),
            classification: classify(patient.last_bmi).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(first: &str, last: &str, dob: NaiveDate, bmi: f64) -> PatientSummary {
        PatientSummary {
            first_name: first.to_string(),
            last_name: last.to_string(),
            date_of_birth: dob,
            last_bmi: bmi,
        }
    }

    #[test]
    fn test_age_in_whole_years() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 22).unwrap();

        let twenty = NaiveDate::from_ymd_opt(2006, 8, 22).unwrap();
        let forty = NaiveDate::from_ymd_opt(1986, 8, 22).unwrap();
        assert_eq!(age_on(twenty, today), 20);
        assert_eq!(age_on(forty, today), 40);
    }

    #[test]
    fn test_age_before_birthday() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 22).unwrap();

        let day_after = NaiveDate::from_ymd_opt(2006, 8, 23).unwrap();
        assert_eq!(
            age_on(day_after, today),
            19,
            "The birthday has not happened yet this year"
        );
    }

    #[test]
    fn test_rows_carry_derived_fields() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 22).unwrap();
        let patients = vec![
            summary(
                "Jane",
                "Doe",
                NaiveDate::from_ymd_opt(2006, 8, 22).unwrap(),
                21.5,
            ),
            summary(
                "John",
                "Smith",
                NaiveDate::from_ymd_opt(1986, 8, 22).unwrap(),
                27.8,
            ),
        ];

        let rows = build_rows(&patients, today);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Jane Doe");
        assert_eq!(rows[0].age, 20);
        assert_eq!(rows[0].bmi, "21.5");
        assert_eq!(rows[0].classification, "Normal");

        assert_eq!(rows[1].name, "John Smith");
        assert_eq!(rows[1].age, 40);
        assert_eq!(rows[1].bmi, "27.8");
        assert_eq!(rows[1].classification, "Overweight");
    }

    #[test]
    fn test_bmi_renders_with_one_decimal() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 22).unwrap();
        let patients = vec![summary(
            "Amy",
            "Low",
            NaiveDate::from_ymd_opt(1999, 1, 1).unwrap(),
            17.0,
        )];

        let rows = build_rows(&patients, today);
        assert_eq!(rows[0].bmi, "17.0");
        assert_eq!(rows[0].classification, "Underweight");
    }

    #[test]
    fn test_empty_listing_builds_no_rows() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 22).unwrap();
        assert!(build_rows(&[], today).is_empty());
    }
}
