//! BMI classification and assessment routing.
//!
//! Two independent threshold sets live here. The display thresholds
//! (18.5 and 24.9) decide the category label shown in the patient
//! listing; the routing threshold (25) decides which assessment form a
//! visit continues to. They look close enough to unify but are
//! separate rules: a BMI of exactly 25 displays as Overweight yet
//! still routes to the general form.

use std::fmt;

/// Below this BMI a patient is displayed as underweight
pub const UNDERWEIGHT_BELOW: f64 = 18.5;

/// Upper bound of the normal display range, inclusive
pub const NORMAL_UPPER: f64 = 24.9;

/// Above this BMI a visit routes to the overweight assessment form
pub const OVERWEIGHT_FORM_ABOVE: f64 = 25.0;

/// Display category for a BMI value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,

    /// BMI from 18.5 to 24.9 inclusive
    Normal,

    /// Everything above the normal range
    Overweight,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
        };
        write!(f, "{}", label)
    }
}

/// Assessment form a visit continues to after vitals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentRoute {
    /// General assessment, for BMI at or below the routing threshold
    GeneralForm,

    /// Overweight assessment, for BMI above the routing threshold
    OverweightForm,
}

/// Classify a BMI into its display category
pub fn classify(bmi: f64) -> BmiCategory {
    if bmi < UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi <= NORMAL_UPPER {
        BmiCategory::Normal
    } else {
        BmiCategory::Overweight
    }
}

/// Pick the assessment form for a BMI
pub fn route(bmi: f64) -> AssessmentRoute {
    if bmi <= OVERWEIGHT_FORM_ABOVE {
        AssessmentRoute::GeneralForm
    } else {
        AssessmentRoute::OverweightForm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(18.49), BmiCategory::Underweight);
        assert_eq!(classify(18.5), BmiCategory::Normal);
        assert_eq!(classify(24.9), BmiCategory::Normal);
        assert_eq!(classify(24.91), BmiCategory::Overweight);
    }

    #[test]
    fn test_classify_far_from_boundaries() {
        assert_eq!(classify(12.0), BmiCategory::Underweight);
        assert_eq!(classify(21.0), BmiCategory::Normal);
        assert_eq!(classify(35.0), BmiCategory::Overweight);
    }

    #[test]
    fn test_route_boundaries() {
        assert_eq!(route(25.0), AssessmentRoute::GeneralForm);
        assert_eq!(route(25.01), AssessmentRoute::OverweightForm);
    }

    #[test]
    fn test_thresholds_are_independent() {
        // At exactly 25 the label and the route disagree on purpose
        assert_eq!(classify(25.0), BmiCategory::Overweight);
        assert_eq!(route(25.0), AssessmentRoute::GeneralForm);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(BmiCategory::Underweight.to_string(), "Underweight");
        assert_eq!(BmiCategory::Normal.to_string(), "Normal");
        assert_eq!(BmiCategory::Overweight.to_string(), "Overweight");
    }
}
