// Session module structure
mod in_memory;

// Re-export commonly used types
pub use in_memory::InMemorySession;

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// BMI recorded after a vitals submission, tagged with the visit it
/// belongs to so a value from an earlier visit cannot pass a later
/// visit's gate check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordedBmi {
    /// BMI computed by the backend
    pub bmi: f64,

    /// Visit the BMI was recorded for
    pub visit_date: NaiveDate,

    /// When the value was recorded
    pub recorded_at: DateTime<Utc>,
}

impl RecordedBmi {
    /// Record a BMI for the given visit as of now
    pub fn new(bmi: f64, visit_date: NaiveDate) -> Self {
        Self {
            bmi,
            visit_date,
            recorded_at: Utc::now(),
        }
    }

    /// Whether this record belongs to the given visit
    pub fn is_for_visit(&self, visit_date: NaiveDate) -> bool {
        self.visit_date == visit_date
    }
}

/// Trait for the per-session store backing the assessment gate
pub trait SessionStore {
    /// Record a BMI, replacing any previous record
    fn put_bmi(&self, record: RecordedBmi) -> Result<(), SessionError>;

    /// Get the last recorded BMI, if any
    fn bmi(&self) -> Result<Option<RecordedBmi>, SessionError>;

    /// Drop the recorded BMI
    fn clear_bmi(&self) -> Result<(), SessionError>;
}

/// Shared handle to the session store
pub type Session = Arc<dyn SessionStore + Send + Sync>;
