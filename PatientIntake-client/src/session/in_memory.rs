use std::sync::{Arc, Mutex};

use tracing::debug;
use uuid::Uuid;

use super::{RecordedBmi, SessionStore};
use crate::error::SessionError;

/// In-memory session store.
/// Clones share the same underlying state, so every page handler sees
/// the one BMI recorded for the session.
#[derive(Debug, Clone)]
pub struct InMemorySession {
    /// Identifier for this session, used in logs
    session_id: Uuid,

    /// Last recorded BMI, if any
    bmi: Arc<Mutex<Option<RecordedBmi>>>,
}

impl Default for InMemorySession {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySession {
    /// Create an empty session
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            bmi: Arc::new(Mutex::new(None)),
        }
    }

    /// Identifier of this session
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }
}

impl SessionStore for InMemorySession {
    /// Record a BMI, replacing any previous record
    fn put_bmi(&self, record: RecordedBmi) -> Result<(), SessionError> {
        let mut slot = self.bmi.lock().map_err(|e| SessionError::Lock(e.to_string()))?;
        debug!(
            "Session {}: recorded BMI {} for visit {}",
            self.session_id, record.bmi, record.visit_date
        );
        *slot = Some(record);
        Ok(())
    }

    /// Get the last recorded BMI, if any
    fn bmi(&self) -> Result<Option<RecordedBmi>, SessionError> {
        let slot = self.bmi.lock().map_err(|e| SessionError::Lock(e.to_string()))?;
        Ok(*slot)
    }

    /// Drop the recorded BMI
    fn clear_bmi(&self) -> Result<(), SessionError> {
        let mut slot = self.bmi.lock().map_err(|e| SessionError::Lock(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn visit() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 2).unwrap()
    }

    #[test]
    fn test_new_session_has_no_bmi() {
        let session = InMemorySession::new();
        assert!(session.bmi().unwrap().is_none());
    }

    #[test]
    fn test_put_then_get_returns_record() {
        let session = InMemorySession::new();
        let record = RecordedBmi::new(30.0, visit());

        session.put_bmi(record).unwrap();
        let stored = session.bmi().unwrap();
        assert_eq!(stored, Some(record));
    }

    #[test]
    fn test_put_replaces_previous_record() {
        let session = InMemorySession::new();
        session.put_bmi(RecordedBmi::new(30.0, visit())).unwrap();
        session.put_bmi(RecordedBmi::new(22.0, visit())).unwrap();

        let stored = session.bmi().unwrap().map(|r| r.bmi);
        assert_eq!(stored, Some(22.0));
    }

    #[test]
    fn test_clear_removes_record() {
        let session = InMemorySession::new();
        session.put_bmi(RecordedBmi::new(30.0, visit())).unwrap();
        session.clear_bmi().unwrap();

        assert!(session.bmi().unwrap().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let session = InMemorySession::new();
        let page_view = session.clone();

        session.put_bmi(RecordedBmi::new(26.3, visit())).unwrap();

        let seen = page_view.bmi().unwrap().map(|r| r.bmi);
        assert_eq!(seen, Some(26.3), "A clone must see the recorded BMI");
    }
}
