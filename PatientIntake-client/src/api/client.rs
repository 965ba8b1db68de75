use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::assessment::{
    AssessmentResponse, GeneralAssessmentRequest, OverweightAssessmentRequest,
};
use crate::models::common::PingResponse;
use crate::models::patient::{PatientSummary, RegisterPatientRequest, RegisterPatientResponse};
use crate::models::vitals::{SaveVitalsRequest, SaveVitalsResponse};

/// Fallback messages for error responses that carry no `error` field
const REGISTER_FALLBACK: &str = "Failed to register patient";
const VITALS_FALLBACK: &str = "Failed to save vitals";
const ASSESSMENT_FALLBACK: &str = "Failed to save assessment";
const LIST_FALLBACK: &str = "Failed to fetch patients";
const PING_FALLBACK: &str = "Backend unavailable";

/// Raw result of one backend call
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Whether the HTTP status was in the success range
    pub ok: bool,

    /// HTTP status code
    pub status: u16,

    /// Parsed JSON body, returned regardless of status
    pub body: Value,
}

impl ApiResponse {
    /// Returns the backend's `error` field, if the body carries one.
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }

    /// Converts a non-success response into an API error, using the
    /// backend's `error` field verbatim when present.
    pub fn api_error(&self, fallback: &str) -> ClientError {
        ClientError::Api {
            status: self.status,
            message: self.error_message().unwrap_or(fallback).to_string(),
        }
    }
}

/// Trait for calls against the patient intake backend
#[async_trait]
pub trait IntakeApiTrait {
    /// Check that the backend is reachable
    async fn ping(&self) -> Result<PingResponse, ClientError>;

    /// Register a new patient
    async fn register_patient(
        &self,
        request: RegisterPatientRequest,
    ) -> Result<RegisterPatientResponse, ClientError>;

    /// Record vitals for a visit and get the computed BMI back
    async fn submit_vitals(
        &self,
        request: SaveVitalsRequest,
    ) -> Result<SaveVitalsResponse, ClientError>;

    /// Submit an overweight assessment
    async fn submit_overweight_assessment(
        &self,
        request: OverweightAssessmentRequest,
    ) -> Result<AssessmentResponse, ClientError>;

    /// Submit a general assessment
    async fn submit_general_assessment(
        &self,
        request: GeneralAssessmentRequest,
    ) -> Result<AssessmentResponse, ClientError>;

    /// List registered patients, optionally filtered by visit date
    async fn list_patients(
        &self,
        visit_date: Option<NaiveDate>,
    ) -> Result<Vec<PatientSummary>, ClientError>;
}

/// Shared handle to the intake API used by the workflow handlers
pub type IntakeApi = Arc<dyn IntakeApiTrait + Send + Sync>;

/// HTTP client for the patient intake backend.
/// One instance is shared by every workflow handler.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client against the given configuration
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Send one request to the backend.
    ///
    /// The body, when present, is sent JSON-encoded. The parsed JSON body
    /// is returned whatever the HTTP status; `ok` mirrors status success.
    /// A transport failure or an undecodable body is a
    /// [`ClientError::Connection`]. One attempt, no retries, no timeout.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ClientError> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!("Sending {} {}", method, url);

        // Build the request, attaching the JSON body when present
        let mut builder = self.http.request(method, &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        // Single attempt against the backend
        let response = builder.send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            ClientError::from(e)
        })?;

        let status = response.status();

        // Parse the body regardless of status; callers inspect `ok`
        let body = response.json::<Value>().await.map_err(|e| {
            error!("Could not decode response from {}: {}", url, e);
            ClientError::from(e)
        })?;

        Ok(ApiResponse {
            ok: status.is_success(),
            status: status.as_u16(),
            body,
        })
    }

    /// Decode a successful response body into a typed value
    fn decode<T: serde::de::DeserializeOwned>(response: ApiResponse) -> Result<T, ClientError> {
        Ok(serde_json::from_value(response.body)?)
    }
}

#[async_trait]
impl IntakeApiTrait for ApiClient {
    /// Check that the backend is reachable
    async fn ping(&self) -> Result<PingResponse, ClientError> {
        let response = self.request(Method::GET, "/", None).await?;
        if !response.ok {
            return Err(response.api_error(PING_FALLBACK));
        }
        Self::decode(response)
    }

    /// Register a new patient
    async fn register_patient(
        &self,
        request: RegisterPatientRequest,
    ) -> Result<RegisterPatientResponse, ClientError> {
        let body = serde_json::to_value(&request)?;
        let response = self.request(Method::POST, "/patients", Some(&body)).await?;
        if !response.ok {
            warn!(
                "Registration rejected with status {}: {:?}",
                response.status,
                response.error_message()
            );
            return Err(response.api_error(REGISTER_FALLBACK));
        }
        Self::decode(response)
    }

    /// Record vitals for a visit and get the computed BMI back
    async fn submit_vitals(
        &self,
        request: SaveVitalsRequest,
    ) -> Result<SaveVitalsResponse, ClientError> {
        let body = serde_json::to_value(&request)?;
        let response = self.request(Method::POST, "/vitals", Some(&body)).await?;
        if !response.ok {
            warn!(
                "Vitals rejected with status {}: {:?}",
                response.status,
                response.error_message()
            );
            return Err(response.api_error(VITALS_FALLBACK));
        }
        Self::decode(response)
    }

    /// Submit an overweight assessment
    async fn submit_overweight_assessment(
        &self,
        request: OverweightAssessmentRequest,
    ) -> Result<AssessmentResponse, ClientError> {
        let body = serde_json::to_value(&request)?;
        let response = self
            .request(Method::POST, "/assessments/overweight", Some(&body))
            .await?;
        if !response.ok {
            return Err(response.api_error(ASSESSMENT_FALLBACK));
        }
        Self::decode(response)
    }

    /// Submit a general assessment
    async fn submit_general_assessment(
        &self,
        request: GeneralAssessmentRequest,
    ) -> Result<AssessmentResponse, ClientError> {
        let body = serde_json::to_value(&request)?;
        let response = self
            .request(Method::POST, "/assessments/general", Some(&body))
            .await?;
        if !response.ok {
            return Err(response.api_error(ASSESSMENT_FALLBACK));
        }
        Self::decode(response)
    }

    /// List registered patients, optionally filtered by visit date
    async fn list_patients(
        &self,
        visit_date: Option<NaiveDate>,
    ) -> Result<Vec<PatientSummary>, ClientError> {
        let path = match visit_date {
            Some(date) => format!("/patients?visit_date={}", date.format("%Y-%m-%d")),
            None => "/patients".to_string(),
        };
        let response = self.request(Method::GET, &path, None).await?;
        if !response.ok {
            return Err(response.api_error(LIST_FALLBACK));
        }
        Self::decode(response)
    }
}

/// Create an API client for the configured backend
pub fn create_client(config: ClientConfig) -> IntakeApi {
    Arc::new(ApiClient::new(config))
}

/// Mock intake API for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;
    use crate::models::vitals::NextForm;

    /// Mock implementation of the intake API for testing.
    ///
    /// Submissions are counted and their payloads kept so tests can assert
    /// what reached the backend (or that nothing did).
    pub struct MockIntakeApi {
        patients: Vec<PatientSummary>,
        bmi: f64,
        next_form: NextForm,
        api_error: Option<(u16, String)>,
        fail_connection: bool,
        submissions: AtomicUsize,
        last_register: Mutex<Option<RegisterPatientRequest>>,
        last_vitals: Mutex<Option<SaveVitalsRequest>>,
        last_overweight: Mutex<Option<OverweightAssessmentRequest>>,
        last_general: Mutex<Option<GeneralAssessmentRequest>>,
        last_filter: Mutex<Option<Option<NaiveDate>>>,
    }

    impl Default for MockIntakeApi {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockIntakeApi {
        /// Create a mock that accepts every call
        pub fn new() -> Self {
            Self {
                patients: Vec::new(),
                bmi: 22.0,
                next_form: NextForm::General,
                api_error: None,
                fail_connection: false,
                submissions: AtomicUsize::new(0),
                last_register: Mutex::new(None),
                last_vitals: Mutex::new(None),
                last_overweight: Mutex::new(None),
                last_general: Mutex::new(None),
                last_filter: Mutex::new(None),
            }
        }

        /// Set the patients returned by `list_patients`
        pub fn with_patients(mut self, patients: Vec<PatientSummary>) -> Self {
            self.patients = patients;
            self
        }

        /// Set the BMI returned for vitals submissions.
        /// The accompanying `next_form` follows the backend's routing rule.
        pub fn with_bmi(mut self, bmi: f64) -> Self {
            self.bmi = bmi;
            self.next_form = if bmi <= 25.0 {
                NextForm::General
            } else {
                NextForm::Overweight
            };
            self
        }

        /// Override the `next_form` returned for vitals submissions
        pub fn with_next_form(mut self, next_form: NextForm) -> Self {
            self.next_form = next_form;
            self
        }

        /// Configure every call to fail with an API error
        pub fn with_api_error(mut self, status: u16, message: &str) -> Self {
            self.api_error = Some((status, message.to_string()));
            self
        }

        /// Configure every call to fail as a connection error
        pub fn with_connection_failure(mut self) -> Self {
            self.fail_connection = true;
            self
        }

        /// Number of submissions attempted against the mock
        pub fn submission_count(&self) -> usize {
            self.submissions.load(Ordering::SeqCst)
        }

        /// Last registration payload received
        pub fn last_register_request(&self) -> Option<RegisterPatientRequest> {
            self.last_register.lock().unwrap().clone()
        }

        /// Last vitals payload received
        pub fn last_vitals_request(&self) -> Option<SaveVitalsRequest> {
            self.last_vitals.lock().unwrap().clone()
        }

        /// Last overweight assessment payload received
        pub fn last_overweight_request(&self) -> Option<OverweightAssessmentRequest> {
            self.last_overweight.lock().unwrap().clone()
        }

        /// Last general assessment payload received
        pub fn last_general_request(&self) -> Option<GeneralAssessmentRequest> {
            self.last_general.lock().unwrap().clone()
        }

        /// Last visit date filter passed to `list_patients`
        pub fn last_list_filter(&self) -> Option<Option<NaiveDate>> {
            self.last_filter.lock().unwrap().clone()
        }

        fn scripted_failure(&self) -> Option<ClientError> {
            if self.fail_connection {
                return Some(ClientError::Connection("connection refused".to_string()));
            }
            self.api_error.as_ref().map(|(status, message)| ClientError::Api {
                status: *status,
                message: message.clone(),
            })
        }
    }

    #[async_trait]
    impl IntakeApiTrait for MockIntakeApi {
        async fn ping(&self) -> Result<PingResponse, ClientError> {
            if let Some(failure) = self.scripted_failure() {
                return Err(failure);
            }
            Ok(PingResponse {
                message: "Patient API running".to_string(),
            })
        }

        async fn register_patient(
            &self,
            request: RegisterPatientRequest,
        ) -> Result<RegisterPatientResponse, ClientError> {
            *self.last_register.lock().unwrap() = Some(request.clone());
            self.submissions.fetch_add(1, Ordering::SeqCst);

            if let Some(failure) = self.scripted_failure() {
                return Err(failure);
            }
            Ok(RegisterPatientResponse {
                message: Some("Patient registered successfully".to_string()),
                patient_id: request.patient_id,
                next_page: Some("vitals".to_string()),
            })
        }

        async fn submit_vitals(
            &self,
            request: SaveVitalsRequest,
        ) -> Result<SaveVitalsResponse, ClientError> {
            *self.last_vitals.lock().unwrap() = Some(request);
            self.submissions.fetch_add(1, Ordering::SeqCst);

            if let Some(failure) = self.scripted_failure() {
                return Err(failure);
            }
            Ok(SaveVitalsResponse {
                message: Some("Vitals saved".to_string()),
                bmi: self.bmi,
                next_form: self.next_form,
                vitals_id: Some(1),
            })
        }

        async fn submit_overweight_assessment(
            &self,
            request: OverweightAssessmentRequest,
        ) -> Result<AssessmentResponse, ClientError> {
            *self.last_overweight.lock().unwrap() = Some(request);
            self.submissions.fetch_add(1, Ordering::SeqCst);

            if let Some(failure) = self.scripted_failure() {
                return Err(failure);
            }
            Ok(AssessmentResponse {
                message: Some("Overweight assessment saved".to_string()),
                assessment_id: Some(1),
            })
        }

        async fn submit_general_assessment(
            &self,
            request: GeneralAssessmentRequest,
        ) -> Result<AssessmentResponse, ClientError> {
            *self.last_general.lock().unwrap() = Some(request);
            self.submissions.fetch_add(1, Ordering::SeqCst);

            if let Some(failure) = self.scripted_failure() {
                return Err(failure);
            }
            Ok(AssessmentResponse {
                message: Some("General assessment saved".to_string()),
                assessment_id: Some(1),
            })
        }

        async fn list_patients(
            &self,
            visit_date: Option<NaiveDate>,
        ) -> Result<Vec<PatientSummary>, ClientError> {
            *self.last_filter.lock().unwrap() = Some(visit_date);

            if let Some(failure) = self.scripted_failure() {
                return Err(failure);
            }
            Ok(self.patients.clone())
        }
    }
}
