//! Async form submission.
//!
//! A [`FormSubmitter`] validates a [`FieldSet`] against its [`FormSpec`],
//! sends one request through a [`Transport`], and turns the response into a
//! [`FormSubmission`] (status plus user-facing message).
//!
//! ## Lifecycle
//!
//! ```text
//! Idle ──submit──► validation error ──────────────► Error
//!   │
//!   └──► Loading ──transport ok + success flag──► Success (fields cleared)
//!            │
//!            └──transport error / bad status / flag false──► Error
//! ```
//!
//! Only one submission is in flight per submitter: a `submit` that arrives
//! while `Loading` returns [`SubmitOutcome::Ignored`] without touching the
//! network. A response that arrives after [`FormSubmitter::teardown`] is
//! dropped. Nothing is retried.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Status and message shown next to the submit button.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormSubmission {
    pub status: FormStatus,
    pub message: String,
}

impl FormSubmission {
    fn loading() -> Self {
        Self {
            status: FormStatus::Loading,
            message: String::new(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: FormStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: FormStatus::Error,
            message: message.into(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == FormStatus::Loading
    }
}

// =============================================================================
// Field sets and payloads
// =============================================================================

/// An uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Named text fields in submission order, plus at most one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<(String, String)>,
    file: Option<(String, Upload)>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut set = Self::new();
        for (k, v) in pairs {
            set.set(k, v);
        }
        set
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn with_file(mut self, name: impl Into<String>, upload: Upload) -> Self {
        self.set_file(name, upload);
        self
    }

    /// Insert or replace a text field.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn set_file(&mut self, name: impl Into<String>, upload: Upload) {
        self.file = Some((name.into(), upload));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Field value with surrounding whitespace removed; `None` when blank.
    pub fn trimmed(&self, name: &str) -> Option<&str> {
        self.get(name).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn file(&self, name: &str) -> Option<&Upload> {
        self.file
            .as_ref()
            .filter(|(n, _)| n == name)
            .map(|(_, u)| u)
    }

    pub fn file_entry(&self) -> Option<(&str, &Upload)> {
        self.file.as_ref().map(|(n, u)| (n.as_str(), u))
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Blank every value and drop the file, keeping field names.
    pub fn clear(&mut self) {
        for (_, v) in &mut self.fields {
            v.clear();
        }
        self.file = None;
    }
}

/// Request body handed to a transport.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Multipart(FieldSet),
}

// =============================================================================
// Form specs
// =============================================================================

/// How the payload's `success` flag is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessFlag {
    /// Success needs `success: true` in the body.
    Required,
    /// An absent flag counts as success when the HTTP status is OK.
    WhenPresent,
}

#[derive(Debug, Clone)]
pub struct FormMessages {
    pub missing_fields: String,
    pub missing_file: String,
    pub file_too_large: String,
    pub success: String,
    pub logic_failure: String,
    /// `{status}` is replaced with the HTTP status code.
    pub status_failure: String,
    pub connectivity: String,
}

#[derive(Debug, Clone)]
pub struct FileRule {
    pub field: &'static str,
    pub max_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct FormSpec {
    pub required: Vec<&'static str>,
    /// Sent only when non-blank.
    pub optional: Vec<&'static str>,
    pub file: Option<FileRule>,
    pub success_flag: SuccessFlag,
    pub messages: FormMessages,
    /// Modal forms close this long after a success.
    pub auto_close: Option<Duration>,
}

impl FormSpec {
    /// Contact form, posted as JSON to `endpoint`.
    pub fn contact(endpoint: &str) -> Self {
        Self {
            required: vec!["name", "email", "topic", "message"],
            optional: Vec::new(),
            file: None,
            success_flag: SuccessFlag::Required,
            messages: FormMessages {
                missing_fields: "Please fill in all fields.".to_string(),
                missing_file: String::new(),
                file_too_large: String::new(),
                success: "Thanks for reaching out! We'll get back to you within 24 hours."
                    .to_string(),
                logic_failure: "Something went wrong. Please try again.".to_string(),
                status_failure: format!(
                    "Request failed ({{status}}). Check that the API is at {endpoint} and CORS allows this site."
                ),
                connectivity: format!(
                    "Could not reach the server. Check that the API at {endpoint} is running and reachable."
                ),
            },
            auto_close: None,
        }
    }

    /// Career application dialog, posted as multipart with a CV.
    pub fn career_application(max_cv_bytes: u64, auto_close: Duration) -> Self {
        let max_mb = max_cv_bytes / (1024 * 1024);
        Self {
            required: vec!["name", "location"],
            optional: vec!["position", "coverLetter", "portfolioLink", "socialLink"],
            file: Some(FileRule {
                field: "cv",
                max_bytes: max_cv_bytes,
            }),
            success_flag: SuccessFlag::WhenPresent,
            messages: FormMessages {
                missing_fields: "Please enter your name and location.".to_string(),
                missing_file: "Please upload your CV.".to_string(),
                file_too_large: format!("CV must be under {max_mb}MB."),
                success: "Application submitted. We'll be in touch!".to_string(),
                logic_failure: "Something went wrong. Please try again.".to_string(),
                status_failure: "Request failed ({status}).".to_string(),
                connectivity: "Could not submit. Please check your connection and try again."
                    .to_string(),
            },
            auto_close: Some(auto_close),
        }
    }

    /// Client-side checks. Returns the message to show on failure.
    pub fn validate(&self, fields: &FieldSet) -> Result<(), &str> {
        if self.required.iter().any(|f| fields.trimmed(f).is_none()) {
            return Err(self.messages.missing_fields.as_str());
        }
        if let Some(rule) = &self.file {
            match fields.file(rule.field) {
                None => return Err(self.messages.missing_file.as_str()),
                Some(upload) if upload.is_empty() => return Err(self.messages.missing_file.as_str()),
                Some(upload) if upload.len() > rule.max_bytes => {
                    return Err(self.messages.file_too_large.as_str());
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Trimmed required fields, non-blank optional fields, and the file.
    /// Multipart when the form carries a file, JSON otherwise.
    pub fn payload(&self, fields: &FieldSet) -> Payload {
        let mut out = FieldSet::new();
        for name in &self.required {
            out.set(*name, fields.trimmed(name).unwrap_or_default());
        }
        for name in &self.optional {
            if let Some(value) = fields.trimmed(name) {
                out.set(*name, value);
            }
        }
        match &self.file {
            Some(rule) => {
                if let Some(upload) = fields.file(rule.field) {
                    out.set_file(rule.field, upload.clone());
                }
                Payload::Multipart(out)
            }
            None => {
                let map: serde_json::Map<String, serde_json::Value> = out
                    .fields()
                    .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
                    .collect();
                Payload::Json(serde_json::Value::Object(map))
            }
        }
    }

    /// Map a transport result to the submission the user sees.
    pub fn evaluate(&self, result: Result<TransportResponse, TransportError>) -> FormSubmission {
        let response = match result {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "form submission failed in transport");
                return FormSubmission::error(self.messages.connectivity.clone());
            }
        };

        let ok = response.is_ok();
        let body = response.body.unwrap_or_default();
        let flag_ok = match self.success_flag {
            SuccessFlag::Required => body.success == Some(true),
            SuccessFlag::WhenPresent => body.success.unwrap_or(true),
        };

        if ok && flag_ok {
            return FormSubmission::success(
                body.message.unwrap_or_else(|| self.messages.success.clone()),
            );
        }
        warn!(status = response.status, "form submission rejected");
        let fallback = if ok {
            self.messages.logic_failure.clone()
        } else {
            self.messages
                .status_failure
                .replace("{status}", &response.status.to_string())
        };
        FormSubmission::error(body.message.unwrap_or(fallback))
    }
}

// =============================================================================
// Transport
// =============================================================================

/// `{success, message}` envelope returned by form endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    /// Present only when the response declared a JSON body.
    pub body: Option<ResponseBody>,
}

impl TransportResponse {
    pub fn new(status: u16, body: Option<ResponseBody>) -> Self {
        Self { status, body }
    }

    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("server unreachable: {0}")]
    Unreachable(String),
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, payload: Payload) -> Result<TransportResponse, TransportError>;
}

/// Posts payloads to a remote endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn multipart_form(fields: FieldSet) -> reqwest::multipart::Form {
    let mut form = reqwest::multipart::Form::new();
    for (name, value) in fields.fields() {
        form = form.text(name.to_string(), value.to_string());
    }
    if let Some((name, upload)) = fields.file_entry() {
        let part = reqwest::multipart::Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone());
        let part = match upload.content_type.as_deref() {
            Some(mime) => match part.mime_str(mime) {
                Ok(p) => p,
                Err(_) => reqwest::multipart::Part::bytes(upload.bytes.clone())
                    .file_name(upload.file_name.clone()),
            },
            None => part,
        };
        form = form.part(name.to_string(), part);
    }
    form
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, payload: Payload) -> Result<TransportResponse, TransportError> {
        let request = self.client.post(&self.endpoint);
        let request = match payload {
            Payload::Json(value) => request.json(&value),
            Payload::Multipart(fields) => request.multipart(multipart_form(fields)),
        };
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;

        let status = response.status().as_u16();
        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));
        if !is_json {
            return Ok(TransportResponse::new(status, None));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;
        let body: ResponseBody = serde_json::from_slice(&bytes)
            .map_err(|e| TransportError::MalformedBody(e.to_string()))?;
        Ok(TransportResponse::new(status, Some(body)))
    }
}

// =============================================================================
// Submitter
// =============================================================================

/// Result of a finished submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub submission: FormSubmission,
    /// The fields to re-render: cleared after a success, untouched otherwise.
    pub fields: FieldSet,
    /// Set after a success on forms that auto-close.
    pub close_after: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another submission was already in flight.
    Ignored,
    /// The response arrived after teardown and was dropped.
    Discarded,
    Completed(Completion),
}

pub struct FormSubmitter<T: Transport> {
    spec: FormSpec,
    transport: T,
    state: Mutex<FormSubmission>,
    mounted: AtomicBool,
}

impl<T: Transport> FormSubmitter<T> {
    pub fn new(spec: FormSpec, transport: T) -> Self {
        Self {
            spec,
            transport,
            state: Mutex::new(FormSubmission::default()),
            mounted: AtomicBool::new(true),
        }
    }

    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    pub fn state(&self) -> FormSubmission {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The submit control is disabled while a request is in flight.
    pub fn is_submit_enabled(&self) -> bool {
        !self.state().is_loading()
    }

    fn set_state(&self, submission: FormSubmission) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = submission;
    }

    pub async fn submit(&self, mut fields: FieldSet) -> SubmitOutcome {
        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.is_loading() {
                debug!("submission already in flight, ignoring");
                return SubmitOutcome::Ignored;
            }
            if let Err(message) = self.spec.validate(&fields) {
                *state = FormSubmission::error(message);
                return SubmitOutcome::Completed(Completion {
                    submission: state.clone(),
                    fields,
                    close_after: None,
                });
            }
            *state = FormSubmission::loading();
        }

        let result = self.transport.send(self.spec.payload(&fields)).await;

        if !self.mounted.load(Ordering::Acquire) {
            debug!("form torn down before response, discarding");
            return SubmitOutcome::Discarded;
        }

        let submission = self.spec.evaluate(result);
        self.set_state(submission.clone());
        let close_after = if submission.status == FormStatus::Success {
            fields.clear();
            self.spec.auto_close
        } else {
            None
        };
        SubmitOutcome::Completed(Completion {
            submission,
            fields,
            close_after,
        })
    }

    /// The form was unmounted; late responses become no-ops.
    pub fn teardown(&self) {
        self.mounted.store(false, Ordering::Release);
    }

    /// Back to Idle, e.g. when a closed dialog is reopened.
    pub fn reset(&self) {
        self.set_state(FormSubmission::default());
    }
}
