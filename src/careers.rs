//! Career application endpoint.
//!
//! `POST /api/careers` accepts a multipart application, checks the required
//! parts, and acknowledges it. Applications are not stored or forwarded.

use crate::form::{FieldSet, Payload, ResponseBody, Transport, TransportError, TransportResponse, Upload};
use async_trait::async_trait;
use axum::Json;
use axum::extract::Multipart;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

pub const RECEIVED: &str = "Application received. We'll be in touch!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareerApplication {
    pub position: String,
    pub name: String,
    pub location: String,
    pub cover_letter: String,
    pub portfolio_link: String,
    pub social_link: String,
    pub cv: Option<Upload>,
}

impl From<&FieldSet> for CareerApplication {
    fn from(fields: &FieldSet) -> Self {
        let text = |name: &str| fields.get(name).unwrap_or_default().to_string();
        Self {
            position: text("position"),
            name: text("name"),
            location: text("location"),
            cover_letter: text("coverLetter"),
            portfolio_link: text("portfolioLink"),
            social_link: text("socialLink"),
            cv: fields.file("cv").cloned(),
        }
    }
}

/// `{success, message}` body of every response from this endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub success: bool,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("Name and location are required.")]
    MissingIdentity,
    #[error("CV file is required.")]
    MissingCv,
    /// The body hit the upload limit before it was fully read.
    #[error("CV file is too large.")]
    TooLarge,
    #[error("Failed to process application.")]
    Unreadable(String),
}

impl ApplicationError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApplicationError::MissingIdentity | ApplicationError::MissingCv => {
                StatusCode::BAD_REQUEST
            }
            ApplicationError::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApplicationError::Unreadable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn from_read(status: StatusCode, detail: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            ApplicationError::TooLarge
        } else {
            ApplicationError::Unreadable(detail)
        }
    }
}

impl From<MultipartError> for ApplicationError {
    fn from(err: MultipartError) -> Self {
        Self::from_read(err.status(), err.body_text())
    }
}

impl From<MultipartRejection> for ApplicationError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::from_read(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let body = Json(Acknowledgement {
            success: false,
            message: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}

/// Validate and acknowledge. Nothing is persisted.
pub fn acknowledge(application: &CareerApplication) -> Result<Acknowledgement, ApplicationError> {
    if application.name.trim().is_empty() || application.location.trim().is_empty() {
        return Err(ApplicationError::MissingIdentity);
    }
    let cv = match &application.cv {
        Some(cv) if !cv.is_empty() => cv,
        _ => return Err(ApplicationError::MissingCv),
    };
    info!(
        position = %application.position,
        cv_bytes = cv.len(),
        "career application received"
    );
    Ok(Acknowledgement {
        success: true,
        message: RECEIVED.to_string(),
    })
}

/// Collect text parts and the first file part. Parts sent with a file name
/// are treated as files.
pub async fn read_fields(multipart: Multipart) -> Result<FieldSet, ApplicationError> {
    let mut fields = FieldSet::new();
    read_into(multipart, &mut fields).await?;
    Ok(fields)
}

/// Like [`read_fields`], but parts read before a failure stay in `fields`.
pub async fn read_into(mut multipart: Multipart, fields: &mut FieldSet) -> Result<(), ApplicationError> {
    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                if fields.file_entry().is_none() {
                    fields.set_file(
                        name,
                        Upload {
                            file_name,
                            content_type,
                            bytes: bytes.to_vec(),
                        },
                    );
                }
            }
            None => {
                let value = field.text().await?;
                fields.set(name, value);
            }
        }
    }
    Ok(())
}

/// `POST /api/careers`
pub async fn api_handler(multipart: Result<Multipart, MultipartRejection>) -> Response {
    let result = match multipart {
        Ok(multipart) => read_fields(multipart).await,
        Err(rejection) => Err(rejection.into()),
    };
    let outcome = result.and_then(|fields| acknowledge(&CareerApplication::from(&fields)));
    match outcome {
        Ok(ack) => (StatusCode::OK, Json(ack)).into_response(),
        Err(err) => {
            match &err {
                ApplicationError::Unreadable(detail) => {
                    warn!(%detail, "could not read career application");
                }
                ApplicationError::TooLarge => warn!("career application over the upload limit"),
                _ => {}
            }
            err.into_response()
        }
    }
}

/// Runs the endpoint logic in-process, so server-rendered forms get the same
/// validate-and-acknowledge contract without a loopback request.
#[derive(Debug, Clone, Copy, Default)]
pub struct InProcessTransport;

#[async_trait]
impl Transport for InProcessTransport {
    async fn send(&self, payload: Payload) -> Result<TransportResponse, TransportError> {
        let outcome = match payload {
            Payload::Multipart(fields) => acknowledge(&CareerApplication::from(&fields)),
            Payload::Json(_) => Err(ApplicationError::Unreadable("expected multipart".into())),
        };
        let (status, ack) = match outcome {
            Ok(ack) => (StatusCode::OK, ack),
            Err(err) => (
                err.status(),
                Acknowledgement {
                    success: false,
                    message: err.to_string(),
                },
            ),
        };
        Ok(TransportResponse::new(
            status.as_u16(),
            Some(ResponseBody {
                success: Some(ack.success),
                message: Some(ack.message),
            }),
        ))
    }
}
