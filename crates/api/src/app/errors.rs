use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use cosmocats_core::{DomainError, FieldViolation};

pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Every failure a handler can produce.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The request could not be read at all (bad JSON, bad path id).
    #[error("{0}")]
    Malformed(String),
}

impl ApiError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

/// Problem body (`application/problem+json`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_params: Option<Vec<FieldViolation>>,
}

impl Problem {
    fn new(status: StatusCode, problem_type: &str, title: &str, detail: impl Into<String>) -> Self {
        Self {
            problem_type: problem_type.to_string(),
            title: title.to_string(),
            status: status.as_u16(),
            detail: detail.into(),
            instance: None,
            invalid_params: None,
        }
    }

    pub fn with_instance(mut self, uri: &Uri) -> Self {
        self.instance = Some(uri.path().to_string());
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// The single failure → problem mapping.
pub fn problem_for(err: &ApiError) -> Problem {
    match err {
        ApiError::Domain(DomainError::NotFound(msg)) => Problem::new(
            StatusCode::NOT_FOUND,
            "product-not-found",
            "Product Not Found",
            msg.clone(),
        ),
        ApiError::Domain(DomainError::Validation(violations)) => Problem {
            invalid_params: Some(violations.clone()),
            ..Problem::new(
                StatusCode::BAD_REQUEST,
                "urn:problem-type:validation-error",
                "Field Validation Exception",
                "Request validation failed",
            )
        },
        ApiError::Malformed(msg) => Problem::new(
            StatusCode::BAD_REQUEST,
            "urn:problem-type:malformed-request",
            "Malformed Request",
            msg.clone(),
        ),
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            [(header::CONTENT_TYPE, PROBLEM_CONTENT_TYPE)],
            axum::Json(self),
        )
            .into_response()
    }
}

/// Turn a handler outcome into a response; failures become problems for `uri`.
pub fn respond<T: IntoResponse>(uri: &Uri, result: Result<T, ApiError>) -> Response {
    match result {
        Ok(ok) => ok.into_response(),
        Err(err) => {
            if let ApiError::Domain(DomainError::Validation(v)) = &err {
                tracing::info!(violations = v.len(), "input params validation failed");
            }
            problem_for(&err).with_instance(uri).into_response()
        }
    }
}
