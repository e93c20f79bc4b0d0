// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::rbac::PolicyError;
use crate::workflow::WorkflowError;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    ValidationError {
        message: String,
        field_errors: Option<HashMap<String, String>>,
    },
    OrgHeaderInvalid(String),
    UnknownRole(String),
    UnknownResource(String),
    UnknownStatus(String),
    InvalidActionForResource(String),
    DocsRequiredMissing {
        message: String,
        missing: Vec<String>,
    },

    // 403 Forbidden
    Forbidden(String),
    TransitionForbidden(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_)
            | ApiError::ValidationError { .. }
            | ApiError::OrgHeaderInvalid(_)
            | ApiError::UnknownRole(_)
            | ApiError::UnknownResource(_)
            | ApiError::UnknownStatus(_)
            | ApiError::InvalidActionForResource(_)
            | ApiError::DocsRequiredMissing { .. } => 400,
            ApiError::Forbidden(_) | ApiError::TransitionForbidden(_) => 403,
            ApiError::NotFound(_) => 404,
            ApiError::InternalServerError(_) => 500,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::ValidationError { message, .. } => message,
            ApiError::OrgHeaderInvalid(msg) => msg,
            ApiError::UnknownRole(msg) => msg,
            ApiError::UnknownResource(msg) => msg,
            ApiError::UnknownStatus(msg) => msg,
            ApiError::InvalidActionForResource(msg) => msg,
            ApiError::DocsRequiredMissing { message, .. } => message,
            ApiError::Forbidden(msg) => msg,
            ApiError::TransitionForbidden(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::ValidationError { .. } => "VALIDATION_ERROR",
            ApiError::OrgHeaderInvalid(_) => "ORG_HEADER_INVALID",
            ApiError::UnknownRole(_) => "UNKNOWN_ROLE",
            ApiError::UnknownResource(_) => "UNKNOWN_RESOURCE",
            ApiError::UnknownStatus(_) => "UNKNOWN_STATUS",
            ApiError::InvalidActionForResource(_) => "INVALID_ACTION_FOR_RESOURCE",
            ApiError::DocsRequiredMissing { .. } => "DOCS_REQUIRED_MISSING",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::TransitionForbidden(_) => "TRANSITION_FORBIDDEN",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        let mut response = json!({
            "error": true,
            "message": self.message(),
            "code": self.error_code()
        });

        match self {
            ApiError::ValidationError {
                field_errors: Some(field_errors),
                ..
            } => {
                response["field_errors"] = json!(field_errors);
            }
            ApiError::DocsRequiredMissing { missing, .. } => {
                response["missing"] = json!(missing);
            }
            _ => {}
        }

        response
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn validation_error(
        message: impl Into<String>,
        field_errors: Option<HashMap<String, String>>,
    ) -> Self {
        ApiError::ValidationError {
            message: message.into(),
            field_errors,
        }
    }

    /// Single-field validation failure.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), message.into());
        ApiError::validation_error("Invalid field format", Some(field_errors))
    }

    pub fn org_header_invalid(message: impl Into<String>) -> Self {
        ApiError::OrgHeaderInvalid(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }
}

impl From<PolicyError> for ApiError {
    fn from(err: PolicyError) -> Self {
        if err.is_malformed() {
            tracing::warn!("Malformed policy request: {}", err);
        }
        let message = err.to_string();
        match err {
            PolicyError::UnknownRole(_) => ApiError::UnknownRole(message),
            PolicyError::UnknownResource(_) => ApiError::UnknownResource(message),
            PolicyError::UnknownStatus(_) => ApiError::UnknownStatus(message),
            PolicyError::InvalidActionForResource { .. } => {
                ApiError::InvalidActionForResource(message)
            }
            PolicyError::Denied { .. } => ApiError::Forbidden(message),
            PolicyError::TransitionForbidden { .. } => ApiError::TransitionForbidden(message),
        }
    }
}

impl From<WorkflowError> for ApiError {
    fn from(err: WorkflowError) -> Self {
        let message = err.to_string();
        match err {
            WorkflowError::DocsRequiredMissing(missing) => {
                ApiError::DocsRequiredMissing { message, missing }
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}
