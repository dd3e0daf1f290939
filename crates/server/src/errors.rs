use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use models::validate::Violations;
use service::errors::ServiceError;

/// JSON error envelope shared by every handler failure path.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
    pub violations: Option<Violations>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail, violations: None }
    }

    pub fn validation(violations: Violations) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: "Validation Error",
            detail: None,
            violations: Some(violations),
        }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", None)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let mut body = serde_json::json!({ "error": self.error });
        if let Some(detail) = self.detail {
            body["detail"] = serde_json::Value::String(detail);
        }
        if let Some(violations) = self.violations {
            body["violations"] = serde_json::to_value(&violations).unwrap_or_default();
        }
        (self.status, Json(body)).into_response()
    }
}

/// Map a service failure on a write path to its HTTP outcome. `title` names
/// the operation for opaque storage faults ("Create Failed", "Update Failed").
pub(crate) fn map_write_error(e: ServiceError, title: &'static str) -> JsonApiError {
    match e {
        ServiceError::Validation(v) => JsonApiError::validation(v),
        ServiceError::Conflict(msg) => JsonApiError::new(StatusCode::CONFLICT, "Conflict", Some(msg)),
        ServiceError::Db(msg) => {
            error!(err = %msg, title, "storage failure");
            JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, title, Some(msg))
        }
    }
}
