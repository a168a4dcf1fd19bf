use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// A failed call to the hospital backend. Callers treat every variant the
/// same way ("request failed"); the split only feeds the log line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("{resource} does not support {operation}")]
    Unsupported {
        resource: &'static str,
        operation: &'static str,
    },
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Backend error: {0}")]
    Upstream(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound(msg) => AppError::NotFound(msg),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        tracing::error!("Error: {}: {}", status, message);

        let body = Html(format!(
            "<!DOCTYPE html><html><body><h1>{}</h1><p>{}</p><a href=\"/\">Back to dashboard</a></body></html>",
            status,
            escape_text(message)
        ));

        (status, body).into_response()
    }
}

fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_not_found_maps_to_not_found() {
        let err: AppError = ApiError::NotFound("patient 7".into()).into();
        assert_matches!(err, AppError::NotFound(msg) if msg == "patient 7");
    }

    #[test]
    fn test_status_maps_to_upstream() {
        let err: AppError = ApiError::Status { status: 500, body: "boom".into() }.into();
        assert_matches!(err, AppError::Upstream(msg) if msg.contains("500"));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let response = AppError::BadRequest("<script>".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
