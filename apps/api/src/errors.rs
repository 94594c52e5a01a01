use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// `Validation`, `UnknownCategory` and `UnknownLengthFormat` are client-fault
/// errors and carry enough detail to correct the request. `Generation` wraps
/// any failure surfaced by the completion capability and is never retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown length format: {0}")]
    UnknownLengthFormat(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable error code, also used for batch result slots.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::UnknownCategory(_) => "UNKNOWN_CATEGORY",
            AppError::UnknownLengthFormat(_) => "UNKNOWN_LENGTH_FORMAT",
            AppError::Generation(_) => "GENERATION_FAILED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::UnknownCategory(_)
            | AppError::UnknownLengthFormat(_) => StatusCode::BAD_REQUEST,
            AppError::Generation(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Generation failures keep the upstream
    /// cause for diagnostics; internal errors stay masked.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::UnknownCategory(msg)
            | AppError::UnknownLengthFormat(msg)
            | AppError::Generation(msg) => msg.clone(),
            AppError::Internal(_) => "An internal server error occurred".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Generation(msg) => tracing::error!("Generation failed: {msg}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            _ => {}
        }

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.client_message()
            }
        }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_fault_errors_map_to_400() {
        assert_eq!(
            AppError::Validation("topic_or_text cannot be empty".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnknownCategory("'poem' is not registered".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnknownLengthFormat("'epic' is not valid".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_generation_failure_maps_to_502_and_keeps_cause() {
        let err = AppError::Generation("upstream timed out after 120s".into());
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.code(), "GENERATION_FAILED");
        assert!(err.client_message().contains("timed out"));
    }

    #[test]
    fn test_internal_error_is_masked() {
        let err = AppError::Internal(anyhow::anyhow!("secret connection string leaked"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.client_message().contains("secret"));
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(AppError::Validation(String::new()).code(), "VALIDATION_ERROR");
        assert_eq!(
            AppError::UnknownCategory(String::new()).code(),
            "UNKNOWN_CATEGORY"
        );
        assert_eq!(
            AppError::UnknownLengthFormat(String::new()).code(),
            "UNKNOWN_LENGTH_FORMAT"
        );
        assert_eq!(AppError::Generation(String::new()).code(), "GENERATION_FAILED");
    }
}
