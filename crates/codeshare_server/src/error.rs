//! HTTP error mapping for API handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use codeshare_core::AppError;
use serde_json::json;

/// Wrapper that maps [`AppError`] onto HTTP responses.
///
/// Handlers return `Result<_, HttpError>` and use `?` on core operations;
/// the conversion below picks the status code and a JSON error body.
#[derive(Debug)]
pub struct HttpError(pub AppError);

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl HttpError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_)
            | AppError::StorageMessage(_)
            | AppError::Serialization(_)
            | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match &self.0 {
            AppError::NotFound | AppError::BadRequest(_) | AppError::Conflict(_) => {
                self.0.to_string()
            }
            // Storage details stay in the server log, not the response body.
            _ => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_variants() {
        assert_eq!(
            HttpError(AppError::NotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            HttpError(AppError::BadRequest("too big".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HttpError(AppError::Conflict("exists".into())).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            HttpError(AppError::Internal).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_errors_do_not_leak_details() {
        let err = HttpError(AppError::StorageMessage("disk exploded".into()));
        assert_eq!(err.public_message(), "Internal server error");
    }
}
