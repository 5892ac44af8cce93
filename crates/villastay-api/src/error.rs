//! Maps domain `AppError` into failure envelopes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use villastay_core::error::{AppError, ErrorKind};

use crate::envelope::ApiResponse;

/// Wrapper that carries an [`AppError`] out of a handler.
///
/// Handlers return `Result<ApiResponse<T>, ApiError>` so the ? operator
/// converts any `AppError` into a failure envelope with the matching
/// HTTP status.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self(AppError::from(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            // Duplicate unique fields report as bad requests.
            ErrorKind::Conflict => StatusCode::BAD_REQUEST,
            ErrorKind::Serialization => StatusCode::BAD_REQUEST,
            ErrorKind::Database | ErrorKind::Configuration | ErrorKind::Internal => {
                tracing::error!(error = %self.0, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        ApiResponse::<()>::failure(status, vec![self.0.message]).into_response()
    }
}

/// Collapse validator output into a single validation error with one
/// message per failing field, in field order.
pub(crate) fn map_validation_errors(errors: &validator::ValidationErrors) -> AppError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: invalid value"),
            })
        })
        .collect();
    messages.sort();
    AppError::validation(messages.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_map_to_statuses() {
        let cases = [
            (AppError::validation("bad id"), StatusCode::BAD_REQUEST),
            (AppError::not_found("no villa"), StatusCode::NOT_FOUND),
            (AppError::conflict("duplicate"), StatusCode::BAD_REQUEST),
            (
                AppError::database("query failed"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = ApiError(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
