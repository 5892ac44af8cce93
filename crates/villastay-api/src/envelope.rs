//! The uniform response envelope returned by every endpoint.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Uniform result container for every API operation.
///
/// The envelope's `status_code` is also the HTTP status of the response;
/// a failed envelope never travels under a 2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// HTTP-equivalent result class of the operation.
    pub status_code: u16,
    /// Whether the operation succeeded.
    pub is_success: bool,
    /// Ordered human-readable error messages; empty on success.
    pub error_messages: Vec<String>,
    /// The payload; present on success, absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// Location reference emitted as a `Location` header on creation.
    #[serde(skip)]
    location: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// A 200 envelope carrying a payload.
    pub fn ok(result: T) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            is_success: true,
            error_messages: Vec::new(),
            result: Some(result),
            location: None,
        }
    }

    /// A 201 envelope carrying the stored payload and a reference to
    /// where it can be fetched.
    pub fn created(result: T, location: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::CREATED.as_u16(),
            is_success: true,
            error_messages: Vec::new(),
            result: Some(result),
            location: Some(location.into()),
        }
    }

    /// A 204 envelope. Serialized with no body, as HTTP requires.
    pub fn no_content() -> Self {
        Self {
            status_code: StatusCode::NO_CONTENT.as_u16(),
            is_success: true,
            error_messages: Vec::new(),
            result: None,
            location: None,
        }
    }

    /// A failure envelope with the given status and messages.
    pub fn failure(status: StatusCode, error_messages: Vec<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            is_success: false,
            error_messages,
            result: None,
            location: None,
        }
    }

    /// The HTTP status this envelope travels under.
    pub fn http_status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.http_status();
        if status == StatusCode::NO_CONTENT {
            return status.into_response();
        }
        match self.location.clone() {
            Some(location) => {
                (status, [(header::LOCATION, location)], Json(self)).into_response()
            }
            None => (status, Json(self)).into_response(),
        }
    }
}
