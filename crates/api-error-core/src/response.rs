use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied context attached to an error
pub type Details = Map<String, Value>;

/// Type tag used for errors nothing in the taxonomy recognizes
pub const INTERNAL_SERVER_ERROR_TYPE: &str = "INTERNAL_SERVER_ERROR";

/// Message used for errors nothing in the taxonomy recognizes
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// JSON body every error response reduces to
///
/// ```json
/// {
///   "success": false,
///   "type": "NOT_FOUND_USER",
///   "statusCode": 404,
///   "message": "User not found",
///   "details": { "id": 42 }
/// }
/// ```
///
/// `details` is left out of the JSON entirely when it is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse<D = Details> {
    /// Always `false`, separates error payloads from success payloads
    pub success: bool,
    /// Machine-readable error tag
    #[serde(rename = "type")]
    pub error_type: String,
    /// HTTP status code, repeated in the body
    pub status_code: u16,
    /// Human-readable message
    pub message: String,
    /// Optional caller-supplied context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<D>,
}

impl<D> ErrorResponse<D> {
    /// Generic 500 body for errors without a recognized shape
    pub fn internal() -> Self {
        Self::internal_with_message(UNEXPECTED_ERROR_MESSAGE)
    }

    /// Generic 500 body carrying a specific message
    pub fn internal_with_message(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_type: INTERNAL_SERVER_ERROR_TYPE.to_owned(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            message: message.into(),
            details: None,
        }
    }

    /// Status code of this body, falling back to 500 for codes `http` rejects
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Convert any serializable value into an error details map
///
/// Objects are used as-is, `null` means "no details", and any other JSON
/// value is stored under a `value` key. A failing `Serialize` impl is logged
/// and yields no details, so building an error never fails.
pub fn to_details<D: Serialize + ?Sized>(value: &D) -> Option<Details> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Some(map),
        Ok(Value::Null) => None,
        Ok(other) => {
            let mut map = Details::new();
            map.insert("value".to_owned(), other);
            Some(map)
        }
        Err(e) => {
            tracing::warn!(error = %e, "error details failed to serialize, dropping them");
            None
        }
    }
}

#[cfg(feature = "axum")]
mod into_response {
    use axum::Json;
    use axum::response::{IntoResponse, Response};
    use serde::Serialize;

    use super::ErrorResponse;
    use crate::ApiError;

    impl IntoResponse for ApiError {
        fn into_response(self) -> Response {
            self.to_response().into_response()
        }
    }

    impl<D: Serialize> IntoResponse for ErrorResponse<D> {
        fn into_response(self) -> Response {
            (self.status(), Json(self)).into_response()
        }
    }
}
