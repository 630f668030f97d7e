use http::StatusCode;
use serde::{Serialize, Serializer};

use crate::response::{Details, ErrorResponse};

/// Type tag of a base error built without an explicit tag
pub const GENERIC_ERROR_TYPE: &str = "GENERIC_ERROR";

/// Message substituted when an error is built with an empty message
pub const DEFAULT_MESSAGE: &str = "Internal server error";

const BASE_NAME: &str = "ErrorHandler";

/// Trait for errors that can be converted to HTTP error responses
///
/// Implemented by [`ApiError`] and by application error types that want to
/// flow through the adapters. Adapters only ever emit the concrete
/// [`ApiError`] record, so foreign implementors are adopted with
/// [`ApiError::from_http_error`].
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `NOT_FOUND_USER`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;

    /// Caller-supplied context, if any
    fn details(&self) -> Option<&Details> {
        None
    }

    /// Render the response envelope for this error
    ///
    /// Goes through [`ApiError::from_http_error`], so an empty message gets
    /// the same fallback as every other error.
    fn to_response(&self) -> ErrorResponse {
        ApiError::from_http_error(self).to_response()
    }
}

/// An HTTP API error: status code, type tag, message and optional details
///
/// Every error in the taxonomy is one of these. Families, domain variants
/// and factory classes only differ in the defaults they fill in. Fields are
/// fixed once the value is built.
///
/// ```
/// use api_error_core::{ErrorKind, NotFoundType};
/// use serde_json::json;
///
/// let error = NotFoundType::User.error(api_error_core::to_details(&json!({"id": 42})));
/// assert_eq!(error.status_code(), http::StatusCode::NOT_FOUND);
/// assert_eq!(error.error_type(), "NOT_FOUND_USER");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    name: &'static str,
    status_code: StatusCode,
    error_type: String,
    message: String,
    details: Option<Details>,
}

impl ApiError {
    /// Create a 500 `GENERIC_ERROR` with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_parts(message, StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_TYPE, None)
    }

    /// Create an error from all four of its parts
    ///
    /// An empty message is replaced by [`DEFAULT_MESSAGE`].
    pub fn from_parts(
        message: impl Into<String>,
        status_code: StatusCode,
        error_type: impl AsRef<str>,
        details: Option<Details>,
    ) -> Self {
        Self::named(BASE_NAME, message, status_code, error_type, details)
    }

    /// Adopt any [`HttpError`] implementor into the concrete record
    pub fn from_http_error<E: HttpError + ?Sized>(error: &E) -> Self {
        Self::from_parts(
            error.client_message(),
            error.status_code(),
            error.error_type(),
            error.details().cloned(),
        )
    }

    pub(crate) fn named(
        name: &'static str,
        message: impl Into<String>,
        status_code: StatusCode,
        error_type: impl AsRef<str>,
        details: Option<Details>,
    ) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message = DEFAULT_MESSAGE.to_owned();
        }

        Self {
            name,
            status_code,
            error_type: error_type.as_ref().to_owned(),
            message,
            details,
        }
    }

    /// Name of the error class this value was built from (e.g. `UserNotFoundError`)
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Always `false`; errors never describe a successful response
    #[allow(clippy::unused_self)]
    pub const fn success(&self) -> bool {
        false
    }

    /// HTTP status code
    pub const fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// Machine-readable type tag
    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Caller-supplied context
    pub const fn details(&self) -> Option<&Details> {
        self.details.as_ref()
    }

    /// Render the response envelope
    ///
    /// Pure: calling it repeatedly yields equal bodies.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            success: self.success(),
            error_type: self.error_type.clone(),
            status_code: self.status_code.as_u16(),
            message: self.message.clone(),
            details: self.details.clone(),
        }
    }
}

impl HttpError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn error_type(&self) -> &str {
        &self.error_type
    }

    fn client_message(&self) -> String {
        self.message.clone()
    }

    fn details(&self) -> Option<&Details> {
        self.details.as_ref()
    }

    fn to_response(&self) -> ErrorResponse {
        Self::to_response(self)
    }
}

impl Serialize for ApiError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        BorrowedResponse {
            success: self.success(),
            error_type: &self.error_type,
            status_code: self.status_code.as_u16(),
            message: &self.message,
            details: self.details.as_ref(),
        }
        .serialize(serializer)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BorrowedResponse<'a> {
    success: bool,
    #[serde(rename = "type")]
    error_type: &'a str,
    status_code: u16,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a Details>,
}
