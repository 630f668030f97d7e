use std::error::Error as StdError;

use api_error_config::HandlerConfig;
use api_error_core::{ApiError, ErrorResponse, ValidationType};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use http::StatusCode;

use crate::validation::SchemaViolation;

/// Type tag for rejections raised by the web framework itself
pub const HTTP_EXCEPTION_TYPE: &str = "HTTP_EXCEPTION";

/// Error-to-response policy shared by every adapter
///
/// An error and its `source()` chain are inspected in order:
///
/// 1. an [`ApiError`] is sent as-is;
/// 2. a schema-validation failure ([`SchemaViolation`] or
///    [`validator::ValidationErrors`]) becomes a 422 carrying the aggregated
///    reason;
/// 3. an axum extractor rejection keeps its own status, tagged
///    `HTTP_EXCEPTION`;
/// 4. anything else becomes the generic 500 body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMapper {
    validation_kind: ValidationType,
    fallback_message: String,
    expose_error_message: bool,
}

impl ErrorMapper {
    pub fn new(config: &HandlerConfig) -> Self {
        Self {
            validation_kind: config.validation.kind,
            fallback_message: config.fallback.message.clone(),
            expose_error_message: config.fallback.expose_error_message,
        }
    }

    /// Validation domain reported for schema-validation failures
    pub const fn validation_kind(&self) -> ValidationType {
        self.validation_kind
    }

    /// Map any error to its response body
    pub fn map(&self, error: &(dyn StdError + 'static)) -> ErrorResponse {
        match self.recognize(error) {
            Some(api_error) => {
                tracing::debug!(
                    name = api_error.name(),
                    status = api_error.status_code().as_u16(),
                    error_type = api_error.error_type(),
                    "mapped error to response"
                );
                api_error.to_response()
            }
            None => self.unrecognized(error),
        }
    }

    /// Recognized shape of the error as an [`ApiError`], if it has one
    pub fn recognize(&self, error: &(dyn StdError + 'static)) -> Option<ApiError> {
        if let Some(api_error) = find_api_error(error) {
            return Some(api_error.clone());
        }

        if let Some(violation) = find_schema_violation(error) {
            return Some(violation.to_api_error(self.validation_kind));
        }

        find_rejection(error)
            .map(|(status, message)| ApiError::from_parts(message, status, HTTP_EXCEPTION_TYPE, None))
    }

    /// Generic 500 body for an error without a recognized shape
    pub fn unrecognized(&self, error: &(dyn StdError + 'static)) -> ErrorResponse {
        tracing::error!(error = %error, "unhandled error, responding with 500");

        let message = if self.expose_error_message && !error.to_string().is_empty() {
            error.to_string()
        } else {
            self.fallback_message.clone()
        };

        ErrorResponse::internal_with_message(message)
    }
}

impl Default for ErrorMapper {
    fn default() -> Self {
        Self::new(&HandlerConfig::default())
    }
}

/// Errors in the `source()` chain, starting with the error itself
fn chain<'a>(error: &'a (dyn StdError + 'static)) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(error), |&e| e.source())
}

/// First [`ApiError`] in the error's `source()` chain
pub fn find_api_error<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a ApiError> {
    chain(error).find_map(|e| e.downcast_ref::<ApiError>())
}

fn find_schema_violation(error: &(dyn StdError + 'static)) -> Option<SchemaViolation> {
    chain(error).find_map(|e| {
        e.downcast_ref::<SchemaViolation>().cloned().or_else(|| {
            e.downcast_ref::<validator::ValidationErrors>()
                .map(SchemaViolation::from)
        })
    })
}

fn find_rejection(error: &(dyn StdError + 'static)) -> Option<(StatusCode, String)> {
    chain(error).find_map(|e| {
        if let Some(rejection) = e.downcast_ref::<JsonRejection>() {
            Some((rejection.status(), rejection.body_text()))
        } else if let Some(rejection) = e.downcast_ref::<QueryRejection>() {
            Some((rejection.status(), rejection.body_text()))
        } else {
            e.downcast_ref::<PathRejection>()
                .map(|rejection| (rejection.status(), rejection.body_text()))
        }
    })
}
