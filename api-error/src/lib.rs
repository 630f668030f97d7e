//! Typed HTTP API errors, a uniform JSON envelope, and framework adapters
//!
//! ```
//! use api_error::prelude::*;
//!
//! let error = ApiError::not_found(Some("No such order"), Some(NotFoundType::Product), None);
//! let body = error.to_response();
//!
//! assert_eq!(body.status_code, 404);
//! assert_eq!(body.error_type, "NOT_FOUND_PRODUCT");
//! assert_eq!(body.message, "No such order");
//! ```
#![allow(clippy::must_use_candidate)]

pub use api_error_config as config;
pub use api_error_core::*;
pub use api_error_server as server;

pub use api_error_config::HandlerConfig;
pub use api_error_server::{ErrorMapper, ErrorResponder, handle_error};

/// Everything a service needs to raise and render errors
pub mod prelude {
    pub use api_error_config::HandlerConfig;
    pub use api_error_core::{
        ApiError, BadRequestType, Details, ErrorClass, ErrorDescriptor, ErrorKind, ErrorResponse, ForbiddenType,
        HttpError, NotFoundType, UnauthorizedType, ValidationType, create_handle_error,
    };
    pub use api_error_server::{
        ErrorMapper, ErrorMiddleware, ErrorResponder, FilterRegistry, ReplyErrorHandler, SchemaViolation,
        handle_error,
    };
}
