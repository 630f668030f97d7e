//! Typed HTTP API errors and the JSON envelope they serialize to
//!
//! Every error is one flat record, [`ApiError`]. The five status families
//! (400, 401, 403, 404, 422) and their domain variants are constructors that
//! fill in fixed defaults, and [`create_handle_error`] builds new error
//! classes for domains the taxonomy does not cover.
#![allow(clippy::must_use_candidate)]

mod error;
mod factory;
mod family;
mod response;

pub use error::{ApiError, DEFAULT_MESSAGE, GENERIC_ERROR_TYPE, HttpError};
pub use factory::{ErrorClass, ErrorDescriptor, FACTORY_DEFAULT_MESSAGE, create_handle_error};
pub use family::{BadRequestType, ErrorKind, Family, ForbiddenType, NotFoundType, UnauthorizedType, ValidationType};
pub use response::{Details, ErrorResponse, INTERNAL_SERVER_ERROR_TYPE, UNEXPECTED_ERROR_MESSAGE, to_details};
