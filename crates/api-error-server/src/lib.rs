//! Framework adapters that turn errors into the standard JSON envelope
//!
//! All adapters share one policy, [`ErrorMapper`]. They differ only in the
//! hook shape they plug into: middleware with a `next` continuation, a
//! reply object, registered exception filters, or axum's own
//! `IntoResponse`.
#![allow(clippy::must_use_candidate)]

mod filter;
mod handler;
mod mapper;
mod middleware;
mod reply;
mod sink;
mod validation;

pub use filter::{ApiErrorFilter, CatchAllFilter, ExceptionFilter, FilterRegistry, HostContext};
pub use handler::{ErrorResponder, handle_error};
pub use mapper::{ErrorMapper, HTTP_EXCEPTION_TYPE, find_api_error};
pub use middleware::{ErrorMiddleware, error_middleware};
pub use reply::{ReplyErrorHandler, reply_error_handler};
pub use sink::{CapturedResponse, Reply, ResponseSink};
pub use validation::{SchemaIssue, SchemaViolation, UNRECOGNIZED_KEYS_CODE};
