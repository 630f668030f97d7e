use std::sync::Arc;

use axum::BoxError;
use axum::Json;
use axum::response::{IntoResponse, Response};

use crate::mapper::ErrorMapper;

/// Handler error that renders through an [`ErrorMapper`]
///
/// Any `std::error::Error` converts into it, so handlers can use `?` on
/// arbitrary errors and still answer with the standard envelope.
///
/// ```
/// use api_error_core::{ErrorKind, NotFoundType};
/// use api_error_server::ErrorResponder;
///
/// async fn show_user(found: bool) -> Result<&'static str, ErrorResponder> {
///     if !found {
///         return Err(NotFoundType::User.error(None).into());
///     }
///     Ok("user")
/// }
/// ```
#[derive(Debug)]
pub struct ErrorResponder {
    error: BoxError,
    mapper: Option<Arc<ErrorMapper>>,
}

impl ErrorResponder {
    pub fn new(error: impl Into<BoxError>) -> Self {
        Self {
            error: error.into(),
            mapper: None,
        }
    }

    /// Render with `mapper` instead of the default policy
    #[must_use]
    pub fn with_mapper(mut self, mapper: Arc<ErrorMapper>) -> Self {
        self.mapper = Some(mapper);
        self
    }

    pub fn error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.error
    }

    pub fn into_inner(self) -> BoxError {
        self.error
    }
}

impl<E> From<E> for ErrorResponder
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl IntoResponse for ErrorResponder {
    fn into_response(self) -> Response {
        let body = match &self.mapper {
            Some(mapper) => mapper.map(&*self.error),
            None => ErrorMapper::default().map(&*self.error),
        };

        (body.status(), Json(body)).into_response()
    }
}

/// Error handler for `HandleErrorLayer`, mapping middleware failures
pub async fn handle_error(error: BoxError) -> Response {
    ErrorResponder::new(error).into_response()
}
