use axum::BoxError;
use http::request::Parts;

use crate::mapper::ErrorMapper;
use crate::sink::ResponseSink;

/// Error hook for middleware-style frameworks: `(error, request, response, next)`
///
/// Writes the mapped status and body to `response`. When the response has
/// already started, the error is handed to `next` untouched so the framework
/// can abort the exchange instead of sending a second response.
#[derive(Debug, Clone, Default)]
pub struct ErrorMiddleware {
    mapper: ErrorMapper,
}

impl ErrorMiddleware {
    pub const fn new(mapper: ErrorMapper) -> Self {
        Self { mapper }
    }

    pub fn handle<S, N>(&self, error: BoxError, request: &Parts, response: &mut S, next: N)
    where
        S: ResponseSink + ?Sized,
        N: FnOnce(BoxError),
    {
        if response.headers_sent() {
            tracing::warn!(
                method = %request.method,
                uri = %request.uri,
                "response already started, passing error to next handler"
            );
            next(error);
            return;
        }

        let body = self.mapper.map(&*error);
        response.send_json(body.status(), &body);
    }
}

/// [`ErrorMiddleware`] with the default policy
pub fn error_middleware<S, N>(error: BoxError, request: &Parts, response: &mut S, next: N)
where
    S: ResponseSink + ?Sized,
    N: FnOnce(BoxError),
{
    ErrorMiddleware::default().handle(error, request, response, next);
}
