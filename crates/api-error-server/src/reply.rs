use std::error::Error as StdError;

use http::request::Parts;

use crate::mapper::ErrorMapper;
use crate::sink::Reply;

/// Error hook for reply-style frameworks: `(error, request, reply)`
#[derive(Debug, Clone, Default)]
pub struct ReplyErrorHandler {
    mapper: ErrorMapper,
}

impl ReplyErrorHandler {
    pub const fn new(mapper: ErrorMapper) -> Self {
        Self { mapper }
    }

    pub fn handle<R: Reply>(&self, error: &(dyn StdError + 'static), request: &Parts, reply: &mut R) {
        tracing::debug!(method = %request.method, uri = %request.uri, "handling request error");

        let body = self.mapper.map(error);
        reply.code(body.status()).send(&body);
    }
}

/// [`ReplyErrorHandler`] with the default policy
pub fn reply_error_handler<R: Reply>(error: &(dyn StdError + 'static), request: &Parts, reply: &mut R) {
    ReplyErrorHandler::default().handle(error, request, reply);
}

#[cfg(test)]
mod tests {
    use api_error_config::{FallbackConfig, HandlerConfig};
    use api_error_core::{ApiError, ErrorKind, UnauthorizedType};
    use http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::sink::CapturedResponse;

    fn parts() -> Parts {
        http::Request::get("/me").body(()).unwrap().into_parts().0
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Unexpected error")]
    struct Unexpected;

    #[test]
    fn sends_api_error() {
        let error = UnauthorizedType::InvalidToken.error(json!({"reason": "expired"}).as_object().cloned());
        let mut reply = CapturedResponse::new();

        reply_error_handler(&error, &parts(), &mut reply);

        assert_eq!(reply.status(), Some(StatusCode::UNAUTHORIZED));
        assert_eq!(reply.body(), Some(&error.to_response()));
    }

    #[test]
    fn sends_generic_500_with_fixed_message() {
        let mut reply = CapturedResponse::new();

        reply_error_handler(&Unexpected, &parts(), &mut reply);

        let body = reply.body().unwrap();
        assert_eq!(reply.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.error_type, "INTERNAL_SERVER_ERROR");
        assert_eq!(body.message, "An unexpected error occurred");
    }

    #[test]
    fn exposes_message_when_configured() {
        let config = HandlerConfig {
            fallback: FallbackConfig {
                expose_error_message: true,
                ..FallbackConfig::default()
            },
            ..HandlerConfig::default()
        };
        let handler = ReplyErrorHandler::new(ErrorMapper::new(&config));
        let mut reply = CapturedResponse::new();

        handler.handle(&Unexpected, &parts(), &mut reply);

        assert_eq!(reply.body().unwrap().message, "Unexpected error");
        assert_eq!(reply.writes(), 1);
    }

    #[test]
    fn base_error_keeps_custom_status() {
        let error = ApiError::from_parts("Custom error", StatusCode::IM_A_TEAPOT, "CUSTOM_ERROR", None);
        let mut reply = CapturedResponse::new();

        reply_error_handler(&error, &parts(), &mut reply);

        assert_eq!(reply.status(), Some(StatusCode::IM_A_TEAPOT));
    }
}
