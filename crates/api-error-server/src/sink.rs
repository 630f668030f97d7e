use api_error_core::ErrorResponse;
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

/// Response object of a middleware-style framework
///
/// The error adapters write exactly one status and one JSON body to it.
pub trait ResponseSink {
    /// Whether a response has already started for this exchange
    fn headers_sent(&self) -> bool;

    /// Write the status code and JSON body, completing the response
    fn send_json(&mut self, status: StatusCode, body: &ErrorResponse);
}

/// Reply object of a reply-style framework
pub trait Reply {
    /// Set the status code of the reply
    fn code(&mut self, status: StatusCode) -> &mut Self;

    /// Send the JSON body, completing the reply
    fn send(&mut self, body: &ErrorResponse);
}

/// In-memory response that records what an adapter wrote
///
/// Works as both a [`ResponseSink`] and a [`Reply`], and converts into an
/// axum [`Response`] afterwards.
#[derive(Debug, Clone, Default)]
pub struct CapturedResponse {
    status: Option<StatusCode>,
    body: Option<ErrorResponse>,
    headers_sent: bool,
    writes: usize,
}

impl CapturedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// A response whose headers were flushed before the error reached the adapter
    pub fn already_sent(status: StatusCode) -> Self {
        Self {
            status: Some(status),
            headers_sent: true,
            ..Self::default()
        }
    }

    pub const fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub const fn body(&self) -> Option<&ErrorResponse> {
        self.body.as_ref()
    }

    /// Number of bodies written so far
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl ResponseSink for CapturedResponse {
    fn headers_sent(&self) -> bool {
        self.headers_sent
    }

    fn send_json(&mut self, status: StatusCode, body: &ErrorResponse) {
        self.status = Some(status);
        self.body = Some(body.clone());
        self.headers_sent = true;
        self.writes += 1;
    }
}

impl Reply for CapturedResponse {
    fn code(&mut self, status: StatusCode) -> &mut Self {
        self.status = Some(status);
        self
    }

    fn send(&mut self, body: &ErrorResponse) {
        self.body = Some(body.clone());
        self.headers_sent = true;
        self.writes += 1;
    }
}

impl IntoResponse for CapturedResponse {
    fn into_response(self) -> Response {
        let status = self.status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.body {
            Some(body) => (status, Json(body)).into_response(),
            None => status.into_response(),
        }
    }
}
