use std::error::Error as StdError;

use api_error_core::ApiError;
use http::request::Parts;

use crate::mapper::{ErrorMapper, find_api_error};
use crate::sink::ResponseSink;

/// Execution context handed to exception filters
pub trait HostContext {
    /// Response the filter writes to
    fn response(&mut self) -> &mut dyn ResponseSink;

    /// Request being handled, when the host exposes it
    fn request(&self) -> Option<&Parts> {
        None
    }
}

/// Handler for one class of exceptions
pub trait ExceptionFilter: Send + Sync {
    /// Whether this filter handles the exception
    fn accepts(&self, exception: &(dyn StdError + 'static)) -> bool;

    /// Write the response for an accepted exception
    fn catch(&self, exception: &(dyn StdError + 'static), host: &mut dyn HostContext);
}

/// Filter for errors carrying an [`ApiError`]
#[derive(Debug, Clone, Default)]
pub struct ApiErrorFilter;

impl ApiErrorFilter {
    /// Write the error's own status and envelope
    pub fn catch_api_error(exception: &ApiError, host: &mut dyn HostContext) {
        host.response().send_json(exception.status_code(), &exception.to_response());
    }
}

impl ExceptionFilter for ApiErrorFilter {
    fn accepts(&self, exception: &(dyn StdError + 'static)) -> bool {
        find_api_error(exception).is_some()
    }

    fn catch(&self, exception: &(dyn StdError + 'static), host: &mut dyn HostContext) {
        if let Some(api_error) = find_api_error(exception) {
            Self::catch_api_error(api_error, host);
        }
    }
}

/// Filter for every exception, applying the full mapping policy
#[derive(Debug, Clone, Default)]
pub struct CatchAllFilter {
    mapper: ErrorMapper,
}

impl CatchAllFilter {
    pub const fn new(mapper: ErrorMapper) -> Self {
        Self { mapper }
    }
}

impl ExceptionFilter for CatchAllFilter {
    fn accepts(&self, _exception: &(dyn StdError + 'static)) -> bool {
        true
    }

    fn catch(&self, exception: &(dyn StdError + 'static), host: &mut dyn HostContext) {
        let body = self.mapper.map(exception);
        host.response().send_json(body.status(), &body);
    }
}

/// Registered exception filters, tried in registration order
///
/// ```
/// use api_error_server::{ApiErrorFilter, CatchAllFilter, ErrorMapper, FilterRegistry};
///
/// let filters = FilterRegistry::new()
///     .register(ApiErrorFilter)
///     .register(CatchAllFilter::new(ErrorMapper::default()));
/// assert_eq!(filters.len(), 2);
/// ```
#[derive(Default)]
pub struct FilterRegistry {
    filters: Vec<Box<dyn ExceptionFilter>>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// [`ApiErrorFilter`] followed by a [`CatchAllFilter`] using `mapper`
    pub fn with_defaults(mapper: ErrorMapper) -> Self {
        Self::new().register(ApiErrorFilter).register(CatchAllFilter::new(mapper))
    }

    #[must_use]
    pub fn register<F: ExceptionFilter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Hand the exception to the first filter that accepts it
    ///
    /// Returns `false` when no filter accepted it and nothing was written.
    pub fn dispatch(&self, exception: &(dyn StdError + 'static), host: &mut dyn HostContext) -> bool {
        if host.response().headers_sent() {
            tracing::warn!("response already started, exception left to the host");
            return false;
        }

        match self.filters.iter().find(|filter| filter.accepts(exception)) {
            Some(filter) => {
                filter.catch(exception, host);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("filters", &self.filters.len())
            .finish()
    }
}
