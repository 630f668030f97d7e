use std::fmt;
use std::marker::PhantomData;

use http::StatusCode;
use serde::Serialize;

use crate::{ApiError, Details, to_details};

/// Message used when neither the caller nor the descriptor supplies one
pub const FACTORY_DEFAULT_MESSAGE: &str = "An error occurred";

/// Declarative description of a custom error class
///
/// `T` is the type-tag type: `&'static str`, `String`, or an enum with an
/// `AsRef<str>` impl (e.g. derived with `strum::AsRefStr`).
#[derive(Debug, Clone)]
pub struct ErrorDescriptor<T = &'static str> {
    /// Class name (e.g. `PaymentFailedError`)
    pub name: &'static str,
    /// Status code every error of this class carries
    pub status_code: StatusCode,
    /// Type tag used when the caller does not pick one
    pub default_type: T,
    /// Message used when the caller does not supply one
    pub default_message: Option<&'static str>,
}

/// Build a reusable error class from a descriptor
///
/// The descriptor is consumed here and never looked at again. Classes built
/// from different descriptors share nothing.
///
/// ```
/// use std::sync::LazyLock;
///
/// use api_error_core::{ErrorClass, ErrorDescriptor, create_handle_error};
/// use http::StatusCode;
///
/// static PAYMENT_FAILED: LazyLock<ErrorClass> = LazyLock::new(|| {
///     create_handle_error(ErrorDescriptor {
///         name: "PaymentFailedError",
///         status_code: StatusCode::PAYMENT_REQUIRED,
///         default_type: "PAYMENT_FAILED",
///         default_message: Some("Payment could not be processed"),
///     })
/// });
///
/// let error = PAYMENT_FAILED.default_error();
/// assert_eq!(error.status_code(), StatusCode::PAYMENT_REQUIRED);
/// assert_eq!(error.message(), "Payment could not be processed");
///
/// let declined = PAYMENT_FAILED.new(Some("Card declined"), Some("PAYMENT_DECLINED"), None);
/// assert_eq!(declined.error_type(), "PAYMENT_DECLINED");
/// ```
pub fn create_handle_error<T, D>(descriptor: ErrorDescriptor<T>) -> ErrorClass<T, D> {
    let ErrorDescriptor {
        name,
        status_code,
        default_type,
        default_message,
    } = descriptor;

    ErrorClass {
        name,
        status_code,
        default_type,
        default_message: default_message.unwrap_or(FACTORY_DEFAULT_MESSAGE),
        details: PhantomData,
    }
}

/// Constructor for one custom error class
///
/// `D` is the shape of the details callers attach; anything serializable to a
/// JSON object works, and [`Details`] is the untyped default.
pub struct ErrorClass<T = &'static str, D = Details> {
    name: &'static str,
    status_code: StatusCode,
    default_type: T,
    default_message: &'static str,
    details: PhantomData<fn(D)>,
}

impl<T, D> ErrorClass<T, D>
where
    T: AsRef<str>,
    D: Serialize,
{
    /// Build an error of this class
    ///
    /// Each `None` falls back to the class default.
    #[allow(clippy::new_ret_no_self)]
    pub fn new(&self, message: Option<&str>, error_type: Option<T>, details: Option<D>) -> ApiError {
        let details = details.as_ref().and_then(to_details);

        match error_type {
            Some(error_type) => ApiError::named(
                self.name,
                message.unwrap_or(self.default_message),
                self.status_code,
                error_type,
                details,
            ),
            None => ApiError::named(
                self.name,
                message.unwrap_or(self.default_message),
                self.status_code,
                &self.default_type,
                details,
            ),
        }
    }

    /// Build an error of this class with every default in place
    pub fn default_error(&self) -> ApiError {
        self.new(None, None, None)
    }

    /// Build an error of this class carrying only details
    pub fn with_details(&self, details: D) -> ApiError {
        self.new(None, None, Some(details))
    }
}

impl<T, D> ErrorClass<T, D> {
    /// Class name
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Status code of every error this class builds
    pub const fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// Type tag used when none is supplied
    pub const fn default_type(&self) -> &T {
        &self.default_type
    }

    /// Message used when none is supplied
    pub const fn default_message(&self) -> &'static str {
        self.default_message
    }
}

impl<T: Clone, D> Clone for ErrorClass<T, D> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            status_code: self.status_code,
            default_type: self.default_type.clone(),
            default_message: self.default_message,
            details: PhantomData,
        }
    }
}

impl<T: fmt::Debug, D> fmt::Debug for ErrorClass<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorClass")
            .field("name", &self.name)
            .field("status_code", &self.status_code)
            .field("default_type", &self.default_type)
            .field("default_message", &self.default_message)
            .finish_non_exhaustive()
    }
}
