mod bad_request;
mod forbidden;
mod not_found;
mod unauthorized;
mod validation;

use http::StatusCode;

pub use bad_request::BadRequestType;
pub use forbidden::ForbiddenType;
pub use not_found::NotFoundType;
pub use unauthorized::UnauthorizedType;
pub use validation::ValidationType;

use crate::{ApiError, Details};

/// Error category sharing one fixed HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Family {
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 422
    Validation,
}

impl Family {
    /// Status code every error of this family carries
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Family-generic type tag
    pub const fn default_type(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::Validation => "VALIDATION",
        }
    }

    /// Message used when a family error is built without one
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Resource not found",
            Self::Validation => "Validation error",
        }
    }

    /// Class name of the family-generic error
    pub const fn name(self) -> &'static str {
        match self {
            Self::BadRequest => "BadRequestError",
            Self::Unauthorized => "UnauthorizedError",
            Self::Forbidden => "ForbiddenError",
            Self::NotFound => "NotFoundError",
            Self::Validation => "ValidationError",
        }
    }

    /// Family owning the given status code, if any
    pub fn from_status(status: StatusCode) -> Option<Self> {
        match status {
            StatusCode::BAD_REQUEST => Some(Self::BadRequest),
            StatusCode::UNAUTHORIZED => Some(Self::Unauthorized),
            StatusCode::FORBIDDEN => Some(Self::Forbidden),
            StatusCode::NOT_FOUND => Some(Self::NotFound),
            StatusCode::UNPROCESSABLE_ENTITY => Some(Self::Validation),
            _ => None,
        }
    }
}

/// Closed set of type tags belonging to one family
///
/// Every tag enum starts with its family-generic variant ([`Self::GENERIC`]);
/// the rest are domain variants with a fixed message. Building a domain
/// variant only lets the caller choose `details`:
///
/// ```
/// use api_error_core::{ErrorKind, NotFoundType};
///
/// let error = NotFoundType::Product.error(None);
/// assert_eq!(error.message(), "Product not found");
/// assert_eq!(error.name(), "ProductNotFoundError");
/// ```
pub trait ErrorKind: Copy + Into<&'static str> {
    /// Family every tag of this enum belongs to
    const FAMILY: Family;

    /// Family-generic tag
    const GENERIC: Self;

    /// Wire representation of the tag
    fn tag(self) -> &'static str {
        self.into()
    }

    /// Fixed message of this variant
    fn default_message(self) -> &'static str;

    /// Class name of this variant (e.g. `UserNotFoundError`)
    fn error_name(self) -> &'static str;

    /// Build this variant, attaching optional details
    fn error(self, details: Option<Details>) -> ApiError {
        ApiError::named(
            self.error_name(),
            self.default_message(),
            Self::FAMILY.status_code(),
            self.tag(),
            details,
        )
    }
}

impl ApiError {
    /// 400 family error
    ///
    /// Missing parts fall back to `"Bad request"` and `BAD_REQUEST`.
    pub fn bad_request(message: Option<&str>, error_type: Option<BadRequestType>, details: Option<Details>) -> Self {
        Self::in_family(message, error_type, details)
    }

    /// 401 family error
    ///
    /// Missing parts fall back to `"Unauthorized"` and `UNAUTHORIZED`.
    pub fn unauthorized(message: Option<&str>, error_type: Option<UnauthorizedType>, details: Option<Details>) -> Self {
        Self::in_family(message, error_type, details)
    }

    /// 403 family error
    ///
    /// Missing parts fall back to `"Forbidden"` and `FORBIDDEN`.
    pub fn forbidden(message: Option<&str>, error_type: Option<ForbiddenType>, details: Option<Details>) -> Self {
        Self::in_family(message, error_type, details)
    }

    /// 404 family error
    ///
    /// Missing parts fall back to `"Resource not found"` and `NOT_FOUND`.
    pub fn not_found(message: Option<&str>, error_type: Option<NotFoundType>, details: Option<Details>) -> Self {
        Self::in_family(message, error_type, details)
    }

    /// 422 family error
    ///
    /// Missing parts fall back to `"Validation error"` and `VALIDATION`.
    pub fn validation(message: Option<&str>, error_type: Option<ValidationType>, details: Option<Details>) -> Self {
        Self::in_family(message, error_type, details)
    }

    /// Family this error's status code belongs to, if any
    pub fn family(&self) -> Option<Family> {
        Family::from_status(self.status_code())
    }

    fn in_family<K: ErrorKind>(message: Option<&str>, kind: Option<K>, details: Option<Details>) -> Self {
        let family = K::FAMILY;
        Self::named(
            family.name(),
            message.unwrap_or(family.default_message()),
            family.status_code(),
            kind.unwrap_or(K::GENERIC).tag(),
            details,
        )
    }
}
