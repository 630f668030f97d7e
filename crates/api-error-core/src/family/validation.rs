use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use super::{ErrorKind, Family};
use crate::ApiError;

/// Types of "Unprocessable Entity" validation errors (HTTP 422)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum ValidationType {
    /// Generic validation failure
    #[strum(serialize = "VALIDATION")]
    Validation,
    #[strum(serialize = "VALIDATION_USER")]
    User,
    #[strum(serialize = "VALIDATION_EMAIL")]
    Email,
    #[strum(serialize = "VALIDATION_PRODUCT")]
    Product,
    #[strum(serialize = "VALIDATION_POST")]
    Post,
    #[strum(serialize = "VALIDATION_COMMENT")]
    Comment,
    #[strum(serialize = "VALIDATION_CATEGORY")]
    Category,
    #[strum(serialize = "VALIDATION_FILE")]
    File,
    #[strum(serialize = "VALIDATION_IMAGE")]
    Image,
    #[strum(serialize = "VALIDATION_ADDRESS")]
    Address,
}

impl ErrorKind for ValidationType {
    const FAMILY: Family = Family::Validation;
    const GENERIC: Self = Self::Validation;

    fn default_message(self) -> &'static str {
        match self {
            Self::Validation => Self::FAMILY.default_message(),
            Self::User => "User validation failed",
            Self::Email => "Email validation failed",
            Self::Product => "Product validation failed",
            Self::Post => "Post validation failed",
            Self::Comment => "Comment validation failed",
            Self::Category => "Category validation failed",
            Self::File => "File validation failed",
            Self::Image => "Image validation failed",
            Self::Address => "Address validation failed",
        }
    }

    fn error_name(self) -> &'static str {
        match self {
            Self::Validation => Self::FAMILY.name(),
            Self::User => "ValidationUserError",
            Self::Email => "ValidationEmailError",
            Self::Product => "ValidationProductError",
            Self::Post => "ValidationPostError",
            Self::Comment => "ValidationCommentError",
            Self::Category => "ValidationCategoryError",
            Self::File => "ValidationFileError",
            Self::Image => "ValidationImageError",
            Self::Address => "ValidationAddressError",
        }
    }
}

impl From<ValidationType> for ApiError {
    fn from(kind: ValidationType) -> Self {
        kind.error(None)
    }
}
