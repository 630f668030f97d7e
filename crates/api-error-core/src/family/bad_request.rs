use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use super::{ErrorKind, Family};
use crate::ApiError;

/// Types of "Bad Request" errors (HTTP 400)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum BadRequestType {
    /// Generic bad request
    #[strum(serialize = "BAD_REQUEST")]
    BadRequest,
    /// Missing or invalid user data
    #[strum(serialize = "INVALID_USER_DATA")]
    UserData,
    /// Invalid email format or missing email field
    #[strum(serialize = "INVALID_EMAIL")]
    Email,
    /// Invalid or missing product details
    #[strum(serialize = "INVALID_PRODUCT_DATA")]
    ProductData,
    /// Invalid or missing post data
    #[strum(serialize = "INVALID_POST_DATA")]
    PostData,
    /// Invalid or missing comment data
    #[strum(serialize = "INVALID_COMMENT_DATA")]
    CommentData,
    /// Invalid or missing category information
    #[strum(serialize = "INVALID_CATEGORY_DATA")]
    CategoryData,
    /// Invalid or missing file
    #[strum(serialize = "INVALID_FILE")]
    File,
    /// Invalid or missing image data
    #[strum(serialize = "INVALID_IMAGE")]
    Image,
    /// Invalid or missing address information
    #[strum(serialize = "INVALID_ADDRESS")]
    Address,
}

impl ErrorKind for BadRequestType {
    const FAMILY: Family = Family::BadRequest;
    const GENERIC: Self = Self::BadRequest;

    fn default_message(self) -> &'static str {
        match self {
            Self::BadRequest => Self::FAMILY.default_message(),
            Self::UserData => "Missing required user information in the request",
            Self::Email => "Invalid email format or missing email field",
            Self::ProductData => "Invalid or missing product details",
            Self::PostData => "Invalid or missing post data",
            Self::CommentData => "Invalid or missing comment data",
            Self::CategoryData => "Invalid or missing category information",
            Self::File => "Invalid or missing file in the request",
            Self::Image => "Invalid or missing image data",
            Self::Address => "Invalid or missing address information",
        }
    }

    fn error_name(self) -> &'static str {
        match self {
            Self::BadRequest => Self::FAMILY.name(),
            Self::UserData => "InvalidUserDataError",
            Self::Email => "InvalidEmailError",
            Self::ProductData => "InvalidProductDataError",
            Self::PostData => "InvalidPostDataError",
            Self::CommentData => "InvalidCommentDataError",
            Self::CategoryData => "InvalidCategoryDataError",
            Self::File => "InvalidFileError",
            Self::Image => "InvalidImageError",
            Self::Address => "InvalidAddressError",
        }
    }
}

impl From<BadRequestType> for ApiError {
    fn from(kind: BadRequestType) -> Self {
        kind.error(None)
    }
}
