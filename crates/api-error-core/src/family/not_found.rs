use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use super::{ErrorKind, Family};
use crate::ApiError;

/// Types of "Not Found" errors (HTTP 404)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum NotFoundType {
    /// Generic missing resource
    #[strum(serialize = "NOT_FOUND")]
    NotFound,
    #[strum(serialize = "NOT_FOUND_USER")]
    User,
    #[strum(serialize = "NOT_FOUND_EMAIL")]
    Email,
    #[strum(serialize = "NOT_FOUND_PRODUCT")]
    Product,
    #[strum(serialize = "NOT_FOUND_POST")]
    Post,
    #[strum(serialize = "NOT_FOUND_COMMENT")]
    Comment,
    #[strum(serialize = "NOT_FOUND_CATEGORY")]
    Category,
    #[strum(serialize = "NOT_FOUND_FILE")]
    File,
    #[strum(serialize = "NOT_FOUND_IMAGE")]
    Image,
    #[strum(serialize = "NOT_FOUND_ADDRESS")]
    Address,
}

impl ErrorKind for NotFoundType {
    const FAMILY: Family = Family::NotFound;
    const GENERIC: Self = Self::NotFound;

    fn default_message(self) -> &'static str {
        match self {
            Self::NotFound => Self::FAMILY.default_message(),
            Self::User => "User not found",
            Self::Email => "Email not found",
            Self::Product => "Product not found",
            Self::Post => "Post not found",
            Self::Comment => "Comment not found",
            Self::Category => "Category not found",
            Self::File => "File not found",
            Self::Image => "Image not found",
            Self::Address => "Address not found",
        }
    }

    fn error_name(self) -> &'static str {
        match self {
            Self::NotFound => Self::FAMILY.name(),
            Self::User => "UserNotFoundError",
            Self::Email => "EmailNotFoundError",
            Self::Product => "ProductNotFoundError",
            Self::Post => "PostNotFoundError",
            Self::Comment => "CommentNotFoundError",
            Self::Category => "CategoryNotFoundError",
            Self::File => "FileNotFoundError",
            Self::Image => "ImageNotFoundError",
            Self::Address => "AddressNotFoundError",
        }
    }
}

impl From<NotFoundType> for ApiError {
    fn from(kind: NotFoundType) -> Self {
        kind.error(None)
    }
}
