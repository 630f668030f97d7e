use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use super::{ErrorKind, Family};
use crate::ApiError;

/// Types of "Forbidden" errors (HTTP 403)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum ForbiddenType {
    /// Generic access denial
    #[strum(serialize = "FORBIDDEN")]
    Forbidden,
    #[strum(serialize = "FORBIDDEN_USER")]
    User,
    #[strum(serialize = "FORBIDDEN_EMAIL")]
    Email,
    #[strum(serialize = "FORBIDDEN_PRODUCT")]
    Product,
    #[strum(serialize = "FORBIDDEN_POST")]
    Post,
    #[strum(serialize = "FORBIDDEN_COMMENT")]
    Comment,
    #[strum(serialize = "FORBIDDEN_CATEGORY")]
    Category,
    #[strum(serialize = "FORBIDDEN_FILE")]
    File,
    #[strum(serialize = "FORBIDDEN_IMAGE")]
    Image,
    #[strum(serialize = "FORBIDDEN_ADDRESS")]
    Address,
}

impl ErrorKind for ForbiddenType {
    const FAMILY: Family = Family::Forbidden;
    const GENERIC: Self = Self::Forbidden;

    fn default_message(self) -> &'static str {
        match self {
            Self::Forbidden => Self::FAMILY.default_message(),
            Self::User => "User access forbidden",
            Self::Email => "Email access forbidden",
            Self::Product => "Product access forbidden",
            Self::Post => "Post access forbidden",
            Self::Comment => "Comment access forbidden",
            Self::Category => "Category access forbidden",
            Self::File => "File access forbidden",
            Self::Image => "Image access forbidden",
            Self::Address => "Address access forbidden",
        }
    }

    fn error_name(self) -> &'static str {
        match self {
            Self::Forbidden => Self::FAMILY.name(),
            Self::User => "ForbiddenUserError",
            Self::Email => "ForbiddenEmailError",
            Self::Product => "ForbiddenProductError",
            Self::Post => "ForbiddenPostError",
            Self::Comment => "ForbiddenCommentError",
            Self::Category => "ForbiddenCategoryError",
            Self::File => "ForbiddenFileError",
            Self::Image => "ForbiddenImageError",
            Self::Address => "ForbiddenAddressError",
        }
    }
}

impl From<ForbiddenType> for ApiError {
    fn from(kind: ForbiddenType) -> Self {
        kind.error(None)
    }
}
