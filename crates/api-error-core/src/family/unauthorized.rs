use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use super::{ErrorKind, Family};
use crate::ApiError;

/// Types of "Unauthorized" errors (HTTP 401)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum UnauthorizedType {
    /// Generic authentication failure
    #[strum(serialize = "UNAUTHORIZED")]
    Unauthorized,
    /// Token is malformed or has a bad signature
    #[strum(serialize = "INVALID_TOKEN")]
    InvalidToken,
    /// Username or password is wrong
    #[strum(serialize = "INVALID_CREDENTIALS")]
    InvalidCredentials,
    /// Access token invalid or expired
    #[strum(serialize = "ACCESS_TOKEN_INVALID")]
    AccessToken,
    /// Refresh token invalid or expired
    #[strum(serialize = "REFRESH_TOKEN_INVALID")]
    RefreshToken,
    /// API key missing or unknown
    #[strum(serialize = "API_KEY_INVALID")]
    ApiKey,
    /// Request came from a device that is not trusted
    #[strum(serialize = "UNAUTHORIZED_DEVICE")]
    Device,
}

impl ErrorKind for UnauthorizedType {
    const FAMILY: Family = Family::Unauthorized;
    const GENERIC: Self = Self::Unauthorized;

    fn default_message(self) -> &'static str {
        match self {
            Self::Unauthorized => Self::FAMILY.default_message(),
            Self::InvalidToken => "Invalid token",
            Self::InvalidCredentials => "Invalid credentials",
            Self::AccessToken => "Access token invalid or expired",
            Self::RefreshToken => "Refresh token invalid or expired",
            Self::ApiKey => "Invalid API key",
            Self::Device => "Unauthorized device",
        }
    }

    fn error_name(self) -> &'static str {
        match self {
            Self::Unauthorized => Self::FAMILY.name(),
            Self::InvalidToken => "InvalidTokenError",
            Self::InvalidCredentials => "InvalidCredentialsError",
            Self::AccessToken => "AccessTokenError",
            Self::RefreshToken => "RefreshTokenError",
            Self::ApiKey => "ApiKeyError",
            Self::Device => "UnauthorizedDeviceError",
        }
    }
}

impl From<UnauthorizedType> for ApiError {
    fn from(kind: UnauthorizedType) -> Self {
        kind.error(None)
    }
}
