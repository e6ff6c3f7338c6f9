use thiserror::Error;

// Each error type must have a corresponding HTTP status code (see `routes.rs`)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkError {
    // A required configuration item is absent or empty
    #[error("Missing configuration: {0}")]
    ConfigurationMissing(String),

    // Missing arguments or bad content in the request
    #[error("Invalid Request: {0}")]
    InvalidRequest(String),

    // Any request that could not be authenticated
    #[error("Access denied: {0}")]
    Unauthorized(String),

    // The bearer token could not be parsed as a JWT
    #[error("Malformed token: {0}")]
    TokenMalformed(String),

    // The `exp` claim is in the past
    #[error("Expired token")]
    TokenExpired,

    // The `aud` claim does not match the configured audience
    #[error("Token audience mismatch")]
    TokenAudienceMismatch,

    // The signature does not verify against the issuer keys
    #[error("Invalid token signature: {0}")]
    TokenSignatureInvalid(String),

    // Any errors related to a bad behavior of the server but not related to the user input
    #[error("Unexpected server error: {0}")]
    ServerError(String),
}

impl From<std::io::Error> for SkError {
    fn from(e: std::io::Error) -> Self {
        Self::ServerError(e.to_string())
    }
}

impl From<reqwest::Error> for SkError {
    fn from(e: reqwest::Error) -> Self {
        Self::ServerError(e.to_string())
    }
}

impl From<serde_json::Error> for SkError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidRequest(e.to_string())
    }
}

/// Return early with an error if a condition is not satisfied.
///
/// This macro is equivalent to `if !$cond { return Err(From::from($err)); }`.
#[macro_export]
macro_rules! sk_ensure {
    ($cond:expr, $msg:literal $(,)?) => {
        if !$cond {
            return ::core::result::Result::Err($crate::sk_error!($msg));
        }
    };
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return ::core::result::Result::Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return ::core::result::Result::Err($crate::sk_error!($fmt, $($arg)*));
        }
    };
}

/// Construct a server error from a string.
#[macro_export]
macro_rules! sk_error {
    ($msg:literal) => {
        $crate::error::SkError::ServerError(::core::format_args!($msg).to_string())
    };
    ($err:expr $(,)?) => ({
        $crate::error::SkError::ServerError($err.to_string())
    });
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::SkError::ServerError(::core::format_args!($fmt, $($arg)*).to_string())
    };
}

/// Return early with an error if a condition is not satisfied.
#[macro_export]
macro_rules! sk_bail {
    ($msg:literal) => {
        return ::core::result::Result::Err($crate::sk_error!($msg))
    };
    ($err:expr $(,)?) => {
        return ::core::result::Result::Err($err)
    };
    ($fmt:expr, $($arg:tt)*) => {
        return ::core::result::Result::Err($crate::sk_error!($fmt, $($arg)*))
    };
}
