//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Lookup misses are not errors: `find_user_by_phone`, `find_user_by_id`
/// and `list_transactions` report absence through `Option`/empty results.
/// Only block/unblock treat an unknown id as a failure.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already in use")]
    EmailInUse,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a user-not-found error
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::UserNotFound(id.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(Error::EmailInUse.to_string(), "Email already in use");
        assert_eq!(
            Error::user_not_found("42").to_string(),
            "User not found: 42"
        );
    }
}
