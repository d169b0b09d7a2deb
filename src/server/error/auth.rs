use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Neither a session user nor a valid bearer token was presented.
    #[error("No authenticated user in session or request")]
    UserNotInSession,

    /// The session refers to a user id that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Bearer token unknown, expired or revoked.
    #[error("Bearer token is invalid or expired")]
    InvalidToken,

    /// Username and password did not match.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Password reset token failed verification or its user is gone.
    #[error("Password reset token is invalid or expired")]
    InvalidResetToken,

    /// Hashing a password or parsing a stored hash failed.
    #[error("Password hash error: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `InvalidToken` → 401 "Authentication required"
/// - `InvalidCredentials` → 401 "Invalid username or password"
/// - `InvalidResetToken` → 400 "Invalid or expired reset token"
/// - `PasswordHash` → 500 with a generic message
///
/// The detailed cause is logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::InvalidToken => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid username or password"),
            Self::InvalidResetToken => (StatusCode::BAD_REQUEST, "Invalid or expired reset token"),
            Self::PasswordHash(ref err) => {
                tracing::error!("Password hash error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
