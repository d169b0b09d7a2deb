use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
    service::auth::AuthService,
};

/// Resolves the principal of a request.
///
/// A signed-in session wins; otherwise an `Authorization: Bearer <token>` header
/// is checked against the users table. Every successful check records the
/// user's `last_seen`.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            session,
            headers,
        }
    }

    /// Requires an authenticated user.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user with `last_seen` set to now
    /// - `Err(AuthError::UserNotInSession)` - Neither a session nor a bearer token
    /// - `Err(AuthError::UserNotInDatabase(_))` - Session refers to a deleted user
    /// - `Err(AuthError::InvalidToken)` - Unknown, expired or revoked bearer token
    pub async fn require(&self) -> Result<User, AppError> {
        let mut user = self.authenticate().await?;

        let now = Utc::now();
        UserRepository::new(self.db)
            .update_last_seen(user.id, now)
            .await?;
        user.last_seen = Some(now);

        Ok(user)
    }

    async fn authenticate(&self) -> Result<User, AppError> {
        if let Some(user_id) = AuthSession::new(self.session).get_user_id().await? {
            let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
                return Err(AuthError::UserNotInDatabase(user_id).into());
            };

            return Ok(user);
        }

        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::UserNotInSession.into());
        };

        AuthService::new(self.db)
            .check_token(token)
            .await?
            .ok_or_else(|| AuthError::InvalidToken.into())
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
