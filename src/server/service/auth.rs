use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    mail::{EmailMessage, MailService},
    model::user::{
        unique_user_error, validate_username, RegisterUserParam, User, EMAIL_TAKEN, USERNAME_TAKEN,
    },
    util::{
        password::{hash_password, verify_password},
        token::{decode_reset_token, encode_reset_token, generate_bearer_token, RESET_TOKEN_EXPIRES_IN},
    },
};

/// Lifetime of a newly issued bearer token.
pub const TOKEN_EXPIRES_IN: i64 = 3600;
/// An existing token is handed out again while it has more than this many seconds left.
pub const TOKEN_REUSE_THRESHOLD: i64 = 60;

/// Password login, registration, bearer tokens and password reset.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user with a hashed password.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Invalid input, or username or email already taken
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        validate_username(&param.username)?;
        validate_email(&param.email)?;
        validate_password(&param.password)?;

        if repo.find_by_username(&param.username).await?.is_some() {
            return Err(AppError::BadRequest(USERNAME_TAKEN.to_string()));
        }
        if repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::BadRequest(EMAIL_TAKEN.to_string()));
        }

        let password_hash = hash_password(&param.password)?;
        // A concurrent registration can still win the insert after the checks above.
        let user = repo
            .create(param.username, param.email, password_hash)
            .await
            .map_err(unique_user_error)?;

        tracing::info!("Registered user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Checks a username and password.
    ///
    /// Unknown usernames and wrong passwords fail the same way.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .filter(|user| verify_password(password, &user.password_hash))
            .ok_or(AuthError::InvalidCredentials)?;

        Ok(user)
    }

    /// Returns a bearer token for `user`, reusing the current one while it has
    /// more than a minute left.
    pub async fn get_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();

        if let Some(token) = user.reusable_token(now, Duration::seconds(TOKEN_REUSE_THRESHOLD)) {
            return Ok(token.to_string());
        }

        let token = generate_bearer_token();
        UserRepository::new(self.db)
            .set_token(
                user.id,
                token.clone(),
                now + Duration::seconds(TOKEN_EXPIRES_IN),
            )
            .await?;

        Ok(token)
    }

    /// Expires the user's bearer token immediately.
    pub async fn revoke_token(&self, user: &User) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .set_token_expiration(user.id, Utc::now() - Duration::seconds(1))
            .await?;

        Ok(())
    }

    /// Looks up the user owning an unexpired bearer token.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Token exists and has not expired
    /// - `Ok(None)` - Unknown, expired or revoked token
    pub async fn check_token(&self, token: &str) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_token(token).await?;
        let now = Utc::now();

        Ok(user.filter(|user| user.token_expiration.is_some_and(|exp| exp > now)))
    }

    /// Queues a password reset email if `email` belongs to a user.
    ///
    /// Always succeeds for unknown addresses so the endpoint cannot be used to
    /// discover which emails have accounts. A full mail queue is logged, not returned.
    pub async fn request_password_reset(
        &self,
        email: &str,
        mail: &MailService,
        config: &Config,
    ) -> Result<(), AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            tracing::debug!("Password reset requested for unknown email");
            return Ok(());
        };

        let token = encode_reset_token(user.id, &config.secret_key, RESET_TOKEN_EXPIRES_IN)?;
        let link = format!("/api/auth/reset_password/{}", token);

        let message = EmailMessage::new(
            "[Dashboard] Reset Your Password",
            config.mail_sender.clone(),
            vec![user.email.clone()],
        )
        .text_body(format!(
            "Dear {},\n\nTo reset your password use the following link:\n\n{}\n\n\
             If you have not requested a password reset simply ignore this message.",
            user.username, link
        ))
        .html_body(format!(
            "<p>Dear {},</p><p>To reset your password <a href=\"{}\">click here</a>.</p>\
             <p>If you have not requested a password reset simply ignore this message.</p>",
            user.username, link
        ));

        if let Err(e) = mail.enqueue(message) {
            tracing::warn!("{}", e);
        }

        Ok(())
    }

    /// Sets a new password for the user named in a reset token.
    ///
    /// # Returns
    /// - `Ok(User)` - Password changed
    /// - `Err(AuthError::InvalidResetToken)` - Bad, expired or orphaned token
    /// - `Err(AppError::BadRequest)` - Empty password
    pub async fn reset_password(
        &self,
        token: &str,
        password: &str,
        secret: &str,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let user_id = decode_reset_token(token, secret).ok_or(AuthError::InvalidResetToken)?;
        let user = repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::InvalidResetToken)?;

        validate_password(password)?;
        repo.set_password_hash(user.id, hash_password(password)?)
            .await?;

        tracing::info!("Password reset for user {}", user.id);

        Ok(user)
    }
}

fn validate_email(email: &str) -> Result<(), AppError> {
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));

    if valid {
        Ok(())
    } else {
        Err(AppError::BadRequest("Invalid email address".to_string()))
    }
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.is_empty() {
        return Err(AppError::BadRequest("Password must not be empty".to_string()));
    }
    Ok(())
}
