//! User domain models and parameters.
//!
//! Users own every other record. The domain model carries the credential columns
//! needed by the auth service; `into_dto` never exposes them.

use chrono::{DateTime, Utc};
use sea_orm::{DbErr, SqlErr};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::{
    model::user::{UserDto, UserLinksDto},
    server::{error::AppError, model::patch::Patchable},
};

const MAX_USERNAME_LENGTH: usize = 64;
const MAX_ABOUT_ME_LENGTH: usize = 140;
const AVATAR_SIZE: u32 = 128;

pub const USERNAME_TAKEN: &str = "Please use a different username.";
pub const EMAIL_TAKEN: &str = "Please use a different email address.";

/// Application user with credentials and token state.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub about_me: Option<String>,
    pub last_seen: Option<DateTime<Utc>>,
    /// Current bearer token, valid until `token_expiration`.
    pub token: Option<String>,
    pub token_expiration: Option<DateTime<Utc>>,
}

impl User {
    /// Converts the user to a DTO for API responses.
    ///
    /// # Arguments
    /// - `include_email` - Whether to include the email address, only for the user themselves
    pub fn into_dto(self, include_email: bool) -> UserDto {
        let links = UserLinksDto {
            self_link: format!("/api/users/{}", self.id),
            avatar: self.avatar(AVATAR_SIZE),
        };

        UserDto {
            id: self.id,
            username: self.username,
            last_seen: self.last_seen,
            about_me: self.about_me,
            email: include_email.then_some(self.email),
            links,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            about_me: entity.about_me,
            last_seen: entity.last_seen,
            token: entity.token,
            token_expiration: entity.token_expiration,
        }
    }

    /// Gravatar URL for the user's email with an identicon fallback.
    pub fn avatar(&self, size: u32) -> String {
        let digest = Sha256::digest(self.email.trim().to_lowercase().as_bytes());
        format!(
            "https://www.gravatar.com/avatar/{}?d=identicon&s={}",
            hex::encode(digest),
            size
        )
    }

    /// Returns the current token if it stays valid for longer than `min_remaining`.
    pub fn reusable_token(&self, now: DateTime<Utc>, min_remaining: chrono::Duration) -> Option<&str> {
        match (&self.token, self.token_expiration) {
            (Some(token), Some(expiration)) if expiration > now + min_remaining => {
                Some(token.as_str())
            }
            _ => None,
        }
    }

    pub fn to_param(&self) -> UserParam {
        UserParam {
            username: self.username.clone(),
            email: self.email.clone(),
            about_me: self.about_me.clone(),
        }
    }
}

/// Parameters for registering a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub username: String,
    pub email: String,
    /// Plaintext password, hashed by the service before storage.
    pub password: String,
}

/// Mutable profile fields of a user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserParam {
    pub username: String,
    pub email: String,
    pub about_me: Option<String>,
}

impl UserParam {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_username(&self.username)?;
        if self
            .about_me
            .as_ref()
            .is_some_and(|about| about.chars().count() > MAX_ABOUT_ME_LENGTH)
        {
            return Err(AppError::BadRequest(format!(
                "about_me must be at most {} characters",
                MAX_ABOUT_ME_LENGTH
            )));
        }
        Ok(())
    }
}

impl Patchable for UserParam {
    const ALLOWED_FIELDS: &'static [&'static str] = &["username", "email", "about_me"];

    fn set_field(&mut self, field: &str, value: Value) -> Result<(), serde_json::Error> {
        match field {
            "username" => self.username = serde_json::from_value(value)?,
            "email" => self.email = serde_json::from_value(value)?,
            "about_me" => self.about_me = serde_json::from_value(value)?,
            _ => {}
        }
        Ok(())
    }
}

pub fn validate_username(username: &str) -> Result<(), AppError> {
    if username.trim().is_empty() {
        return Err(AppError::BadRequest("Username must not be empty".to_string()));
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Username must be at most {} characters",
            MAX_USERNAME_LENGTH
        )));
    }
    Ok(())
}

/// Maps a violated unique key on the username or email column to the same
/// client error the up-front availability checks give.
///
/// Any other database error passes through as a server error.
pub fn unique_user_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) if detail.contains("email") => {
            AppError::BadRequest(EMAIL_TAKEN.to_string())
        }
        Some(SqlErr::UniqueConstraintViolation(detail)) if detail.contains("username") => {
            AppError::BadRequest(USERNAME_TAKEN.to_string())
        }
        _ => err.into(),
    }
}
