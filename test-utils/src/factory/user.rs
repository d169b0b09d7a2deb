//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder stored when a test does not care about the password.
///
/// Not a valid PHC string, so password verification against it always fails.
pub const UNUSABLE_PASSWORD_HASH: &str = "!unusable";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("susan")
///     .token("0123456789abcdef0123456789abcdef", Duration::hours(1))
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    password_hash: String,
    about_me: Option<String>,
    token: Option<String>,
    token_expiration: Option<DateTime<Utc>>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - password_hash: [`UNUSABLE_PASSWORD_HASH`]
    /// - about_me, token, token_expiration: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            password_hash: UNUSABLE_PASSWORD_HASH.to_string(),
            about_me: None,
            token: None,
            token_expiration: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash.
    ///
    /// Tests that log in with a password must pass a real Argon2 PHC string.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn about_me(mut self, about_me: impl Into<String>) -> Self {
        self.about_me = Some(about_me.into());
        self
    }

    /// Gives the user a bearer token expiring `expires_in` from now.
    ///
    /// A negative duration creates an already expired token.
    ///
    /// # Arguments
    /// - `token` - Token string
    /// - `expires_in` - Offset from now for the expiration
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn token(mut self, token: impl Into<String>, expires_in: Duration) -> Self {
        self.token = Some(token.into());
        self.token_expiration = Some(Utc::now() + expires_in);
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            about_me: ActiveValue::Set(self.about_me),
            last_seen: ActiveValue::Set(Some(Utc::now())),
            token: ActiveValue::Set(self.token),
            token_expiration: ActiveValue::Set(self.token_expiration),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user holding a bearer token valid for one hour.
///
/// # Arguments
/// - `db` - Database connection
/// - `token` - Token string to assign
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_with_token(
    db: &DatabaseConnection,
    token: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .token(token, Duration::hours(1))
        .build()
        .await
}
