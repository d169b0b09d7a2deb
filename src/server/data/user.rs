//! User data repository for database operations.
//!
//! Provides the `UserRepository` for account records: registration, lookups by
//! the various unique keys, profile edits, password changes and bearer token
//! bookkeeping. Entity models are converted to domain `User`s at this boundary.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{User, UserParam};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with an already hashed password.
    ///
    /// # Arguments
    /// - `username` - Unique username
    /// - `email` - Unique email address
    /// - `password_hash` - Argon2 PHC string
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            about_me: ActiveValue::Set(None),
            last_seen: ActiveValue::Set(Some(Utc::now())),
            token: ActiveValue::Set(None),
            token_expiration: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the user currently holding `token`, regardless of its expiration.
    ///
    /// Expiry is checked by the caller.
    pub async fn find_by_token(&self, token: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Token.eq(token))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets a page of users ordered by id.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users per page
    ///
    /// # Returns
    /// - `Ok((users, total_items))` - Users on the page and the total user count
    /// - `Err(DbErr)` - Database error
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = if super::page_in_range(page, per_page, total) {
            paginator.fetch_page(page).await?
        } else {
            Vec::new()
        };

        Ok((users.into_iter().map(User::from_entity).collect(), total))
    }

    /// Writes the profile fields of a user.
    pub async fn update(&self, id: i32, param: UserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            about_me: ActiveValue::Set(param.about_me),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn set_password_hash(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            password_hash: ActiveValue::Set(password_hash),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Stores a bearer token and its expiration for the user.
    pub async fn set_token(
        &self,
        id: i32,
        token: String,
        expiration: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            token: ActiveValue::Set(Some(token)),
            token_expiration: ActiveValue::Set(Some(expiration)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Moves the token expiration of the user, keeping the token itself.
    pub async fn set_token_expiration(
        &self,
        id: i32,
        expiration: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            token_expiration: ActiveValue::Set(Some(expiration)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    pub async fn update_last_seen(&self, id: i32, last_seen: DateTime<Utc>) -> Result<(), DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            last_seen: ActiveValue::Set(Some(last_seen)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }
}
