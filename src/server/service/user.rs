use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        pagination::{Page, PageRequest},
        patch::Patchable,
        user::{unique_user_error, User, UserParam, USERNAME_TAKEN},
    },
};

/// Fields a user may change through the profile editor.
pub const PROFILE_FIELDS: &[&str] = &["username", "about_me"];

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(&self, request: PageRequest) -> Result<Page<User>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(request.index(), request.per_page)
            .await?;

        Ok(Page::new(users, request, total))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Applies a profile edit to `user`.
    ///
    /// Only `username` and `about_me` are taken from `data`. A new username must
    /// not belong to another user.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::BadRequest)` - Invalid field value or username taken
    pub async fn update_profile(
        &self,
        user: &User,
        data: &Map<String, Value>,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let mut param: UserParam = user.to_param();
        param.apply_patch(data, PROFILE_FIELDS)?;
        param.validate()?;

        if param.username != user.username {
            if let Some(existing) = repo.find_by_username(&param.username).await? {
                if existing.id != user.id {
                    return Err(AppError::BadRequest(USERNAME_TAKEN.to_string()));
                }
            }
        }

        repo.update(user.id, param).await.map_err(unique_user_error)
    }
}
