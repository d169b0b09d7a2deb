use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        pagination::PaginatedDto,
        user::{ProfileInputDto, UserDto},
    },
    server::{
        controller::param::PaginationParam, error::AppError, middleware::auth::AuthGuard,
        service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get a paginated list of users.
///
/// Email addresses are only included for the requesting user's own entry.
///
/// # Access Control
/// - `Authenticated` - Session or bearer token
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `headers` - Request headers, checked for a bearer token
/// - `params` - Pagination parameters (page and per_page)
///
/// # Returns
/// - `200 OK` - One page of users
/// - `400 Bad Request` - Invalid pagination parameters
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("page" = Option<i64>, Query, description = "1-based page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Paginated users", body = PaginatedDto<UserDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    params: Result<Query<PaginationParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;
    let Query(params) = params?;

    let page = UserService::new(&state.db)
        .get_paginated(params.to_request()?)
        .await?;

    let dto = page.into_dto("/api/users", &[], |user| {
        let is_self = user.id == current.id;
        user.into_dto(is_self)
    });

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a user by id.
///
/// # Access Control
/// - `Authenticated` - Session or bearer token
///
/// # Returns
/// - `200 OK` - The user, with email only if it is the requester
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - No such user
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;

    let user = UserService::new(&state.db).get_by_id(id).await?;
    let is_self = user.id == current.id;

    Ok((StatusCode::OK, Json(user.into_dto(is_self))))
}

/// Get a user's public profile by username.
///
/// # Access Control
/// - `Authenticated` - Session or bearer token
///
/// # Returns
/// - `200 OK` - The user profile
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - No such user
#[utoipa::path(
    get,
    path = "/api/users/profile/{username}",
    tag = USER_TAG,
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "User profile", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;

    let user = UserService::new(&state.db)
        .get_by_username(&username)
        .await?;
    let is_self = user.id == current.id;

    Ok((StatusCode::OK, Json(user.into_dto(is_self))))
}

/// Edit the current user's profile.
///
/// Only `username` and `about_me` are read from the body; any other key is
/// ignored.
///
/// # Access Control
/// - `Authenticated` - Session or bearer token
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Invalid value or username taken
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = ProfileInputDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;
    let Json(data) = payload?;

    let user = UserService::new(&state.db)
        .update_profile(&current, &data)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto(true))))
}
