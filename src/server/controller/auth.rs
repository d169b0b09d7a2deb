use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{
            LoginDto, RegisterUserDto, ResetPasswordDto, ResetPasswordRequestDto, TokenDto,
            UserDto,
        },
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::RegisterUserParam,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Username, email and plaintext password
///
/// # Returns
/// - `201 Created` - The new user, including their email
/// - `400 Bad Request` - Invalid input, or username or email already taken
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid input or duplicate username/email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let user = AuthService::new(&state.db)
        .register(RegisterUserParam {
            username: payload.username,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    tracing::info!("Registered user {} ({})", user.username, user.id);

    Ok((StatusCode::CREATED, Json(user.into_dto(true))))
}

/// Sign in with username and password.
///
/// Stores the user in the session; later requests from the same client are
/// authenticated by the session cookie.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The signed-in user
/// - `400 Bad Request` - Malformed body
/// - `401 Unauthorized` - Unknown username or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = UserDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let user = AuthService::new(&state.db)
        .login(&payload.username, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto(true))))
}

/// Sign out by clearing the session.
///
/// # Access Control
/// - Public; clearing an anonymous session is a no-op
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed out", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Get the currently authenticated user.
///
/// # Access Control
/// - `Authenticated` - Session or bearer token
///
/// # Returns
/// - `200 OK` - The current user, including their email
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto(true))))
}

/// Issue a bearer token for the current user.
///
/// A token with more than a minute of validity left is returned again instead
/// of issuing a new one.
///
/// # Access Control
/// - `Authenticated` - Session or bearer token
///
/// # Returns
/// - `200 OK` - The bearer token
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/auth/tokens",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Bearer token", body = TokenDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_token(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;

    let token = AuthService::new(&state.db).get_token(&user).await?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}

/// Revoke the current user's bearer token.
///
/// # Access Control
/// - `Authenticated` - Session or bearer token
///
/// # Returns
/// - `204 No Content` - Token revoked
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    delete,
    path = "/api/auth/tokens",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Token revoked"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn revoke_token(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;

    AuthService::new(&state.db).revoke_token(&user).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Request a password reset email.
///
/// Always answers 202 so the endpoint cannot be used to discover which
/// addresses have accounts.
///
/// # Access Control
/// - Public
#[utoipa::path(
    post,
    path = "/api/auth/reset_password_request",
    tag = AUTH_TAG,
    request_body = ResetPasswordRequestDto,
    responses(
        (status = 202, description = "Reset email queued if the address is known", body = MessageDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password_request(
    State(state): State<AppState>,
    payload: Result<Json<ResetPasswordRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    AuthService::new(&state.db)
        .request_password_reset(&payload.email, &state.mail, &state.config)
        .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(MessageDto {
            message: "Check your email for the instructions to reset your password".to_string(),
        }),
    ))
}

/// Set a new password using a token from a reset email.
///
/// # Access Control
/// - Public; the token identifies the user
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - Invalid or expired token, or empty password
#[utoipa::path(
    post,
    path = "/api/auth/reset_password/{token}",
    tag = AUTH_TAG,
    params(
        ("token" = String, Path, description = "Signed reset token from the email")
    ),
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "Invalid token or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Path(token): Path<String>,
    payload: Result<Json<ResetPasswordDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    AuthService::new(&state.db)
        .reset_password(&token, &payload.password, &state.config.secret_key)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Your password has been reset.".to_string(),
        }),
    ))
}
