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
        contact::{ContactDto, ContactInputDto},
        pagination::PaginatedDto,
    },
    server::{
        controller::param::PaginationParam, error::AppError, middleware::auth::AuthGuard,
        model::contact::Contact, service::contact::ContactService, state::AppState,
    },
};

/// Tag for grouping contact endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";

/// Get the current user's contacts ordered by name.
///
/// # Access Control
/// - `Authenticated` - Only the owner's contacts are listed
///
/// # Returns
/// - `200 OK` - One page of contacts
/// - `400 Bad Request` - Invalid pagination parameters
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/dashboard/contact",
    tag = CONTACT_TAG,
    params(
        ("page" = Option<i64>, Query, description = "1-based page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Paginated contacts", body = PaginatedDto<ContactDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contacts(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    params: Result<Query<PaginationParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;
    let Query(params) = params?;

    let page = ContactService::new(&state.db)
        .get_paginated(user.id, params.to_request()?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(page.into_dto("/api/dashboard/contact", &[], Contact::into_dto)),
    ))
}

/// Create a contact.
///
/// # Access Control
/// - `Authenticated` - The contact is owned by the requester
///
/// # Returns
/// - `201 Created` - The new contact
/// - `400 Bad Request` - Missing name or mistyped field
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/dashboard/contact",
    tag = CONTACT_TAG,
    request_body = ContactInputDto,
    responses(
        (status = 201, description = "Contact created", body = ContactDto),
        (status = 400, description = "Invalid contact data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_contact(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;
    let Json(data) = payload?;

    let contact = ContactService::new(&state.db).create(user.id, &data).await?;

    Ok((StatusCode::CREATED, Json(contact.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/contact/{id}",
    tag = CONTACT_TAG,
    params(
        ("id" = i32, Path, description = "Contact ID")
    ),
    responses(
        (status = 200, description = "Contact", body = ContactDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Contact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contact(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;

    let contact = ContactService::new(&state.db).get(id, user.id).await?;

    Ok((StatusCode::OK, Json(contact.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/dashboard/contact/{id}",
    tag = CONTACT_TAG,
    params(
        ("id" = i32, Path, description = "Contact ID")
    ),
    request_body = ContactInputDto,
    responses(
        (status = 200, description = "Contact updated", body = ContactDto),
        (status = 400, description = "Invalid contact data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Contact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_contact(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;
    let Json(data) = payload?;

    let contact = ContactService::new(&state.db)
        .update(id, user.id, &data)
        .await?;

    Ok((StatusCode::OK, Json(contact.into_dto())))
}

/// Delete a contact with all of its communications and their attachment files.
///
/// # Access Control
/// - `Authenticated` - Contacts of other users are reported as not found
///
/// # Returns
/// - `204 No Content` - Contact deleted
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - No such contact for this user
#[utoipa::path(
    delete,
    path = "/api/dashboard/contact/{id}",
    tag = CONTACT_TAG,
    params(
        ("id" = i32, Path, description = "Contact ID")
    ),
    responses(
        (status = 204, description = "Contact deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Contact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;

    ContactService::new(&state.db)
        .delete(id, user.id, &state.uploads)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
