use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Multipart, Path, Query, State,
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
        resource::{CreateResourceForm, ResourceDetailDto, ResourceDto, ResourceInputDto},
    },
    server::{
        controller::{form::FormData, param::ResourceFilterParam},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            patch::Patchable,
            resource::{Resource, ResourceParam},
        },
        service::resource::ResourceService,
        state::AppState,
    },
};

/// Tag for grouping resource endpoints in OpenAPI documentation
pub static RESOURCE_TAG: &str = "resource";

/// Get the current user's resources, optionally of one type.
///
/// # Access Control
/// - `Authenticated` - Only the owner's resources are listed
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `headers` - Request headers, checked for a bearer token
/// - `params` - Pagination parameters and optional `resource_type` filter
///
/// # Returns
/// - `200 OK` - One page of resources; links repeat the type filter
/// - `400 Bad Request` - Invalid pagination parameters or unknown type
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/dashboard/resources",
    tag = RESOURCE_TAG,
    params(
        ("page" = Option<i64>, Query, description = "1-based page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("resource_type" = Option<String>, Query, description = "Filter by `photo` or `document`")
    ),
    responses(
        (status = 200, description = "Paginated resources", body = PaginatedDto<ResourceDto>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_resources(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    params: Result<Query<ResourceFilterParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;
    let Query(params) = params?;

    let resource_type = params.resource_type()?;
    let page = ResourceService::new(&state.db, &state.images)
        .get_paginated(user.id, resource_type, params.to_request()?)
        .await?;

    let filters: Vec<(&str, &str)> = resource_type
        .iter()
        .map(|resource_type| ("resource_type", resource_type.as_str()))
        .collect();

    Ok((
        StatusCode::OK,
        Json(page.into_dto("/api/dashboard/resources", &filters, Resource::into_dto)),
    ))
}

/// Create a resource from a multipart form.
///
/// Accepts `title`, `description` and `resource_type` fields and an optional
/// `image` file part, stored in the image store.
///
/// # Access Control
/// - `Authenticated` - The resource is owned by the requester
///
/// # Returns
/// - `201 Created` - The new resource
/// - `400 Bad Request` - Missing title, unknown type or malformed body
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/dashboard/resources",
    tag = RESOURCE_TAG,
    request_body(content = CreateResourceForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Resource created", body = ResourceDto),
        (status = 400, description = "Invalid resource data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_resource(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;

    let mut form = FormData::read(multipart).await?;
    let image = form.take_file("image").map(|file| file.data);
    let param = resource_param_from_form(&mut form)?;

    let resource = ResourceService::new(&state.db, &state.images)
        .create(user.id, param, image)
        .await?;

    Ok((StatusCode::CREATED, Json(resource.into_dto())))
}

/// Get a resource with its image inlined as base64.
///
/// # Access Control
/// - `Authenticated` - Resources of other users are reported as not found
#[utoipa::path(
    get,
    path = "/api/dashboard/resources/{id}",
    tag = RESOURCE_TAG,
    params(
        ("id" = i32, Path, description = "Resource ID")
    ),
    responses(
        (status = 200, description = "Resource with image", body = ResourceDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_resource(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;

    let resource = ResourceService::new(&state.db, &state.images)
        .get(id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(resource.into_dto())))
}

/// Update a resource's title, description or type.
///
/// The stored image is kept; other keys in the body are ignored.
///
/// # Access Control
/// - `Authenticated` - Resources of other users are reported as not found
#[utoipa::path(
    put,
    path = "/api/dashboard/resources/{id}",
    tag = RESOURCE_TAG,
    params(
        ("id" = i32, Path, description = "Resource ID")
    ),
    request_body = ResourceInputDto,
    responses(
        (status = 200, description = "Resource updated", body = ResourceDto),
        (status = 400, description = "Invalid resource data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_resource(
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

    let resource = ResourceService::new(&state.db, &state.images)
        .update(id, user.id, &data)
        .await?;

    Ok((StatusCode::OK, Json(resource.into_dto())))
}

/// Delete a resource and its stored image.
///
/// # Access Control
/// - `Authenticated` - Resources of other users are reported as not found
#[utoipa::path(
    delete,
    path = "/api/dashboard/resources/{id}",
    tag = RESOURCE_TAG,
    params(
        ("id" = i32, Path, description = "Resource ID")
    ),
    responses(
        (status = 204, description = "Resource deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_resource(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;

    ResourceService::new(&state.db, &state.images)
        .delete(id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Builds resource fields from the text parts of a form.
///
/// Form values are strings, so they go through the same allow-list as JSON
/// bodies; an unknown `resource_type` is rejected there.
fn resource_param_from_form(form: &mut FormData) -> Result<ResourceParam, AppError> {
    let mut data = Map::new();
    for field in ResourceParam::ALLOWED_FIELDS {
        if let Some(value) = form.take_field(field) {
            data.insert(field.to_string(), Value::String(value));
        }
    }

    let mut param = ResourceParam::default();
    param.apply_patch(&data, ResourceParam::ALLOWED_FIELDS)?;

    Ok(param)
}
