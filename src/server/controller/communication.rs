use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Multipart, Path, Query, State,
    },
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        HeaderMap, StatusCode,
    },
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        attachment::{UploadAttachmentForm, UploadedAttachmentDto},
        communication::{CommunicationDetailDto, CommunicationDto, CreateCommunicationDto},
        pagination::PaginatedDto,
    },
    server::{
        controller::{form::FormData, param::PaginationParam},
        error::AppError,
        middleware::auth::AuthGuard,
        model::communication::Communication,
        service::{attachment::AttachmentService, communication::CommunicationService},
        state::AppState,
    },
};

/// Tag for grouping communication endpoints in OpenAPI documentation
pub static COMMUNICATION_TAG: &str = "communication";

/// Get the current user's communications, newest first.
///
/// # Access Control
/// - `Authenticated` - Only communications with the owner's contacts are listed
///
/// # Returns
/// - `200 OK` - One page of communications
/// - `400 Bad Request` - Invalid pagination parameters
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/dashboard/communicate",
    tag = COMMUNICATION_TAG,
    params(
        ("page" = Option<i64>, Query, description = "1-based page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Paginated communications", body = PaginatedDto<CommunicationDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_communications(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    params: Result<Query<PaginationParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;
    let Query(params) = params?;

    let page = CommunicationService::new(&state.db)
        .get_paginated(user.id, params.to_request()?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(page.into_dto(
            "/api/dashboard/communicate",
            &[],
            Communication::into_dto,
        )),
    ))
}

/// Log a communication with one of the current user's contacts.
///
/// # Access Control
/// - `Authenticated` - `contact_id` must name one of the requester's contacts
///
/// # Returns
/// - `201 Created` - The new communication
/// - `400 Bad Request` - Missing or mistyped fields
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Contact unknown or owned by someone else
#[utoipa::path(
    post,
    path = "/api/dashboard/communicate",
    tag = COMMUNICATION_TAG,
    request_body = CreateCommunicationDto,
    responses(
        (status = 201, description = "Communication created", body = CommunicationDto),
        (status = 400, description = "Invalid communication data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Contact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_communication(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;
    let Json(data) = payload?;

    let communication = CommunicationService::new(&state.db)
        .create(user.id, &data)
        .await?;

    Ok((StatusCode::CREATED, Json(communication.into_dto())))
}

/// Get a communication together with its attachments.
///
/// # Access Control
/// - `Authenticated` - Communications of other users are reported as not found
#[utoipa::path(
    get,
    path = "/api/dashboard/communicate/{id}",
    tag = COMMUNICATION_TAG,
    params(
        ("id" = i32, Path, description = "Communication ID")
    ),
    responses(
        (status = 200, description = "Communication with attachments", body = CommunicationDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Communication not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_communication(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;

    let communication = CommunicationService::new(&state.db)
        .get(id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(communication.into_dto())))
}

/// Delete a communication, its attachments and their files.
///
/// # Access Control
/// - `Authenticated` - Communications of other users are reported as not found
///
/// # Returns
/// - `204 No Content` - Communication deleted
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - No such communication for this user
#[utoipa::path(
    delete,
    path = "/api/dashboard/communicate/{id}",
    tag = COMMUNICATION_TAG,
    params(
        ("id" = i32, Path, description = "Communication ID")
    ),
    responses(
        (status = 204, description = "Communication deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Communication not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_communication(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;

    CommunicationService::new(&state.db)
        .delete(id, user.id, &state.uploads)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Upload a file and attach it to a communication.
///
/// The body is `multipart/form-data` with a `file` part and a
/// `communication_id` field. The file is stored as `{uuid}_{sanitized name}`.
///
/// # Access Control
/// - `Authenticated` - The communication must belong to one of the requester's contacts
///
/// # Returns
/// - `201 Created` - Attachment recorded
/// - `400 Bad Request` - Missing part, malformed body, or file type not allowed
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Communication unknown or owned by someone else
#[utoipa::path(
    post,
    path = "/api/dashboard/communicate/upload",
    tag = COMMUNICATION_TAG,
    request_body(content = UploadAttachmentForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File uploaded", body = UploadedAttachmentDto),
        (status = 400, description = "Missing part or invalid file type", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Invalid communication ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_attachment(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;

    let mut form = FormData::read(multipart).await?;
    let (Some(file), Some(communication_id)) =
        (form.take_file("file"), form.take_field("communication_id"))
    else {
        return Err(AppError::BadRequest(
            "File and communication_id are required".to_string(),
        ));
    };

    let communication_id = communication_id
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::NotFound("Invalid communication ID".to_string()))?;

    let attachment = AttachmentService::new(&state.db, &state.uploads)
        .upload(
            user.id,
            communication_id,
            file,
            &state.config.allowed_extensions,
        )
        .await?;

    tracing::info!(
        "User {} uploaded attachment {} to communication {}",
        user.id,
        attachment.id,
        communication_id
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadedAttachmentDto {
            message: "File uploaded successfully".to_string(),
            attachment: attachment.into_dto(),
        }),
    ))
}

/// Download the stored bytes of an attachment.
///
/// # Access Control
/// - `Authenticated` - Attachments of other users are reported as not found
///
/// # Returns
/// - `200 OK` - File contents with its recorded content type
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - No such attachment, or its file is gone
#[utoipa::path(
    get,
    path = "/api/dashboard/communicate/download/{id}",
    tag = COMMUNICATION_TAG,
    params(
        ("id" = i32, Path, description = "Attachment ID")
    ),
    responses(
        (status = 200, description = "File contents", content_type = "application/octet-stream"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Attachment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_attachment(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;

    let (attachment, data) = AttachmentService::new(&state.db, &state.uploads)
        .download(id, user.id)
        .await?;

    let disposition = format!("attachment; filename=\"{}\"", attachment.filename);

    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, attachment.filetype), (CONTENT_DISPOSITION, disposition)],
        data,
    ))
}
