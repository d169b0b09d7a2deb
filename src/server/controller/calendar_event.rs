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
        calendar_event::{CalendarEventDto, CalendarEventInputDto},
        pagination::PaginatedDto,
    },
    server::{
        controller::param::PaginationParam, error::AppError, middleware::auth::AuthGuard,
        model::calendar_event::CalendarEvent, service::calendar_event::CalendarEventService,
        state::AppState,
    },
};

/// Tag for grouping calendar endpoints in OpenAPI documentation
pub static CALENDAR_TAG: &str = "calendar";

/// Get the current user's events, ordered by start time.
///
/// # Access Control
/// - `Authenticated` - Only the owner's events are listed
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `headers` - Request headers, checked for a bearer token
/// - `params` - Pagination parameters (page and per_page)
///
/// # Returns
/// - `200 OK` - One page of events
/// - `400 Bad Request` - Invalid pagination parameters
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/calendar/events",
    tag = CALENDAR_TAG,
    params(
        ("page" = Option<i64>, Query, description = "1-based page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Paginated events", body = PaginatedDto<CalendarEventDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    params: Result<Query<PaginationParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;
    let Query(params) = params?;

    let page = CalendarEventService::new(&state.db)
        .get_paginated(user.id, params.to_request()?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(page.into_dto("/api/calendar/events", &[], CalendarEvent::into_dto)),
    ))
}

/// Create an event for the current user.
///
/// # Access Control
/// - `Authenticated` - The event is owned by the requester
///
/// # Returns
/// - `201 Created` - The new event
/// - `400 Bad Request` - Missing title, start or end; mistyped field; end before start
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/calendar/events",
    tag = CALENDAR_TAG,
    request_body = CalendarEventInputDto,
    responses(
        (status = 201, description = "Event created", body = CalendarEventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;
    let Json(data) = payload?;

    let event = CalendarEventService::new(&state.db)
        .create(user.id, &data)
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// Get one of the current user's events.
///
/// # Access Control
/// - `Authenticated` - Events of other users are reported as not found
///
/// # Returns
/// - `200 OK` - The event
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - No such event for this user
#[utoipa::path(
    get,
    path = "/api/calendar/events/{id}",
    tag = CALENDAR_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event", body = CalendarEventDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;

    let event = CalendarEventService::new(&state.db).get(id, user.id).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Update one of the current user's events.
///
/// Absent fields keep their value; keys outside the event's writable fields are
/// ignored.
///
/// # Access Control
/// - `Authenticated` - Events of other users are reported as not found
///
/// # Returns
/// - `200 OK` - The updated event
/// - `400 Bad Request` - Mistyped field or end before start
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - No such event for this user
#[utoipa::path(
    put,
    path = "/api/calendar/events/{id}",
    tag = CALENDAR_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = CalendarEventInputDto,
    responses(
        (status = 200, description = "Event updated", body = CalendarEventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
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

    let event = CalendarEventService::new(&state.db)
        .update(id, user.id, &data)
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Delete one of the current user's events.
///
/// # Access Control
/// - `Authenticated` - Events of other users are reported as not found
///
/// # Returns
/// - `204 No Content` - Event deleted
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - No such event for this user
#[utoipa::path(
    delete,
    path = "/api/calendar/events/{id}",
    tag = CALENDAR_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;

    CalendarEventService::new(&state.db)
        .delete(id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
