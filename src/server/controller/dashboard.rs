use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, dashboard::DashboardDto},
    server::{
        controller::param::DashboardParam,
        error::AppError,
        middleware::{auth::AuthGuard, session::DashboardSession},
        service::dashboard::DashboardService,
        state::AppState,
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Get the aggregated dashboard of the current user.
///
/// Collects all calendar events, photos, documents and contacts of the user
/// along with their most recent communications. A welcome message is included
/// on the first dashboard visit of a session.
///
/// # Access Control
/// - `Authenticated` - Session or bearer token
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session, also tracks the first visit
/// - `headers` - Request headers, checked for a bearer token
/// - `params` - Optional `section` to echo back, defaults to `welcome`
///
/// # Returns
/// - `200 OK` - Dashboard contents
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = DASHBOARD_TAG,
    params(
        ("section" = Option<String>, Query, description = "Section shown by the client (default: welcome)")
    ),
    responses(
        (status = 200, description = "Dashboard contents", body = DashboardDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    params: Result<Query<DashboardParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &headers)
        .require()
        .await?;
    let Query(params) = params?;

    let first_visit = DashboardSession::new(&session).take_first_visit().await?;

    let dashboard = DashboardService::new(&state.db)
        .get(&user, params.section, first_visit)
        .await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}
