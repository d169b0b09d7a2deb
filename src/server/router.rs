use axum::{
    routing::{get, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        attachment::{AttachmentDto, UploadAttachmentForm, UploadedAttachmentDto},
        calendar_event::{CalendarEventDto, CalendarEventInputDto},
        communication::{CommunicationDetailDto, CommunicationDto, CreateCommunicationDto},
        contact::{ContactDto, ContactInputDto},
        dashboard::DashboardDto,
        pagination::{PageLinksDto, PageMetaDto},
        resource::{CreateResourceForm, ResourceDetailDto, ResourceDto, ResourceInputDto},
        user::{
            LoginDto, ProfileInputDto, RegisterUserDto, ResetPasswordDto,
            ResetPasswordRequestDto, TokenDto, UserDto, UserLinksDto,
        },
    },
    server::{
        controller::{auth, calendar_event, communication, contact, dashboard, resource, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Dashboard API"),
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_user,
        auth::get_token,
        auth::revoke_token,
        auth::reset_password_request,
        auth::reset_password,
        user::get_users,
        user::get_user,
        user::get_profile,
        user::update_profile,
        dashboard::get_dashboard,
        calendar_event::get_events,
        calendar_event::create_event,
        calendar_event::get_event,
        calendar_event::update_event,
        calendar_event::delete_event,
        contact::get_contacts,
        contact::create_contact,
        contact::get_contact,
        contact::update_contact,
        contact::delete_contact,
        communication::get_communications,
        communication::create_communication,
        communication::get_communication,
        communication::delete_communication,
        communication::upload_attachment,
        communication::download_attachment,
        resource::get_resources,
        resource::create_resource,
        resource::get_resource,
        resource::update_resource,
        resource::delete_resource,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        UserDto,
        UserLinksDto,
        RegisterUserDto,
        LoginDto,
        TokenDto,
        ResetPasswordRequestDto,
        ResetPasswordDto,
        ProfileInputDto,
        DashboardDto,
        CalendarEventDto,
        CalendarEventInputDto,
        ContactDto,
        ContactInputDto,
        CommunicationDto,
        CommunicationDetailDto,
        CreateCommunicationDto,
        AttachmentDto,
        UploadedAttachmentDto,
        UploadAttachmentForm,
        ResourceDto,
        ResourceDetailDto,
        ResourceInputDto,
        CreateResourceForm,
        PageMetaDto,
        PageLinksDto,
    )),
    tags(
        (name = "auth", description = "Registration, login, tokens and password reset"),
        (name = "user", description = "User listing and profiles"),
        (name = "dashboard", description = "Aggregated dashboard"),
        (name = "calendar", description = "Calendar events"),
        (name = "contact", description = "Contacts"),
        (name = "communication", description = "Communications and attachments"),
        (name = "resource", description = "Photos and documents"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route(
            "/api/auth/tokens",
            post(auth::get_token).delete(auth::revoke_token),
        )
        .route(
            "/api/auth/reset_password_request",
            post(auth::reset_password_request),
        )
        .route(
            "/api/auth/reset_password/{token}",
            post(auth::reset_password),
        )
        .route("/api/users", get(user::get_users))
        .route("/api/users/me", put(user::update_profile))
        .route("/api/users/{id}", get(user::get_user))
        .route("/api/users/profile/{username}", get(user::get_profile))
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route(
            "/api/calendar/events",
            get(calendar_event::get_events).post(calendar_event::create_event),
        )
        .route(
            "/api/calendar/events/{id}",
            get(calendar_event::get_event)
                .put(calendar_event::update_event)
                .delete(calendar_event::delete_event),
        )
        .route(
            "/api/dashboard/contact",
            get(contact::get_contacts).post(contact::create_contact),
        )
        .route(
            "/api/dashboard/contact/{id}",
            get(contact::get_contact)
                .put(contact::update_contact)
                .delete(contact::delete_contact),
        )
        .route(
            "/api/dashboard/communicate",
            get(communication::get_communications).post(communication::create_communication),
        )
        .route(
            "/api/dashboard/communicate/upload",
            post(communication::upload_attachment),
        )
        .route(
            "/api/dashboard/communicate/download/{id}",
            get(communication::download_attachment),
        )
        .route(
            "/api/dashboard/communicate/{id}",
            get(communication::get_communication).delete(communication::delete_communication),
        )
        .route(
            "/api/dashboard/resources",
            get(resource::get_resources).post(resource::create_resource),
        )
        .route(
            "/api/dashboard/resources/{id}",
            get(resource::get_resource)
                .put(resource::update_resource)
                .delete(resource::delete_resource),
        )
        .route("/api/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
