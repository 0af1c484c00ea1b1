use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::param::PaginationParam,
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::ErrorDto,
        invitation::{
            InvitationDto, IssueInvitationDto, IssueInvitationParam, PaginatedInvitationsDto,
        },
    },
    service::invitation::InvitationService,
    state::AppState,
};

/// Tag for grouping invitation endpoints in OpenAPI documentation
pub static INVITATION_TAG: &str = "invitation";

/// Issue an invitation to an event.
///
/// Creates a pending invitation relating the given user to the event. The
/// invitation service authorizes the operation: only the event owner may issue
/// invitations. On success the configured webhook is notified.
///
/// # Access Control
/// - Authenticated; the service requires event ownership
///
/// # Arguments
/// - `state` - Application state containing the database connection and notifier
/// - `session` - User's session for authentication
/// - `event_id` - ID of the event to invite to
/// - `payload` - Invitation data naming the invitee
///
/// # Returns
/// - `201 Created` - Successfully issued invitation
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User does not own the event
/// - `404 Not Found` - Event or invitee not found
/// - `422 Unprocessable Entity` - User already invited
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/invitations",
    tag = INVITATION_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    request_body = IssueInvitationDto,
    responses(
        (status = 201, description = "Successfully issued invitation", body = InvitationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the event", body = ErrorDto),
        (status = 404, description = "Event or invitee not found", body = ErrorDto),
        (status = 422, description = "User already invited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn issue_invitation(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(payload): Json<IssueInvitationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = IssueInvitationParam::from_dto(event_id, payload);
    let invitation = InvitationService::new(&state.db, state.notifier.as_ref())
        .issue(&user, param)
        .await?;

    Ok((StatusCode::CREATED, Json(invitation)))
}

/// Get all invitations for an event.
///
/// Returns every invitation issued for the event with invitee names. The
/// invitation service authorizes the operation: only the event owner may list
/// an event's invitations.
///
/// # Access Control
/// - Authenticated; the service requires event ownership
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `event_id` - ID of the event
///
/// # Returns
/// - `200 OK` - Invitations for the event
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User does not own the event
/// - `404 Not Found` - Event not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/invitations",
    tag = INVITATION_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved invitations", body = Vec<InvitationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the event", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_invitations(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let invitations = InvitationService::new(&state.db, state.notifier.as_ref())
        .get_for_event(&user, event_id)
        .await?;

    Ok((StatusCode::OK, Json(invitations)))
}

/// Get the acting user's invitations.
///
/// Returns a page of the authenticated user's own invitations, most recently
/// issued first, enriched with event names.
///
/// # Access Control
/// - Authenticated
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `pagination` - Pagination parameters (page and per_page)
///
/// # Returns
/// - `200 OK` - Paginated list of the user's invitations
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/invitations",
    tag = INVITATION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved invitations", body = PaginatedInvitationsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_invitations(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let invitations = InvitationService::new(&state.db, state.notifier.as_ref())
        .get_for_user(&user, pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(invitations)))
}

/// Accept an invitation.
///
/// Transitions a pending invitation to accepted. The invitation service
/// authorizes the operation: only the invitee may respond, and only once.
///
/// # Access Control
/// - Authenticated; the service requires being the invitee
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `invitation_id` - ID of the invitation to accept
///
/// # Returns
/// - `200 OK` - Successfully accepted invitation
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not the invitee
/// - `404 Not Found` - Invitation not found
/// - `422 Unprocessable Entity` - Invitation already responded to
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/invitations/{invitation_id}/accept",
    tag = INVITATION_TAG,
    params(
        ("invitation_id" = i32, Path, description = "Invitation ID")
    ),
    responses(
        (status = 200, description = "Successfully accepted invitation", body = InvitationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the invitee", body = ErrorDto),
        (status = 404, description = "Invitation not found", body = ErrorDto),
        (status = 422, description = "Invitation already responded to", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_invitation(
    State(state): State<AppState>,
    session: Session,
    Path(invitation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let invitation = InvitationService::new(&state.db, state.notifier.as_ref())
        .accept(&user, invitation_id)
        .await?;

    Ok((StatusCode::OK, Json(invitation)))
}

/// Decline an invitation.
///
/// Transitions a pending invitation to declined. The invitation service
/// authorizes the operation: only the invitee may respond, and only once.
///
/// # Access Control
/// - Authenticated; the service requires being the invitee
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `invitation_id` - ID of the invitation to decline
///
/// # Returns
/// - `200 OK` - Successfully declined invitation
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not the invitee
/// - `404 Not Found` - Invitation not found
/// - `422 Unprocessable Entity` - Invitation already responded to
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/invitations/{invitation_id}/decline",
    tag = INVITATION_TAG,
    params(
        ("invitation_id" = i32, Path, description = "Invitation ID")
    ),
    responses(
        (status = 200, description = "Successfully declined invitation", body = InvitationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the invitee", body = ErrorDto),
        (status = 404, description = "Invitation not found", body = ErrorDto),
        (status = 422, description = "Invitation already responded to", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decline_invitation(
    State(state): State<AppState>,
    session: Session,
    Path(invitation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let invitation = InvitationService::new(&state.db, state.notifier.as_ref())
        .decline(&user, invitation_id)
        .await?;

    Ok((StatusCode::OK, Json(invitation)))
}
