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
        event::{
            CreateEventDto, CreateEventParam, EventDto, PaginatedEventsDto, UpdateEventDto,
            UpdateEventParam,
        },
    },
    service::event::EventService,
    state::AppState,
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Create a new event.
///
/// Creates a new event owned by the acting user. The event service authorizes
/// the operation: only users holding the parent role may create events. On
/// success the configured webhook is notified of the new event.
///
/// # Access Control
/// - Authenticated; the service requires the parent role
///
/// # Arguments
/// - `state` - Application state containing the database connection and notifier
/// - `session` - User's session for authentication
/// - `payload` - Event creation data (name, times, description)
///
/// # Returns
/// - `201 Created` - Successfully created event
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User lacks the parent role
/// - `422 Unprocessable Entity` - Invalid event data
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Successfully created event", body = EventDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User lacks the parent role", body = ErrorDto),
        (status = 422, description = "Invalid event data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = CreateEventParam::from_dto(payload);
    let event = EventService::new(&state.db, state.notifier.as_ref())
        .create(&user, param)
        .await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// Get paginated upcoming events.
///
/// Returns a page of events ordered by start time, excluding events that
/// started more than one hour ago.
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
/// - `200 OK` - Paginated list of upcoming events
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved events", body = PaginatedEventsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let events = EventService::new(&state.db, state.notifier.as_ref())
        .get_upcoming_paginated(pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(events)))
}

/// Get an event by ID.
///
/// # Access Control
/// - Authenticated
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `event_id` - ID of the event to fetch
///
/// # Returns
/// - `200 OK` - The event
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Event not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved event", body = EventDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let event = EventService::new(&state.db, state.notifier.as_ref())
        .get_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    Ok((StatusCode::OK, Json(event)))
}

/// Update an event.
///
/// Updates an existing event's name, times and description. The event service
/// authorizes the operation: only the owner may update an event.
///
/// # Access Control
/// - Authenticated; the service requires event ownership
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `event_id` - ID of the event to update
/// - `payload` - Updated event data
///
/// # Returns
/// - `200 OK` - Successfully updated event
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User does not own the event
/// - `404 Not Found` - Event not found
/// - `422 Unprocessable Entity` - Invalid event data
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Successfully updated event", body = EventDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the event", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 422, description = "Invalid event data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = UpdateEventParam::from_dto(payload);
    let event = EventService::new(&state.db, state.notifier.as_ref())
        .update(&user, event_id, param)
        .await?;

    Ok((StatusCode::OK, Json(event)))
}

/// Delete an event.
///
/// Deletes an event and, through cascading, its invitations. The event service
/// authorizes the operation: only the owner may delete an event.
///
/// # Access Control
/// - Authenticated; the service requires event ownership
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `event_id` - ID of the event to delete
///
/// # Returns
/// - `204 No Content` - Successfully deleted event
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User does not own the event
/// - `404 Not Found` - Event not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted event"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the event", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    EventService::new(&state.db, state.notifier.as_ref())
        .delete(&user, event_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
