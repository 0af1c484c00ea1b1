use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::param::PaginationParam,
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    service::user::UserService,
    state::AppState,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the paginated member directory.
///
/// Returns a page of all registered users ordered by display name, used by
/// parents to choose invitees. Only accessible by parents.
///
/// # Access Control
/// - `Parent` - Only parents can browse the member directory
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `pagination` - Pagination parameters (page and per_page)
///
/// # Returns
/// - `200 OK` - Paginated list of users
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User lacks the parent role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = crate::model::user::PaginatedUsersDto),
        (status = 401, description = "User not authenticated", body = crate::model::api::ErrorDto),
        (status = 403, description = "User lacks the parent role", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Parent])
        .await?;

    let users = UserService::new(&state.db)
        .get_paginated(pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(users)))
}
