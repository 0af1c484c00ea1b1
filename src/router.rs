use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        auth::{callback, get_user, login, logout},
        event::{create_event, delete_event, get_event, get_events, update_event},
        invitation::{
            accept_invitation, decline_invitation, get_event_invitations, get_my_invitations,
            issue_invitation,
        },
        user::get_users,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    crate::controller::user::get_users,
    crate::controller::event::create_event,
    crate::controller::event::get_events,
    crate::controller::event::get_event,
    crate::controller::event::update_event,
    crate::controller::event::delete_event,
    crate::controller::invitation::issue_invitation,
    crate::controller::invitation::get_event_invitations,
    crate::controller::invitation::get_my_invitations,
    crate::controller::invitation::accept_invitation,
    crate::controller::invitation::decline_invitation,
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(login))
        .route("/api/auth/callback", get(callback))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/users", get(get_users))
        .route("/api/events", post(create_event).get(get_events))
        .route(
            "/api/events/{event_id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route(
            "/api/events/{event_id}/invitations",
            post(issue_invitation).get(get_event_invitations),
        )
        .route("/api/invitations", get(get_my_invitations))
        .route(
            "/api/invitations/{invitation_id}/accept",
            post(accept_invitation),
        )
        .route(
            "/api/invitations/{invitation_id}/decline",
            post(decline_invitation),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
