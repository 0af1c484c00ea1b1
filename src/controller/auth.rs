use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::AuthGuard,
        session::{AuthSession, CsrfSession, OAuthFlowSession},
    },
    service::auth::AuthService,
    state::AppState,
};

/// Query parameters for the login endpoint.
#[derive(Deserialize)]
pub struct LoginParams {
    /// Optional one-time setup code granting the parent role on this login.
    pub code: Option<String>,
}

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from the provider for token exchange.
    pub code: String,
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LoginParams>,
) -> Result<impl IntoResponse, AppError> {
    // A validated setup code marks this login to be granted the parent role
    if let Some(code) = params.code {
        let grant_parent = state.setup_code_service.validate(&code).await;
        OAuthFlowSession::new(&session)
            .set_parent_flag(grant_parent)
            .await?;
    }

    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.userinfo_url,
    );

    let (url, csrf_token) = auth_service.login_url();

    // Store CSRF token in session for verification during callback
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.state).await?;

    let grant_parent = OAuthFlowSession::new(&session).take_parent_flag().await?;

    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.userinfo_url,
    );

    let user = auth_service.callback(params.code, grant_parent).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
