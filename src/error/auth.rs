use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user in the session.
    ///
    /// The request requires authentication but the session holds no user ID.
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// Session references a user that no longer exists.
    ///
    /// The session holds a user ID that cannot be found in the database, typically
    /// because the user was deleted after logging in. Results in a 404 Not Found
    /// response.
    ///
    /// # Fields
    /// - The user ID that was not found
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Acting user lacks a required privilege.
    ///
    /// Raised when an authenticated user attempts an operation gated by a role or
    /// ownership they do not hold. The detailed message is logged server-side;
    /// the client receives a generic message. Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - The acting user's ID
    /// - Human-readable description of the denied operation
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// OAuth authorization code exchange failed.
    ///
    /// The provider rejected the token exchange or the request failed in transit.
    /// Results in a 500 Internal Server Error with a generic message returned to
    /// the client.
    ///
    /// # Fields
    /// - Description of the exchange failure for server-side logging
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchangeFailed(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error
/// messages. Detailed failure reasons are logged at debug level for diagnostics while
/// keeping client-facing messages generic to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For CSRF validation failures
/// - 401 Unauthorized - For missing session authentication
/// - 403 Forbidden - For privilege and ownership failures
/// - 404 Not Found - For missing users
/// - 500 Internal Server Error - For token exchange failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in to access this resource.".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!("Session user {} not found in database", user_id);
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(user_id, message) => {
                tracing::debug!("Access denied for user {}: {}", user_id, message);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to perform this action.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::TokenExchangeFailed(reason) => {
                tracing::error!("OAuth token exchange failed: {}", reason);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "There was an issue logging you in, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
