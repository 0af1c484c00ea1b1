//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user sessions,
//! organized by concern. Each struct handles a specific domain of session data, preventing
//! typos, ensuring type consistency, and centralizing session-related logic.
//!
//! # Architecture
//!
//! Session management is split into focused concerns:
//! - `AuthSession` - User authentication state (user ID)
//! - `CsrfSession` - CSRF token management for the OAuth flow
//! - `OAuthFlowSession` - Temporary OAuth flow state (setup code validation)
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern.

use tower_sessions::Session;

use crate::error::AppError;

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_AUTH_SET_PARENT: &str = "auth:set_parent";

/// Authentication session management.
///
/// Handles user authentication state including storing and retrieving the
/// authenticated user's ID and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's ID in the session.
    ///
    /// Called after successful authentication to establish a logged-in session.
    ///
    /// # Arguments
    /// - `user_id` - The user's database ID
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's ID from the session.
    ///
    /// Used to identify the currently authenticated user.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to remove all session data including authentication
    /// state and any temporary OAuth flow data.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// Handles CSRF token storage and validation for the OAuth flow. Tokens are stored
/// during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    /// Creates a new CsrfSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new CsrfSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// Used during OAuth flow initiation to store a random token that will
    /// be validated during the callback to prevent CSRF attacks.
    ///
    /// # Arguments
    /// - `token` - The CSRF token to store
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// This is used during OAuth callback validation. The token is removed
    /// to prevent replay attacks - each token can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}

/// OAuth flow state session management.
///
/// Handles temporary state flags for the OAuth flow that need to persist across
/// the redirect to the provider and back. This covers the setup code validation
/// status used to bootstrap the first parent user.
pub struct OAuthFlowSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> OAuthFlowSession<'a> {
    /// Creates a new OAuthFlowSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new OAuthFlowSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks that a setup code was successfully validated during login.
    ///
    /// This flag is checked during the OAuth callback to grant the parent role
    /// to the newly authenticated user.
    ///
    /// # Arguments
    /// - `set_parent` - Whether to grant the parent role
    ///
    /// # Returns
    /// - `Ok(())` - Flag successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_parent_flag(&self, set_parent: bool) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_SET_PARENT, set_parent)
            .await?;
        Ok(())
    }

    /// Retrieves and removes the parent flag from the session.
    ///
    /// Used during OAuth callback to determine if the parent role should
    /// be granted to the user. The flag is removed to prevent reuse.
    ///
    /// # Returns
    /// - `Ok(true)` - Setup code was validated, grant the parent role
    /// - `Ok(false)` - No setup code was validated
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_parent_flag(&self) -> Result<bool, AppError> {
        let set_parent = self
            .session
            .remove(SESSION_AUTH_SET_PARENT)
            .await?
            .unwrap_or(false);
        Ok(set_parent)
    }
}
