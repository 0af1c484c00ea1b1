use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Role-based permissions checked by the `AuthGuard`.
pub enum Permission {
    /// Requires the acting user to hold the parent role.
    Parent,
}

/// Authentication and permission guard for request handlers.
///
/// Resolves the session's user from the database and verifies the required
/// permissions before the handler invokes a service. Pass an empty permission
/// slice to require authentication only.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the authenticated user and checks the required permissions.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the acting user must hold (empty for
    ///   authentication only)
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated acting user
    /// - `Err(AppError::AuthErr(_))` - Not logged in, unknown user, or missing
    ///   permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Parent => {
                    if !user.parent {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User lacks the required parent role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
